//! Fixed-size tile grid

use crate::block::BlockKind;
use crate::persist::SavedWorld;
use crate::terrain;
use blockyard_core::{BlockyardError, Result};

/// A `width × height` grid of blocks with origin at the top-left.
///
/// Cells are stored column-major so that a column is contiguous, matching the
/// `[x][y]` layout of save files. Coordinates outside the grid are never
/// stored: reads return `None` and writes are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<BlockKind>,
}

/// Largest number of cells a grid may hold
pub const MAX_CELLS: usize = 1 << 24;

/// Cell count of a `width × height` grid, or `None` when either side is zero,
/// a coordinate would not fit in `i32`, or the total exceeds [`MAX_CELLS`]
pub fn cell_count(width: usize, height: usize) -> Option<usize> {
    if width == 0 || height == 0 || width > i32::MAX as usize || height > i32::MAX as usize {
        return None;
    }
    width.checked_mul(height).filter(|&n| n <= MAX_CELLS)
}

impl Grid {
    /// Create a grid filled with air
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![BlockKind::Air; width * height],
        }
    }

    /// Create a grid populated by the default terrain generator
    pub fn generate(width: usize, height: usize) -> Self {
        terrain::generate(width, height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Block at `(x, y)`, or `None` when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<BlockKind> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Overwrite the block at `(x, y)` and return the previous one.
    ///
    /// Out-of-bounds writes leave the grid untouched and return `None`.
    pub fn set(&mut self, x: i32, y: i32, kind: BlockKind) -> Option<BlockKind> {
        let i = self.index(x, y)?;
        Some(std::mem::replace(&mut self.cells[i], kind))
    }

    /// Whether `(x, y)` holds a solid block. Out-of-bounds cells are not solid.
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(BlockKind::is_solid)
    }

    /// Top-most solid row of column `x`
    pub fn surface_y(&self, x: i32) -> Option<i32> {
        (0..self.height as i32).find(|&y| self.is_solid(x, y))
    }

    /// Number of cells holding `kind`
    pub fn count(&self, kind: BlockKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// All cells as `(x, y, kind)`, column by column
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, BlockKind)> + '_ {
        let height = self.height.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &kind)| ((i / height) as i32, (i % height) as i32, kind))
    }

    /// Snapshot the grid into its persisted form
    pub fn serialize(&self) -> SavedWorld {
        let grid = if self.height == 0 {
            vec![Vec::new(); self.width]
        } else {
            self.cells
                .chunks(self.height)
                .map(|column| column.iter().map(|k| k.code()).collect())
                .collect()
        };
        SavedWorld {
            w: self.width,
            h: self.height,
            grid,
        }
    }

    /// Rebuild a grid from its persisted form.
    ///
    /// Fails without producing a partial grid if the dimensions are empty, the
    /// cell array does not match them, or any code is unknown.
    pub fn deserialize(saved: &SavedWorld) -> Result<Self> {
        let total = cell_count(saved.w, saved.h).ok_or_else(|| {
            BlockyardError::MalformedSave(format!(
                "grid dimensions {}x{} are empty or too large",
                saved.w, saved.h
            ))
        })?;
        if saved.grid.len() != saved.w {
            return Err(BlockyardError::MalformedSave(format!(
                "expected {} columns, found {}",
                saved.w,
                saved.grid.len()
            )));
        }

        let mut cells = Vec::with_capacity(total);
        for (x, column) in saved.grid.iter().enumerate() {
            if column.len() != saved.h {
                return Err(BlockyardError::MalformedSave(format!(
                    "column {} has {} cells, expected {}",
                    x,
                    column.len(),
                    saved.h
                )));
            }
            for (y, &code) in column.iter().enumerate() {
                let kind = BlockKind::from_code(code).ok_or_else(|| {
                    BlockyardError::MalformedSave(format!(
                        "unknown block code {} at ({}, {})",
                        code, x, y
                    ))
                })?;
                cells.push(kind);
            }
        }

        Ok(Self {
            width: saved.w,
            height: saved.h,
            cells,
        })
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(x as usize * self.height + y as usize)
        } else {
            None
        }
    }
}
