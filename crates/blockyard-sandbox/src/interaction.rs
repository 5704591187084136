//! Pointer-to-grid mapping and block placement rules

use blockyard_world::{BlockKind, Grid};

/// Cell under a pixel position. Positions left of or above the grid map to
/// negative cells.
pub fn screen_to_cell(px: f32, py: f32, tile_size: f32) -> (i32, i32) {
    (
        (px / tile_size).floor() as i32,
        (py / tile_size).floor() as i32,
    )
}

/// Top-left pixel of a cell
pub fn cell_to_screen(gx: i32, gy: i32, tile_size: f32) -> (f32, f32) {
    (gx as f32 * tile_size, gy as f32 * tile_size)
}

/// Put `kind` into an empty cell. Occupied and out-of-bounds cells are left
/// alone. Returns whether the grid changed.
pub fn place(grid: &mut Grid, (x, y): (i32, i32), kind: BlockKind) -> bool {
    if kind == BlockKind::Air || grid.get(x, y) != Some(BlockKind::Air) {
        return false;
    }
    grid.set(x, y, kind);
    true
}

/// Clear an occupied cell, returning what was there
pub fn remove(grid: &mut Grid, (x, y): (i32, i32)) -> Option<BlockKind> {
    match grid.get(x, y) {
        Some(kind) if kind != BlockKind::Air => grid.set(x, y, BlockKind::Air),
        _ => None,
    }
}
