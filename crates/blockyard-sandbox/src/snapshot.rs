//! Read-only view of a tick for renderers

use blockyard_core::{Color, Rect};
use blockyard_world::BlockKind;

/// One visible block
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileView {
    pub x: i32,
    pub y: i32,
    pub kind: BlockKind,
    /// Pixel rectangle covered by the block
    pub rect: Rect,
}

impl TileView {
    pub fn color(&self) -> Option<Color> {
        self.kind.color()
    }
}

/// Everything a renderer needs to draw one frame
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSnapshot {
    pub tile_size: f32,
    pub grid_width: usize,
    pub grid_height: usize,
    /// Non-air cells, column by column
    pub tiles: Vec<TileView>,
    pub player: Rect,
    pub hotbar: Vec<BlockKind>,
    pub selected: usize,
    /// Cell under the pointer, if it is inside the grid
    pub hovered: Option<(i32, i32)>,
    pub show_grid: bool,
}

impl FrameSnapshot {
    pub fn selected_kind(&self) -> Option<BlockKind> {
        self.hotbar.get(self.selected).copied()
    }

    /// Status line shown under the hotbar, e.g. `Selected: 1 - dirt`
    pub fn status_line(&self) -> String {
        match self.selected_kind() {
            Some(kind) => format!("Selected: {} - {}", self.selected + 1, kind),
            None => String::new(),
        }
    }
}
