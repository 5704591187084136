//! The player's physical body

use blockyard_core::{Rect, Vec2};

/// A box-shaped body moving through the grid.
///
/// `position` is the top-left corner in pixels; y grows downward, so a
/// positive `velocity.y` means falling.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub position: Vec2,
    /// Pixels per second
    pub velocity: Vec2,
    pub size: Vec2,
    pub on_ground: bool,
}

impl Player {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size,
            on_ground: false,
        }
    }

    /// Current bounding box
    pub fn rect(&self) -> Rect {
        Rect::from_position(self.position, self.size)
    }

    /// Bounding box if the body were at `(x, y)`
    pub fn rect_at(&self, x: f32, y: f32) -> Rect {
        Rect::new(x, y, self.size.x, self.size.y)
    }
}
