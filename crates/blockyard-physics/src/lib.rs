//! Blockyard Physics - Player movement against the tile grid
//!
//! - `Player` - the box-shaped body and its velocity
//! - `collision` - which solid tiles a box overlaps, and which one to snap to
//! - `step_player` - one fixed step of walk, gravity, jump and collision
//!
//! All speeds are in pixels per second and all accelerations in pixels per
//! second squared. Callers pass the fixed timestep, so identical input
//! sequences always produce identical trajectories.

pub mod body;
pub mod character;
pub mod collision;

pub use body::Player;
pub use character::{step_player, MoveIntent, StepOutcome};

use serde::{Deserialize, Serialize};

/// Movement tuning. The defaults reproduce the classic 60 Hz feel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration (px/s²)
    pub gravity: f32,
    /// Vertical velocity set by a jump; negative is up (px/s)
    pub jump_velocity: f32,
    /// Horizontal speed while a direction is held (px/s)
    pub walk_speed: f32,
    /// Highest the body may go above the top of the arena (px)
    pub min_y: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 1800.0,
            jump_velocity: -600.0,
            walk_speed: 180.0,
            min_y: -1000.0,
        }
    }
}

/// The pixel space a body moves in
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arena {
    /// Edge length of one grid cell in pixels
    pub tile_size: f32,
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(tile_size: f32, width: f32, height: f32) -> Self {
        Self {
            tile_size,
            width,
            height,
        }
    }
}
