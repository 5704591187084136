//! Platformer character step with axis-separated tile collision

use crate::body::Player;
use crate::collision::{ceiling_tile, collides, landing_tile};
use crate::{Arena, PhysicsConfig};
use blockyard_world::Grid;

/// What the player wants to do this tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl MoveIntent {
    /// -1, 0 or 1. Right wins when both directions are held.
    pub fn direction(&self) -> f32 {
        if self.right {
            1.0
        } else if self.left {
            -1.0
        } else {
            0.0
        }
    }
}

/// Contacts that happened during a single step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Jump impulse applied
    pub jumped: bool,
    /// Horizontal move cancelled by a wall
    pub blocked: bool,
    /// Touched down after being airborne
    pub landed: bool,
    pub hit_ceiling: bool,
}

/// Advance `player` by one fixed step of `dt` seconds.
///
/// Horizontal motion is tried first and either taken whole or cancelled.
/// Vertical motion is then taken and, on contact, snapped flush to the tile
/// that was hit. Finally the body is clamped into the arena.
pub fn step_player(
    player: &mut Player,
    intent: MoveIntent,
    grid: &Grid,
    arena: &Arena,
    config: &PhysicsConfig,
    dt: f32,
) -> StepOutcome {
    let mut outcome = StepOutcome::default();
    let was_on_ground = player.on_ground;

    player.velocity.x = intent.direction() * config.walk_speed;
    player.velocity.y += config.gravity * dt;

    if intent.jump && player.on_ground {
        player.velocity.y = config.jump_velocity;
        player.on_ground = false;
        outcome.jumped = true;
    }

    // Horizontal pass
    let next_x = player.position.x + player.velocity.x * dt;
    let probe = player.rect_at(next_x, player.position.y);
    if collides(grid, &probe, arena.tile_size) {
        player.velocity.x = 0.0;
        outcome.blocked = true;
    } else {
        player.position.x = next_x;
    }

    // Vertical pass
    let next_y = player.position.y + player.velocity.y * dt;
    let probe = player.rect_at(player.position.x, next_y);
    if player.velocity.y > 0.0 {
        if let Some(tile) = landing_tile(grid, &probe, arena.tile_size) {
            player.position.y = tile.top() - player.size.y;
            player.velocity.y = 0.0;
            player.on_ground = true;
            outcome.landed = !was_on_ground;
        } else {
            player.position.y = next_y;
            player.on_ground = false;
        }
    } else if player.velocity.y < 0.0 {
        if let Some(tile) = ceiling_tile(grid, &probe, arena.tile_size) {
            player.position.y = tile.bottom();
            player.velocity.y = 0.0;
            outcome.hit_ceiling = true;
        } else {
            player.position.y = next_y;
            player.on_ground = false;
        }
    } else if !collides(grid, &probe, arena.tile_size) {
        player.position.y = next_y;
        player.on_ground = false;
    }

    player.position.x = clamp(player.position.x, 0.0, arena.width - player.size.x);
    player.position.y = clamp(player.position.y, config.min_y, arena.height - player.size.y);

    if outcome.landed {
        log::trace!("landed at y={:.2}", player.position.y);
    }
    outcome
}

/// Like `f32::clamp`, but resolves to `lo` instead of panicking when the
/// arena is smaller than the body.
fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
    lo.max(hi.min(value))
}
