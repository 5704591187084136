//! Blockyard Sandbox - The playable session
//!
//! Ties the grid, the player body and the input layer together:
//! - `Hotbar` - cyclic block selection
//! - `interaction` - pointer-to-cell mapping and place/remove rules
//! - `commands` - input resolved into ordered commands and movement intent
//! - `Sandbox` - session state and the fixed tick
//! - `FrameSnapshot` - what a renderer gets to see
//! - `SandboxConfig` - TOML configuration

pub mod commands;
pub mod config;
pub mod hotbar;
pub mod interaction;
mod sandbox;
mod snapshot;

pub use commands::Command;
pub use config::{PlayerConfig, SandboxConfig, ScreenConfig};
pub use hotbar::Hotbar;
pub use sandbox::{spawn_player, Sandbox};
pub use snapshot::{FrameSnapshot, TileView};
