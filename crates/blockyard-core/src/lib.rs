//! Blockyard Core - Foundational types for the Blockyard sandbox
//!
//! This crate provides the types that all other Blockyard crates depend on:
//! - `Vec2`, `Rect` - Pixel-space math for bodies and tiles
//! - `Color` - Display colours for blocks
//! - Error types and Result alias

mod error;
mod types;

pub use error::{BlockyardError, Result};
pub use types::{Color, Rect, Vec2};
