//! Blockyard World - The tile grid and everything that creates or stores it
//!
//! - `BlockKind` - closed set of block materials with display attributes
//! - `Grid` - fixed-size 2D block storage with bounds-safe access
//! - `terrain` - deterministic layered terrain generation
//! - `persist` - JSON save format and the `WorldStore` trait

pub mod block;
pub mod grid;
pub mod persist;
pub mod terrain;

pub use block::BlockKind;
pub use grid::{cell_count, Grid, MAX_CELLS};
pub use persist::{load_world, save_world, JsonFileStore, SavedWorld, WorldStore, DEFAULT_SAVE_FILE};
pub use terrain::TerrainConfig;
