//! Events emitted by the simulation

use blockyard_world::BlockKind;

/// Something observable that happened during a tick
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    BlockPlaced { x: i32, y: i32, kind: BlockKind },
    BlockRemoved { x: i32, y: i32, kind: BlockKind },
    HotbarSelected { index: usize, kind: BlockKind },
    GridToggled(bool),
    WorldSaved { location: String },
    SaveFailed { reason: String },
    WorldLoaded { location: String },
    LoadFailed { reason: String },
    /// The player came to rest on a block this tick
    Landed { y: f32 },
    /// The player's jump was stopped by a block overhead
    HitCeiling { y: f32 },
    QuitRequested,
}
