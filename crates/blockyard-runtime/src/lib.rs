//! Blockyard Runtime - Game loop infrastructure
//!
//! Provides the building blocks the simulation loop is assembled from:
//! - `GameClock` - fixed-timestep accumulator for deterministic physics
//! - `InputState` - keyboard, pointer and scroll tracking with action bindings
//! - `GameEvent` / `EventBus` - typed record of what happened during a tick

mod clock;
mod event;
mod event_bus;
pub mod input;

pub use clock::GameClock;
pub use event::GameEvent;
pub use event_bus::EventBus;
pub use input::{actions, Binding, InputConfig, InputState, Key, PointerButton};
