//! Game clock with fixed-timestep accumulator

/// Longest frame the accumulator will absorb, in seconds
const MAX_FRAME_TIME: f64 = 0.25;

/// Turns frame durations into a whole number of fixed simulation ticks.
///
/// Physics always advances by `fixed_timestep`, regardless of how long a
/// frame actually took, so the simulation is reproducible for a given input
/// sequence.
pub struct GameClock {
    /// Fixed timestep interval (default: 1/60 second)
    pub fixed_timestep: f64,
    accumulator: f64,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            fixed_timestep: 1.0 / 60.0,
            accumulator: 0.0,
        }
    }
}

impl GameClock {
    /// Create a new game clock with default 60Hz fixed timestep
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a game clock ticking `hz` times per second
    pub fn with_tick_rate(hz: u32) -> Self {
        Self {
            fixed_timestep: 1.0 / hz.max(1) as f64,
            ..Self::default()
        }
    }

    /// Feed a frame of `elapsed` seconds into the accumulator
    pub fn advance(&mut self, elapsed: f64) {
        // Clamp to avoid a spiral of death after a stall
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_TIME);
    }

    /// Returns true if there's enough accumulated time for a fixed update step
    pub fn should_fixed_update(&self) -> bool {
        self.accumulator >= self.fixed_timestep
    }

    /// Consume one fixed timestep from the accumulator
    pub fn consume_fixed_step(&mut self) {
        self.accumulator -= self.fixed_timestep;
    }

    /// The timestep as `f32`, as handed to physics
    pub fn step_seconds(&self) -> f32 {
        self.fixed_timestep as f32
    }
}
