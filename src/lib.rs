//! Fire Attack - a four-lane LCD-style reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (beat clock, lanes, spawning, scoring)
//! - `tuning`: Data-driven game balance
//! - `platform`: Logging backends and the browser bridge

pub mod platform;
pub mod sim;
pub mod tuning;

pub use sim::{GameEvent, GameMode, GameState, LaneId, Scene, Snapshot};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (one beat-clock frame per tick)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}
