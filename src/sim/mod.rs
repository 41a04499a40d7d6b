//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (host calls `update` at 60 Hz)
//! - Seeded RNG only
//! - Stable lane order (`LANE_ORDER`)
//! - No rendering, audio or platform dependencies

pub mod autoplay;
pub mod availability;
pub mod beat;
pub mod difficulty;
pub mod events;
pub mod lane;
pub mod scoring;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autoplay::{Action, Autoplay, play_headless};
pub use availability::LaneAvailability;
pub use beat::BeatClock;
pub use difficulty::{frames_per_beat, spawn_cooldown};
pub use events::{BonusReward, GameEvent};
pub use lane::{
    EnemyKind, LANE_ORDER, Lane, LaneId, RUNNER_FALLING_STAGE, RUNNER_HIT_STAGES,
    RUNNER_MAX_STAGE, TORCH_HIT_STAGES, TORCH_MAX_STAGE,
};
pub use scoring::{MAX_MISSES, ScoreBoard};
pub use spawn::SpawnArbiter;
pub use state::{GameMode, GameState, LaneView, MissAnimation, PendingScene, Scene, Snapshot};
pub use tick::{attack, update};
