//! Discrete events emitted by the simulation
//!
//! Presentation and audio drain these after each update instead of being
//! called from inside the simulation.

use serde::{Deserialize, Serialize};

use super::lane::{EnemyKind, LaneId};
use super::state::Scene;

/// What a bonus threshold crossing paid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusReward {
    /// One miss forgiven
    MissCleared,
    /// Chance Time started
    ChanceTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    EnemySpawned { lane: LaneId, kind: EnemyKind },
    StageAdvanced {
        lane: LaneId,
        kind: EnemyKind,
        stage: u8,
    },
    Hit {
        lane: LaneId,
        kind: EnemyKind,
        points: u32,
    },
    Miss {
        lane: LaneId,
        kind: EnemyKind,
        misses: u32,
    },
    FallCompleted { lane: LaneId },
    /// Mode A dark lane moved; `cleared` if an enemy was removed with it
    LaneDisabled { lane: LaneId, cleared: bool },
    BonusAwarded {
        threshold: u32,
        reward: BonusReward,
    },
    ChanceTimeStarted { ticks: u32 },
    ChanceTimeEnded,
    GameOver { score: u32 },
    SceneChanged { scene: Scene },
}
