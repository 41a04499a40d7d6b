//! Lanes and the per-lane enemy lifecycle
//!
//! Each of the four screen quadrants holds at most one enemy. Torch lanes
//! (top) and runner lanes (bottom) share the same stage counter idea but
//! differ in how far an enemy travels and when it can be struck.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Last stage a torch reaches before it lands and burns the building
pub const TORCH_MAX_STAGE: u8 = 5;
/// Last stage a runner reaches before it climbs in
pub const RUNNER_MAX_STAGE: u8 = 6;
/// Marker stage for a runner knocked off the wall
pub const RUNNER_FALLING_STAGE: u8 = 7;
/// Stages at which a torch can be struck
pub const TORCH_HIT_STAGES: RangeInclusive<u8> = 5..=5;
/// Stages at which a runner can be struck
pub const RUNNER_HIT_STAGES: RangeInclusive<u8> = 5..=6;

/// Enemy kind. Fixed per lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Torch,
    Runner,
}

impl EnemyKind {
    pub fn max_stage(self) -> u8 {
        match self {
            EnemyKind::Torch => TORCH_MAX_STAGE,
            EnemyKind::Runner => RUNNER_MAX_STAGE,
        }
    }

    pub fn hit_stages(self) -> RangeInclusive<u8> {
        match self {
            EnemyKind::Torch => TORCH_HIT_STAGES,
            EnemyKind::Runner => RUNNER_HIT_STAGES,
        }
    }

    /// The kind that moves on the following beat
    pub fn other(self) -> Self {
        match self {
            EnemyKind::Torch => EnemyKind::Runner,
            EnemyKind::Runner => EnemyKind::Torch,
        }
    }

    /// The two lanes holding this kind, in scan order
    pub fn lanes(self) -> [LaneId; 2] {
        match self {
            EnemyKind::Torch => [LaneId::TL, LaneId::TR],
            EnemyKind::Runner => [LaneId::BL, LaneId::BR],
        }
    }
}

/// One of the four attack positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaneId {
    TL,
    TR,
    BL,
    BR,
}

/// Canonical lane order (storage index, beat order, Mode A rotation)
pub const LANE_ORDER: [LaneId; 4] = [LaneId::TL, LaneId::TR, LaneId::BL, LaneId::BR];

impl LaneId {
    pub fn index(self) -> usize {
        match self {
            LaneId::TL => 0,
            LaneId::TR => 1,
            LaneId::BL => 2,
            LaneId::BR => 3,
        }
    }

    pub fn kind(self) -> EnemyKind {
        match self {
            LaneId::TL | LaneId::TR => EnemyKind::Torch,
            LaneId::BL | LaneId::BR => EnemyKind::Runner,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LaneId::TL => "TL",
            LaneId::TR => "TR",
            LaneId::BL => "BL",
            LaneId::BR => "BR",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "TL" => Some(LaneId::TL),
            "TR" => Some(LaneId::TR),
            "BL" => Some(LaneId::BL),
            "BR" => Some(LaneId::BR),
            _ => None,
        }
    }
}

/// Result of moving a lane forward one beat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Nothing to move (empty or falling)
    Idle,
    /// Enemy moved to the given stage
    Moved(u8),
    /// Enemy ran past its last stage; lane already cleared
    Overflowed,
}

/// A lane and the enemy (if any) travelling through it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lane {
    Torch {
        stage: u8,
    },
    Runner {
        stage: u8,
        /// Knocked off and playing the fall animation
        falling: bool,
        /// Ticks spent falling
        fall_timer: u32,
    },
}

impl Lane {
    pub fn empty(kind: EnemyKind) -> Self {
        match kind {
            EnemyKind::Torch => Lane::Torch { stage: 0 },
            EnemyKind::Runner => Lane::Runner {
                stage: 0,
                falling: false,
                fall_timer: 0,
            },
        }
    }

    pub fn kind(&self) -> EnemyKind {
        match self {
            Lane::Torch { .. } => EnemyKind::Torch,
            Lane::Runner { .. } => EnemyKind::Runner,
        }
    }

    pub fn stage(&self) -> u8 {
        match *self {
            Lane::Torch { stage } | Lane::Runner { stage, .. } => stage,
        }
    }

    pub fn is_falling(&self) -> bool {
        matches!(self, Lane::Runner { falling: true, .. })
    }

    /// Holds an enemy (climbing, burning or falling)
    pub fn is_occupied(&self) -> bool {
        self.stage() > 0
    }

    /// Empty and not mid-fall
    pub fn can_spawn(&self) -> bool {
        self.stage() == 0 && !self.is_falling()
    }

    pub fn is_hittable(&self) -> bool {
        !self.is_falling() && self.kind().hit_stages().contains(&self.stage())
    }

    /// Place a fresh enemy at stage 1
    pub fn spawn(&mut self) {
        debug_assert!(self.can_spawn(), "spawn into occupied lane {self:?}");
        match self {
            Lane::Torch { stage } | Lane::Runner { stage, .. } => *stage = 1,
        }
    }

    /// Move the enemy one stage along
    pub fn advance(&mut self) -> Advance {
        let max = self.kind().max_stage();
        let stage = match self {
            Lane::Runner { falling: true, .. } => return Advance::Idle,
            Lane::Torch { stage } | Lane::Runner { stage, .. } => stage,
        };
        if *stage == 0 {
            return Advance::Idle;
        }
        *stage += 1;
        if *stage > max {
            self.reset();
            Advance::Overflowed
        } else {
            Advance::Moved(*stage)
        }
    }

    /// Strike the lane. Torches vanish, runners start falling.
    /// Returns false (and leaves the lane untouched) outside the hit window.
    pub fn hit(&mut self) -> bool {
        if !self.is_hittable() {
            return false;
        }
        match self {
            Lane::Torch { stage } => *stage = 0,
            Lane::Runner {
                stage,
                falling,
                fall_timer,
            } => {
                *stage = RUNNER_FALLING_STAGE;
                *falling = true;
                *fall_timer = 0;
            }
        }
        true
    }

    /// Advance the fall animation; returns true when it finishes and the
    /// lane frees up
    pub fn tick_fall(&mut self, fall_duration: u32) -> bool {
        if let Lane::Runner {
            falling: true,
            fall_timer,
            ..
        } = self
        {
            *fall_timer += 1;
            if *fall_timer > fall_duration {
                self.reset();
                return true;
            }
        }
        false
    }

    pub fn reset(&mut self) {
        *self = Lane::empty(self.kind());
    }
}

/// Fresh lanes in `LANE_ORDER`
pub fn empty_lanes() -> [Lane; 4] {
    LANE_ORDER.map(|id| Lane::empty(id.kind()))
}
