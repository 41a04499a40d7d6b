//! Spawn arbitration
//!
//! When the cooldown runs out, one enemy enters. Kinds alternate torch,
//! runner, torch... and each kind keeps its own round-robin cursor over its
//! two lanes. A kind with no free lane is retried on the next beat without
//! handing the turn to the other kind.

use serde::{Deserialize, Serialize};

use super::availability::LaneAvailability;
use super::lane::{EnemyKind, Lane, LaneId};

/// Cooldown at the start of a game (first beat spawns)
pub const INITIAL_SPAWN_COOLDOWN: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnArbiter {
    /// Beats until the next spawn attempt
    pub cooldown: i32,
    /// Kind tried on the next attempt
    pub next_is_runner: bool,
    torch_cursor: usize,
    runner_cursor: usize,
}

impl Default for SpawnArbiter {
    fn default() -> Self {
        Self::new(INITIAL_SPAWN_COOLDOWN)
    }
}

impl SpawnArbiter {
    pub fn new(initial_cooldown: i32) -> Self {
        Self {
            cooldown: initial_cooldown,
            next_is_runner: false,
            torch_cursor: 0,
            runner_cursor: 0,
        }
    }

    pub fn next_kind(&self) -> EnemyKind {
        if self.next_is_runner {
            EnemyKind::Runner
        } else {
            EnemyKind::Torch
        }
    }

    /// Count down one beat and spawn if due.
    ///
    /// `cooldown_after` is the cooldown to restart with on success.
    pub fn on_beat(
        &mut self,
        lanes: &mut [Lane; 4],
        availability: &LaneAvailability,
        cooldown_after: i32,
    ) -> Option<LaneId> {
        // Stays pinned at zero while a kind waits for a free lane
        self.cooldown = (self.cooldown - 1).max(0);
        if self.cooldown > 0 {
            return None;
        }

        let kind = self.next_kind();
        let pair = kind.lanes();
        let start = match kind {
            EnemyKind::Torch => self.torch_cursor,
            EnemyKind::Runner => self.runner_cursor,
        };

        for probe in 0..pair.len() {
            let slot = (start + probe) % pair.len();
            let lane_id = pair[slot];
            let lane = &mut lanes[lane_id.index()];
            if !availability.is_active(lane_id) || !lane.can_spawn() {
                continue;
            }

            lane.spawn();
            let next = (slot + 1) % pair.len();
            match kind {
                EnemyKind::Torch => self.torch_cursor = next,
                EnemyKind::Runner => self.runner_cursor = next,
            }
            self.next_is_runner = !self.next_is_runner;
            self.cooldown = cooldown_after;
            return Some(lane_id);
        }

        None
    }
}
