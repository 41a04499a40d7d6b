//! Mode A lane availability
//!
//! Three of the four lanes are live at any time. The dark lane walks through
//! `LANE_ORDER` one step per miss, starting from a seeded position.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::lane::{LANE_ORDER, Lane, LaneId};
use super::state::GameMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneAvailability {
    disabled: Option<LaneId>,
    pattern_index: usize,
}

impl LaneAvailability {
    /// Every lane live (Mode B)
    pub fn all_active() -> Self {
        Self {
            disabled: None,
            pattern_index: 0,
        }
    }

    /// One lane dark, starting at `pattern_index` in `LANE_ORDER`
    pub fn rotating(pattern_index: usize) -> Self {
        let pattern_index = pattern_index % LANE_ORDER.len();
        Self {
            disabled: Some(LANE_ORDER[pattern_index]),
            pattern_index,
        }
    }

    pub fn for_mode<R: Rng>(mode: GameMode, rng: &mut R) -> Self {
        match mode {
            GameMode::A => Self::rotating(rng.random_range(0..LANE_ORDER.len())),
            GameMode::B => Self::all_active(),
        }
    }

    pub fn disabled(&self) -> Option<LaneId> {
        self.disabled
    }

    pub fn is_active(&self, lane: LaneId) -> bool {
        self.disabled != Some(lane)
    }

    pub fn active_lanes(&self) -> Vec<LaneId> {
        LANE_ORDER
            .into_iter()
            .filter(|&id| self.is_active(id))
            .collect()
    }

    /// Shift the dark lane after a miss. Any enemy in the newly dark lane is
    /// removed. Returns the new dark lane and whether it was cleared, or
    /// `None` when every lane is live.
    pub fn rotate(&mut self, lanes: &mut [Lane; 4]) -> Option<(LaneId, bool)> {
        self.disabled?;
        self.pattern_index = (self.pattern_index + 1) % LANE_ORDER.len();
        let lane_id = LANE_ORDER[self.pattern_index];
        self.disabled = Some(lane_id);

        let lane = &mut lanes[lane_id.index()];
        let cleared = lane.is_occupied() || lane.is_falling();
        if cleared {
            lane.reset();
        }
        Some((lane_id, cleared))
    }
}
