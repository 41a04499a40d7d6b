//! Global beat clock
//!
//! Frames accumulate until the current beat length is reached. Each beat
//! moves only one kind of enemy, alternating runner and torch beats, so the
//! two kinds never step at the same time.

use serde::{Deserialize, Serialize};

use super::events::GameEvent;
use super::lane::{Advance, EnemyKind, Lane, LaneId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeatClock {
    /// Frames since the last beat
    pub tick_counter: u32,
    /// Kind that moves on the next beat
    pub beat_type: EnemyKind,
}

impl Default for BeatClock {
    fn default() -> Self {
        Self {
            tick_counter: 0,
            beat_type: EnemyKind::Runner,
        }
    }
}

impl BeatClock {
    /// Count one frame. Returns the kind that moves if a beat fired.
    pub fn tick(&mut self, frames_per_beat: u32) -> Option<EnemyKind> {
        self.tick_counter += 1;
        if self.tick_counter < frames_per_beat {
            return None;
        }
        self.tick_counter = 0;
        let kind = self.beat_type;
        self.beat_type = kind.other();
        Some(kind)
    }
}

/// Step every occupied lane of `kind` by one stage.
///
/// Lanes that run past their last stage are already cleared when returned;
/// the caller turns them into misses.
pub fn advance_lanes(
    lanes: &mut [Lane; 4],
    kind: EnemyKind,
    events: &mut Vec<GameEvent>,
) -> Vec<LaneId> {
    let mut overflowed = Vec::with_capacity(2);
    for lane_id in kind.lanes() {
        match lanes[lane_id.index()].advance() {
            Advance::Idle => {}
            Advance::Moved(stage) => events.push(GameEvent::StageAdvanced {
                lane: lane_id,
                kind,
                stage,
            }),
            Advance::Overflowed => overflowed.push(lane_id),
        }
    }
    overflowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::lane::empty_lanes;

    #[test]
    fn test_beat_waits_for_threshold() {
        let mut clock = BeatClock::default();
        for _ in 0..47 {
            assert_eq!(clock.tick(48), None);
        }
        assert_eq!(clock.tick(48), Some(EnemyKind::Runner));
        assert_eq!(clock.tick_counter, 0);
    }

    #[test]
    fn test_beats_alternate_kind() {
        let mut clock = BeatClock::default();
        let kinds: Vec<_> = (0..6).filter_map(|_| clock.tick(1)).collect();
        assert_eq!(
            kinds,
            vec![
                EnemyKind::Runner,
                EnemyKind::Torch,
                EnemyKind::Runner,
                EnemyKind::Torch,
                EnemyKind::Runner,
                EnemyKind::Torch,
            ]
        );
    }

    #[test]
    fn test_advance_only_moves_matching_kind() {
        let mut lanes = empty_lanes();
        for lane in lanes.iter_mut() {
            lane.spawn();
        }
        let mut events = Vec::new();
        let overflowed = advance_lanes(&mut lanes, EnemyKind::Torch, &mut events);

        assert!(overflowed.is_empty());
        assert_eq!(lanes[LaneId::TL.index()].stage(), 2);
        assert_eq!(lanes[LaneId::TR.index()].stage(), 2);
        assert_eq!(lanes[LaneId::BL.index()].stage(), 1);
        assert_eq!(lanes[LaneId::BR.index()].stage(), 1);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_advance_reports_overflow() {
        let mut lanes = empty_lanes();
        lanes[LaneId::BR.index()] = Lane::Runner {
            stage: 6,
            falling: false,
            fall_timer: 0,
        };
        let mut events = Vec::new();
        let overflowed = advance_lanes(&mut lanes, EnemyKind::Runner, &mut events);
        assert_eq!(overflowed, vec![LaneId::BR]);
        assert_eq!(lanes[LaneId::BR.index()].stage(), 0);
        assert!(events.is_empty());
    }
}
