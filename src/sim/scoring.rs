//! Score, misses, bonus thresholds and Chance Time

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::events::{BonusReward, GameEvent};
use crate::tuning::Tuning;

/// Misses that end the game
pub const MAX_MISSES: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub score: u32,
    pub misses: u32,
    pub total_hits: u32,
    pub next_bonus_threshold: u32,
    /// Ticks of Chance Time left (0 = inactive)
    pub chance_time_remaining: u32,
}

impl ScoreBoard {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            score: 0,
            misses: 0,
            total_hits: 0,
            next_bonus_threshold: tuning.first_bonus_threshold,
            chance_time_remaining: 0,
        }
    }

    pub fn chance_time(&self) -> bool {
        self.chance_time_remaining > 0
    }

    /// Points a hit is worth right now
    pub fn hit_value(&self, tuning: &Tuning) -> u32 {
        if self.chance_time() {
            tuning.chance_hit_points
        } else {
            tuning.hit_points
        }
    }

    /// Credit a hit and return the points awarded. Bonus handling is
    /// separate so the caller can order events.
    pub fn record_hit(&mut self, tuning: &Tuning) -> u32 {
        let points = self.hit_value(tuning);
        self.score = self.score.saturating_add(points);
        self.total_hits += 1;
        points
    }

    /// Pay out every threshold the score has reached
    pub fn check_bonus<R: Rng>(
        &mut self,
        tuning: &Tuning,
        rng: &mut R,
        events: &mut Vec<GameEvent>,
    ) {
        while self.score >= self.next_bonus_threshold {
            let threshold = self.next_bonus_threshold;
            self.next_bonus_threshold = tuning.bonus_threshold_after(threshold);

            if self.misses > 0 {
                self.misses -= 1;
                log::info!(
                    "Bonus at {}: miss cleared ({} left)",
                    threshold,
                    self.misses
                );
                events.push(GameEvent::BonusAwarded {
                    threshold,
                    reward: BonusReward::MissCleared,
                });
            } else {
                let ticks = rng.random_range(
                    tuning.chance_time_min_ticks..=tuning.chance_time_max_ticks,
                );
                self.chance_time_remaining = ticks;
                log::info!(
                    "Bonus at {}: Chance Time for {} ticks",
                    threshold,
                    ticks
                );
                events.push(GameEvent::BonusAwarded {
                    threshold,
                    reward: BonusReward::ChanceTime,
                });
                events.push(GameEvent::ChanceTimeStarted { ticks });
            }

            // Saturated progression
            if self.next_bonus_threshold <= threshold {
                break;
            }
        }
    }

    /// Returns the new miss count
    pub fn record_miss(&mut self) -> u32 {
        self.misses = (self.misses + 1).min(MAX_MISSES);
        self.misses
    }

    /// One frame of Chance Time
    pub fn tick_chance_time(&mut self, events: &mut Vec<GameEvent>) {
        if self.chance_time_remaining == 0 {
            return;
        }
        self.chance_time_remaining -= 1;
        if self.chance_time_remaining == 0 {
            log::debug!("Chance Time over");
            events.push(GameEvent::ChanceTimeEnded);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn board_at(score: u32) -> ScoreBoard {
        ScoreBoard {
            score,
            ..ScoreBoard::new(&Tuning::default())
        }
    }

    #[test]
    fn test_hit_values() {
        let tuning = Tuning::default();
        let mut board = board_at(0);
        assert_eq!(board.record_hit(&tuning), 2);
        board.chance_time_remaining = 10;
        assert_eq!(board.record_hit(&tuning), 5);
        assert_eq!(board.score, 7);
        assert_eq!(board.total_hits, 2);
    }

    #[test]
    fn test_threshold_progression() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut events = Vec::new();
        let mut board = board_at(0);

        let mut crossed = vec![];
        for score in (0..=2600).step_by(2) {
            board.score = score;
            let before = board.next_bonus_threshold;
            board.check_bonus(&tuning, &mut rng, &mut events);
            if board.next_bonus_threshold != before {
                crossed.push(before);
            }
        }
        assert_eq!(crossed, vec![200, 500, 1500, 2500]);
        assert_eq!(board.next_bonus_threshold, 3500);
    }

    #[test]
    fn test_clean_crossing_starts_chance_time() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let mut events = Vec::new();
        let mut board = board_at(200);

        board.check_bonus(&tuning, &mut rng, &mut events);
        assert!(board.chance_time());
        assert!((1800..=3000).contains(&board.chance_time_remaining));
        assert!(matches!(
            events.as_slice(),
            [
                GameEvent::BonusAwarded {
                    threshold: 200,
                    reward: BonusReward::ChanceTime
                },
                GameEvent::ChanceTimeStarted { .. }
            ]
        ));
    }

    #[test]
    fn test_crossing_with_misses_clears_one() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let mut events = Vec::new();
        let mut board = board_at(200);
        board.misses = 2;

        board.check_bonus(&tuning, &mut rng, &mut events);
        assert_eq!(board.misses, 1);
        assert!(!board.chance_time());
        assert_eq!(board.next_bonus_threshold, 500);
    }

    #[test]
    fn test_chance_time_counts_down_per_tick() {
        let mut events = Vec::new();
        let mut board = board_at(0);
        board.chance_time_remaining = 2;

        board.tick_chance_time(&mut events);
        assert!(board.chance_time());
        board.tick_chance_time(&mut events);
        assert!(!board.chance_time());
        assert_eq!(events, vec![GameEvent::ChanceTimeEnded]);

        board.tick_chance_time(&mut events);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_misses_cap_at_three() {
        let mut board = board_at(0);
        for _ in 0..5 {
            board.record_miss();
        }
        assert_eq!(board.misses, MAX_MISSES);
    }
}
