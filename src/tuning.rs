//! Data-driven game balance
//!
//! Every number that shapes pacing lives here. Hosts can override any subset
//! from JSON; missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::GameMode;
use crate::sim::difficulty::{
    self, MODE_B_TIER_OFFSET, POINTS_PER_COOLDOWN_STEP, POINTS_PER_TIER, SPAWN_COOLDOWN_BASE,
    SPEED_TABLE,
};
use crate::sim::spawn::INITIAL_SPAWN_COOLDOWN;

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("speed table is empty")]
    EmptySpeedTable,
    #[error("speed table entry {index} is zero")]
    ZeroFramesPerBeat { index: usize },
    #[error("points per tier and per cooldown step must be non-zero")]
    ZeroTierPoints,
    #[error("chance time range {min}..={max} is empty")]
    InvalidChanceRange { min: u32, max: u32 },
    #[error("bonus thresholds must increase (first {first}, second {second}, step {step})")]
    InvalidBonusProgression { first: u32, second: u32, step: u32 },
}

/// Balance table for one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Frames between beats per speed tier, slowest first
    pub speed_table: Vec<u32>,
    /// Tiers Mode B starts ahead
    pub mode_b_tier_offset: u32,
    /// Score needed per speed tier
    pub points_per_tier: u32,
    /// Beats between spawns at zero score
    pub spawn_cooldown_base: u32,
    /// Score needed to shave a beat off the spawn cooldown
    pub points_per_cooldown_step: u32,
    /// Cooldown when a game starts
    pub initial_spawn_cooldown: i32,
    pub hit_points: u32,
    /// Hit value during Chance Time
    pub chance_hit_points: u32,
    pub first_bonus_threshold: u32,
    pub second_bonus_threshold: u32,
    /// Gap between thresholds after the second
    pub bonus_threshold_step: u32,
    pub chance_time_min_ticks: u32,
    pub chance_time_max_ticks: u32,
    /// Ticks a struck runner spends falling
    pub fall_duration_ticks: u32,
    /// Ticks between the final miss and the game over screen
    pub game_over_delay_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            speed_table: SPEED_TABLE.to_vec(),
            mode_b_tier_offset: MODE_B_TIER_OFFSET,
            points_per_tier: POINTS_PER_TIER,
            spawn_cooldown_base: SPAWN_COOLDOWN_BASE,
            points_per_cooldown_step: POINTS_PER_COOLDOWN_STEP,
            initial_spawn_cooldown: INITIAL_SPAWN_COOLDOWN,
            hit_points: 2,
            chance_hit_points: 5,
            first_bonus_threshold: 200,
            second_bonus_threshold: 500,
            bonus_threshold_step: 1000,
            // 30-50 s at 60 Hz
            chance_time_min_ticks: 1800,
            chance_time_max_ticks: 3000,
            fall_duration_ticks: 30,
            // 5 s at 60 Hz
            game_over_delay_ticks: 300,
        }
    }
}

impl Tuning {
    /// Parse and validate a (possibly partial) JSON override
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        if self.speed_table.is_empty() {
            return Err(TuningError::EmptySpeedTable);
        }
        if let Some(index) = self.speed_table.iter().position(|&f| f == 0) {
            return Err(TuningError::ZeroFramesPerBeat { index });
        }
        if self.points_per_tier == 0 || self.points_per_cooldown_step == 0 {
            return Err(TuningError::ZeroTierPoints);
        }
        if self.chance_time_min_ticks == 0
            || self.chance_time_min_ticks > self.chance_time_max_ticks
        {
            return Err(TuningError::InvalidChanceRange {
                min: self.chance_time_min_ticks,
                max: self.chance_time_max_ticks,
            });
        }
        if self.first_bonus_threshold == 0
            || self.second_bonus_threshold <= self.first_bonus_threshold
            || self.bonus_threshold_step == 0
        {
            return Err(TuningError::InvalidBonusProgression {
                first: self.first_bonus_threshold,
                second: self.second_bonus_threshold,
                step: self.bonus_threshold_step,
            });
        }
        Ok(())
    }

    pub fn frames_per_beat(&self, score: u32, mode: GameMode) -> u32 {
        difficulty::frames_per_beat_in(
            &self.speed_table,
            self.mode_b_tier_offset,
            self.points_per_tier,
            score,
            mode,
        )
    }

    pub fn spawn_cooldown(&self, score: u32) -> i32 {
        difficulty::spawn_cooldown_in(
            self.spawn_cooldown_base,
            self.points_per_cooldown_step,
            score,
        )
    }

    /// Threshold following `current` (first -> second -> +step)
    pub fn bonus_threshold_after(&self, current: u32) -> u32 {
        if current < self.second_bonus_threshold {
            self.second_bonus_threshold
        } else {
            current.saturating_add(self.bonus_threshold_step)
        }
    }
}
