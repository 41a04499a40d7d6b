//! Score-driven difficulty
//!
//! Beat length shrinks every 100 points; Mode B starts two tiers in.

use super::state::GameMode;

/// Frames between beats at 60 Hz, slowest first
pub const SPEED_TABLE: [u32; 10] = [
    48, // 0-99 pts
    43, // 100-199
    38, // 200-299
    34, // 300-399
    29, // 400-499
    24, // 500-599
    22, // 600-699
    19, // 700-799
    17, // 800-899
    14, // 900+
];

/// Points per speed tier
pub const POINTS_PER_TIER: u32 = 100;
/// Extra tiers applied in Mode B
pub const MODE_B_TIER_OFFSET: u32 = 2;
/// Beats between spawns at 0 points
pub const SPAWN_COOLDOWN_BASE: u32 = 2;
/// Points needed to knock one beat off the spawn cooldown
pub const POINTS_PER_COOLDOWN_STEP: u32 = 200;

/// Frames per beat with the stock speed table
pub fn frames_per_beat(score: u32, mode: GameMode) -> u32 {
    frames_per_beat_in(
        &SPEED_TABLE,
        MODE_B_TIER_OFFSET,
        POINTS_PER_TIER,
        score,
        mode,
    )
}

/// Frames per beat for an arbitrary table (used by custom tuning)
pub fn frames_per_beat_in(
    table: &[u32],
    mode_b_offset: u32,
    points_per_tier: u32,
    score: u32,
    mode: GameMode,
) -> u32 {
    let base = match mode {
        GameMode::A => 0,
        GameMode::B => mode_b_offset,
    };
    let tier = (score / points_per_tier.max(1)).saturating_add(base) as usize;
    let last = table.len().saturating_sub(1);
    table.get(tier.min(last)).copied().unwrap_or(SPEED_TABLE[0])
}

/// Beats until the next spawn attempt after a successful spawn
pub fn spawn_cooldown(score: u32) -> i32 {
    spawn_cooldown_in(SPAWN_COOLDOWN_BASE, POINTS_PER_COOLDOWN_STEP, score)
}

pub fn spawn_cooldown_in(base: u32, points_per_step: u32, score: u32) -> i32 {
    let beats = base.saturating_sub(score / points_per_step.max(1)).max(1);
    i32::try_from(beats).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_a_tiers() {
        assert_eq!(frames_per_beat(0, GameMode::A), 48);
        assert_eq!(frames_per_beat(99, GameMode::A), 48);
        assert_eq!(frames_per_beat(100, GameMode::A), 43);
        assert_eq!(frames_per_beat(550, GameMode::A), 24);
        assert_eq!(frames_per_beat(900, GameMode::A), 14);
    }

    #[test]
    fn test_mode_b_starts_two_tiers_harder() {
        assert_eq!(frames_per_beat(0, GameMode::B), 38);
        assert_eq!(frames_per_beat(100, GameMode::B), 34);
        assert_eq!(frames_per_beat(700, GameMode::B), 14);
    }

    #[test]
    fn test_tier_clamps_to_fastest() {
        assert_eq!(frames_per_beat(50_000, GameMode::A), 14);
        assert_eq!(frames_per_beat(u32::MAX, GameMode::B), 14);
    }

    #[test]
    fn test_table_is_descending() {
        assert!(SPEED_TABLE.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_spawn_cooldown_tightens_with_score() {
        assert_eq!(spawn_cooldown(0), 2);
        assert_eq!(spawn_cooldown(199), 2);
        assert_eq!(spawn_cooldown(200), 1);
        assert_eq!(spawn_cooldown(10_000), 1);
    }

    #[test]
    fn test_empty_table_falls_back() {
        assert_eq!(frames_per_beat_in(&[], 2, 100, 0, GameMode::A), 48);
    }
}
