// Integration tests for the simulation invariants. They drive sessions the
// way a host would (update once per tick, random cursor moves and attacks)
// and check the rules hold after every step.

use fire_attack::sim::{
    Autoplay, BonusReward, EnemyKind, GameEvent, GameMode, GameState, LANE_ORDER, Lane, Scene,
    play_headless,
};
use proptest::prelude::*;

fn mode_strategy() -> impl Strategy<Value = GameMode> {
    prop_oneof![Just(GameMode::A), Just(GameMode::B)]
}

/// One host step: optional move, optional attack
fn step_strategy() -> impl Strategy<Value = (Option<usize>, bool)> {
    (proptest::option::of(0usize..4), any::<bool>())
}

fn lane_hittable(lane: &Lane) -> bool {
    match *lane {
        Lane::Torch { stage } => stage == 5,
        Lane::Runner { stage, falling, .. } => !falling && (stage == 5 || stage == 6),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn invariants_hold_under_random_input(
        seed in any::<u64>(),
        mode in mode_strategy(),
        steps in proptest::collection::vec(step_strategy(), 1..4000),
    ) {
        let mut state = GameState::new(seed);
        state.start_game(mode);
        let mut last_score = 0;

        for (mv, strike) in steps {
            if let Some(i) = mv {
                state.move_player(LANE_ORDER[i]);
            }

            if strike {
                let expect_hit = !state.game_over && lane_hittable(state.lane(state.cursor));
                let misses_before = state.misses();
                let before = state.snapshot();
                let hit = state.attack();
                prop_assert_eq!(hit, expect_hit);
                if !hit {
                    prop_assert_eq!(state.snapshot(), before);
                }
                prop_assert!(state.misses() <= misses_before);
            }

            state.update();

            let snap = state.snapshot();
            prop_assert!(snap.score >= last_score);
            last_score = snap.score;
            prop_assert!(snap.misses <= 3);
            prop_assert_eq!(snap.game_over, snap.misses == 3);

            match mode {
                GameMode::A => {
                    prop_assert_eq!(snap.active_lanes.len(), 3);
                    let dark = snap.disabled_lane.unwrap();
                    prop_assert_eq!(state.lane(dark).stage(), 0);
                }
                GameMode::B => prop_assert_eq!(snap.active_lanes.len(), 4),
            }

            for lane in &state.lanes {
                let limit = match lane.kind() {
                    EnemyKind::Torch => 5,
                    EnemyKind::Runner if lane.is_falling() => 7,
                    EnemyKind::Runner => 6,
                };
                prop_assert!(lane.stage() <= limit);
            }

            if state.scene != Scene::Playing {
                break;
            }
        }
    }

    #[test]
    fn misses_only_come_from_overflow(seed in any::<u64>(), mode in mode_strategy()) {
        let mut state = GameState::new(seed);
        state.start_game(mode);
        let mut bot = Autoplay::new(seed, 0.8, 3);

        let mut misses_seen = 0;
        let mut net_cleared = 0;
        for _ in 0..20_000 {
            bot.drive(&mut state);
            state.update();
            for event in state.drain_events() {
                match event {
                    GameEvent::Miss { misses, .. } => {
                        misses_seen += 1;
                        prop_assert!(misses >= 1);
                    }
                    GameEvent::BonusAwarded { reward: BonusReward::MissCleared, .. } => {
                        net_cleared += 1;
                    }
                    _ => {}
                }
            }
            if state.scene != Scene::Playing {
                break;
            }
        }
        prop_assert_eq!(state.misses(), misses_seen - net_cleared);
    }

    #[test]
    fn same_seed_same_game(seed in any::<u64>(), mode in mode_strategy()) {
        let run = |seed: u64| {
            let mut state = GameState::new(seed);
            state.start_game(mode);
            let mut bot = Autoplay::new(seed, 0.9, 5);
            play_headless(&mut state, &mut bot, 30_000);
            (state.snapshot(), state.drain_events())
        };
        prop_assert_eq!(run(seed), run(seed));
    }
}

#[test]
fn chance_time_only_on_clean_crossings() {
    let mut chance_starts = 0;
    let mut chance_hits = 0;

    for seed in [2024, 0, 1, 2, 3] {
        let mut state = GameState::new(seed);
        state.start_game(GameMode::A);
        let mut bot = Autoplay::new(seed, 1.0, 1);

        for _ in 0..60 * 60 * 10 {
            let misses_before = state.misses();
            let chance_before = state.chance_time();
            bot.drive(&mut state);
            for event in state.drain_events() {
                match event {
                    GameEvent::ChanceTimeStarted { ticks } => {
                        assert_eq!(misses_before, 0);
                        assert!((1800..=3000).contains(&ticks));
                        chance_starts += 1;
                    }
                    GameEvent::Hit { points, .. } if chance_before => {
                        assert_eq!(points, 5);
                        chance_hits += 1;
                    }
                    GameEvent::Hit { points, .. } => assert_eq!(points, 2),
                    _ => {}
                }
            }
            state.update();
            state.drain_events();
            if state.scene != Scene::Playing {
                break;
            }
        }
    }

    assert!(chance_starts > 0, "no game reached a bonus threshold");
    assert!(chance_hits > 0, "no hit landed during Chance Time");
}

#[test]
fn bonus_thresholds_progress() {
    let mut state = GameState::new(2024);
    state.start_game(GameMode::A);
    let mut bot = Autoplay::new(2024, 1.0, 1);

    let mut thresholds = vec![];
    for _ in 0..60 * 60 * 30 {
        bot.drive(&mut state);
        for event in state.drain_events() {
            if let GameEvent::BonusAwarded { threshold, .. } = event {
                thresholds.push(threshold);
            }
        }
        state.update();
        if state.scene != Scene::Playing || thresholds.len() >= 3 {
            break;
        }
    }

    let expected: [u32; 3] = [200, 500, 1500];
    assert_eq!(thresholds.as_slice(), &expected[..thresholds.len()]);
    assert!(!thresholds.is_empty());
}
