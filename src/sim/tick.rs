//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session deterministically, plus the
//! synchronous attack action.

use super::beat::advance_lanes;
use super::events::GameEvent;
use super::lane::{EnemyKind, LANE_ORDER, LaneId};
use super::scoring::MAX_MISSES;
use super::state::{GameMode, GameState, PendingScene, Scene};

/// Advance the game state by one fixed tick
pub fn update(state: &mut GameState) {
    if state.scene != Scene::Playing {
        return;
    }

    // Frozen after the final miss; only the scene countdown runs
    if state.game_over {
        advance_game_over_timer(state);
        return;
    }

    state.time_ticks += 1;

    // Fall animations run every frame, independent of the beat clock
    let fall_duration = state.tuning.fall_duration_ticks;
    for lane_id in LANE_ORDER {
        if state.lanes[lane_id.index()].tick_fall(fall_duration) {
            state.events.push(GameEvent::FallCompleted { lane: lane_id });
        }
    }

    state.scoring.tick_chance_time(&mut state.events);

    let frames_per_beat = state
        .tuning
        .frames_per_beat(state.scoring.score, state.mode);
    let Some(kind) = state.clock.tick(frames_per_beat) else {
        return;
    };
    run_beat(state, kind);
}

fn run_beat(state: &mut GameState, kind: EnemyKind) {
    log::trace!("Beat {:?} at tick {}", kind, state.time_ticks);

    let overflowed = advance_lanes(&mut state.lanes, kind, &mut state.events);
    for lane_id in overflowed {
        register_miss(state, lane_id);
        if state.game_over {
            return;
        }
    }

    // Cooldown counts every beat, whichever kind moved
    let cooldown_after = state.tuning.spawn_cooldown(state.scoring.score);
    let spawned = state
        .spawner
        .on_beat(&mut state.lanes, &state.availability, cooldown_after);
    if let Some(lane_id) = spawned {
        log::debug!("Spawned {:?} in {}", lane_id.kind(), lane_id.as_str());
        state.events.push(GameEvent::EnemySpawned {
            lane: lane_id,
            kind: lane_id.kind(),
        });
    }
}

fn register_miss(state: &mut GameState, lane_id: LaneId) {
    let kind = lane_id.kind();
    let misses = state.scoring.record_miss();
    log::debug!("Miss in {} ({} of {})", lane_id.as_str(), misses, MAX_MISSES);
    state.events.push(GameEvent::Miss {
        lane: lane_id,
        kind,
        misses,
    });

    if state.mode == GameMode::A {
        if let Some((lane, cleared)) = state.availability.rotate(&mut state.lanes) {
            state.events.push(GameEvent::LaneDisabled { lane, cleared });
        }
    }

    match kind {
        EnemyKind::Runner => state.runner_miss_triggered = true,
        EnemyKind::Torch => state.torch_miss_triggered = true,
    }
    state.last_miss_position = Some(lane_id);

    if misses >= MAX_MISSES {
        state.game_over = true;
        state.game_over_timer = Some(PendingScene::new(
            Scene::GameOver,
            state.tuning.game_over_delay_ticks,
        ));
        log::info!(
            "Game over: score {} after {} ticks",
            state.scoring.score,
            state.time_ticks
        );
        state.events.push(GameEvent::GameOver {
            score: state.scoring.score,
        });
    }
}

fn advance_game_over_timer(state: &mut GameState) {
    let Some(timer) = state.game_over_timer.as_mut() else {
        return;
    };
    if timer.tick() {
        let target = timer.target;
        state.game_over_timer = None;
        state.scene = target;
        state.events.push(GameEvent::SceneChanged { scene: target });
    }
}

/// Strike the lane under the cursor. Returns false, changing nothing, when
/// there is nothing hittable there.
pub fn attack(state: &mut GameState) -> bool {
    if state.scene != Scene::Playing || state.game_over {
        return false;
    }

    let lane_id = state.cursor;
    if !state.lanes[lane_id.index()].hit() {
        return false;
    }

    let points = state.scoring.record_hit(&state.tuning);
    state.events.push(GameEvent::Hit {
        lane: lane_id,
        kind: lane_id.kind(),
        points,
    });
    state
        .scoring
        .check_bonus(&state.tuning, &mut state.rng, &mut state.events);
    true
}
