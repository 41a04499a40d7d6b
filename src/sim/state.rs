//! Game state and core simulation types
//!
//! One `GameState` is one session: scene, lanes, clocks, score and the
//! seeded RNG. Everything the host renders comes from `snapshot()` and
//! `drain_events()`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::availability::LaneAvailability;
use super::beat::BeatClock;
use super::events::GameEvent;
use super::lane::{EnemyKind, LANE_ORDER, Lane, LaneId, empty_lanes};
use super::scoring::ScoreBoard;
use super::spawn::SpawnArbiter;
use super::tick;
use crate::tuning::Tuning;

/// Which screen the host shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scene {
    Title,
    Playing,
    GameOver,
}

/// Difficulty preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Three live lanes, rotating on every miss
    #[default]
    A,
    /// All four lanes, two speed tiers faster
    B,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::A => "A",
            GameMode::B => "B",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "A" | "1" => Some(GameMode::A),
            "B" | "2" => Some(GameMode::B),
            _ => None,
        }
    }
}

/// A scene change waiting on a tick countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingScene {
    pub target: Scene,
    pub remaining_ticks: u32,
}

impl PendingScene {
    pub fn new(target: Scene, ticks: u32) -> Self {
        Self {
            target,
            remaining_ticks: ticks,
        }
    }

    /// Count one tick; true when due
    pub fn tick(&mut self) -> bool {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        self.remaining_ticks == 0
    }
}

/// Miss animation the renderer should play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissAnimation {
    pub kind: EnemyKind,
    pub lane: LaneId,
}

/// Read-only view of one lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneView {
    pub id: LaneId,
    pub kind: EnemyKind,
    pub stage: u8,
    pub falling: bool,
    pub active: bool,
}

/// Read-only view of a session for presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub scene: Scene,
    pub mode: GameMode,
    pub cursor: LaneId,
    pub score: u32,
    pub misses: u32,
    pub total_hits: u32,
    pub game_over: bool,
    pub active_lanes: Vec<LaneId>,
    pub disabled_lane: Option<LaneId>,
    pub chance_time: bool,
    pub chance_time_remaining_ticks: u32,
    pub next_bonus_threshold: u32,
    pub lanes: Vec<LaneView>,
    pub runner_miss_triggered: bool,
    pub torch_miss_triggered: bool,
    pub last_miss_position: Option<LaneId>,
    pub tick_counter: u32,
    pub next_beat: EnemyKind,
    pub spawn_cooldown: i32,
    pub game_over_ticks_remaining: Option<u32>,
}

/// Complete session state (deterministic for a given seed and input,
/// serializable mid-game with the RNG stream position intact)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub tuning: Tuning,
    pub scene: Scene,
    pub mode: GameMode,
    /// Where the player stands
    pub cursor: LaneId,
    /// Indexed by `LaneId::index()`
    pub lanes: [Lane; 4],
    pub scoring: ScoreBoard,
    pub availability: LaneAvailability,
    pub clock: BeatClock,
    pub spawner: SpawnArbiter,
    pub game_over: bool,
    /// Runner pair (BL/BR) missed, awaiting the renderer
    pub runner_miss_triggered: bool,
    /// Torch pair (TL/TR) missed, awaiting the renderer
    pub torch_miss_triggered: bool,
    pub last_miss_position: Option<LaneId>,
    /// Scene change scheduled by the final miss
    pub game_over_timer: Option<PendingScene>,
    /// Simulated ticks this game
    pub time_ticks: u64,
    /// Undrained events are not part of a save
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session on the title screen with stock tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            scene: Scene::Title,
            mode: GameMode::A,
            cursor: LaneId::TL,
            lanes: empty_lanes(),
            scoring: ScoreBoard::new(&tuning),
            availability: LaneAvailability::all_active(),
            clock: BeatClock::default(),
            spawner: SpawnArbiter::new(tuning.initial_spawn_cooldown),
            game_over: false,
            runner_miss_triggered: false,
            torch_miss_triggered: false,
            last_miss_position: None,
            game_over_timer: None,
            time_ticks: 0,
            events: Vec::new(),
            tuning,
        }
    }

    /// Reset everything and begin play. Cancels a pending game over screen.
    pub fn start_game(&mut self, mode: GameMode) {
        self.mode = mode;
        self.scene = Scene::Playing;
        self.cursor = LaneId::TL;
        self.lanes = empty_lanes();
        self.scoring = ScoreBoard::new(&self.tuning);
        self.availability = LaneAvailability::for_mode(mode, &mut self.rng);
        self.clock = BeatClock::default();
        self.spawner = SpawnArbiter::new(self.tuning.initial_spawn_cooldown);
        self.game_over = false;
        self.clear_miss_flags();
        self.game_over_timer = None;
        self.time_ticks = 0;
        self.events.clear();
        self.events.push(GameEvent::SceneChanged {
            scene: Scene::Playing,
        });

        log::info!(
            "Game {} started (disabled lane: {:?})",
            mode.as_str(),
            self.availability.disabled()
        );
    }

    pub fn return_to_title(&mut self) {
        self.clear_miss_flags();
        self.game_over_timer = None;
        if self.scene != Scene::Title {
            self.scene = Scene::Title;
            self.events.push(GameEvent::SceneChanged {
                scene: Scene::Title,
            });
        }
    }

    /// Only honored on the title screen
    pub fn set_game_mode(&mut self, mode: GameMode) -> bool {
        if self.scene != Scene::Title {
            return false;
        }
        self.mode = mode;
        true
    }

    pub fn move_player(&mut self, lane: LaneId) {
        self.cursor = lane;
    }

    /// Advance one fixed tick
    pub fn update(&mut self) {
        tick::update(self);
    }

    /// Strike the lane under the cursor; true on a hit
    pub fn attack(&mut self) -> bool {
        tick::attack(self)
    }

    pub fn lane(&self, id: LaneId) -> &Lane {
        &self.lanes[id.index()]
    }

    pub fn score(&self) -> u32 {
        self.scoring.score
    }

    pub fn misses(&self) -> u32 {
        self.scoring.misses
    }

    pub fn chance_time(&self) -> bool {
        self.scoring.chance_time()
    }

    /// Events since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take the pending miss animation (if any) and lower the flags
    pub fn consume_miss_flags(&mut self) -> Option<MissAnimation> {
        let raised = self.runner_miss_triggered || self.torch_miss_triggered;
        let animation = self
            .last_miss_position
            .filter(|_| raised)
            .map(|lane| MissAnimation {
                kind: lane.kind(),
                lane,
            });
        self.clear_miss_flags();
        animation
    }

    fn clear_miss_flags(&mut self) {
        self.runner_miss_triggered = false;
        self.torch_miss_triggered = false;
        self.last_miss_position = None;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            scene: self.scene,
            mode: self.mode,
            cursor: self.cursor,
            score: self.scoring.score,
            misses: self.scoring.misses,
            total_hits: self.scoring.total_hits,
            game_over: self.game_over,
            active_lanes: self.availability.active_lanes(),
            disabled_lane: self.availability.disabled(),
            chance_time: self.scoring.chance_time(),
            chance_time_remaining_ticks: self.scoring.chance_time_remaining,
            next_bonus_threshold: self.scoring.next_bonus_threshold,
            lanes: LANE_ORDER
                .iter()
                .map(|&id| {
                    let lane = self.lane(id);
                    LaneView {
                        id,
                        kind: lane.kind(),
                        stage: lane.stage(),
                        falling: lane.is_falling(),
                        active: self.availability.is_active(id),
                    }
                })
                .collect(),
            runner_miss_triggered: self.runner_miss_triggered,
            torch_miss_triggered: self.torch_miss_triggered,
            last_miss_position: self.last_miss_position,
            tick_counter: self.clock.tick_counter,
            next_beat: self.clock.beat_type,
            spawn_cooldown: self.spawner.cooldown,
            game_over_ticks_remaining: self.game_over_timer.map(|t| t.remaining_ticks),
        }
    }
}
