//! Browser bridge
//!
//! The JS host owns rendering, audio and key mapping. It calls `frame` from
//! `requestAnimationFrame`, forwards input, and reads state back as JSON.

use wasm_bindgen::prelude::*;

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::{GameMode, GameState, LaneId};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn start() {
    super::init_logging();
    log::info!("Fire Attack core loaded");
}

fn to_js<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn random_seed() -> u64 {
    let noise = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let now = js_sys::Date::now() as u64;
    (now << 32) ^ noise
}

/// Game instance exposed to JS
#[wasm_bindgen]
pub struct FireAttack {
    state: GameState,
    accumulator: f32,
}

impl Default for FireAttack {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl FireAttack {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let seed = random_seed();
        log::info!("Session created with seed: {}", seed);
        Self {
            state: GameState::new(seed),
            accumulator: 0.0,
        }
    }

    /// Reproducible session
    pub fn with_seed(seed: u32) -> FireAttack {
        Self {
            state: GameState::new(u64::from(seed)),
            accumulator: 0.0,
        }
    }

    /// Session with JSON tuning overrides
    pub fn with_tuning(seed: u32, tuning_json: &str) -> Result<FireAttack, JsValue> {
        let tuning = Tuning::from_json(tuning_json).map_err(to_js)?;
        Ok(Self {
            state: GameState::with_tuning(u64::from(seed), tuning),
            accumulator: 0.0,
        })
    }

    /// Feed elapsed wall time (seconds); runs whole fixed ticks and returns
    /// how many ran
    pub fn frame(&mut self, dt: f32) -> u32 {
        let dt = dt.clamp(0.0, 0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.state.update();
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        // Drop the backlog rather than spiral
        if substeps == MAX_SUBSTEPS {
            self.accumulator = 0.0;
        }
        substeps
    }

    /// Single tick, for hosts running their own timer
    pub fn update(&mut self) {
        self.state.update();
    }

    /// Returns false for an unknown mode key
    pub fn start_game(&mut self, mode: &str) -> bool {
        match GameMode::from_str(mode) {
            Some(mode) => {
                self.state.start_game(mode);
                self.accumulator = 0.0;
                true
            }
            None => false,
        }
    }

    pub fn set_game_mode(&mut self, mode: &str) -> bool {
        GameMode::from_str(mode).is_some_and(|mode| self.state.set_game_mode(mode))
    }

    pub fn return_to_title(&mut self) {
        self.state.return_to_title();
    }

    /// Returns false for an unknown lane key
    pub fn move_player(&mut self, lane: &str) -> bool {
        match LaneId::from_str(lane) {
            Some(lane) => {
                self.state.move_player(lane);
                true
            }
            None => false,
        }
    }

    pub fn attack(&mut self) -> bool {
        self.state.attack()
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state.snapshot()).map_err(to_js)
    }

    pub fn drain_events_json(&mut self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state.drain_events()).map_err(to_js)
    }

    /// `null` when no miss animation is pending
    pub fn consume_miss_flags_json(&mut self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state.consume_miss_flags()).map_err(to_js)
    }
}
