//! Idle/demo player
//!
//! Plays from read-only session state: walks to the most urgent
//! hittable lane and strikes. It decides once per enemy whether to let it
//! through, so demo runs eventually end.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::lane::{LANE_ORDER, LaneId};
use super::state::{GameState, Scene};

/// What the bot did this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Wait,
    Move(LaneId),
    Attack,
}

#[derive(Debug, Clone)]
pub struct Autoplay {
    rng: Pcg32,
    /// Chance of going after any given enemy (0-1)
    accuracy: f64,
    /// Ticks to wait after moving before acting again
    reaction_ticks: u32,
    cooldown: u32,
    /// Per-lane choice to let the current enemy through
    ignore: [Option<bool>; 4],
}

impl Autoplay {
    pub fn new(seed: u64, accuracy: f64, reaction_ticks: u32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            accuracy: accuracy.clamp(0.0, 1.0),
            reaction_ticks,
            cooldown: 0,
            ignore: [None; 4],
        }
    }

    pub fn decide(&mut self, state: &GameState) -> Action {
        if state.scene != Scene::Playing || state.game_over {
            return Action::Wait;
        }

        for lane_id in LANE_ORDER {
            let slot = &mut self.ignore[lane_id.index()];
            if !state.lane(lane_id).is_occupied() {
                *slot = None;
            } else if slot.is_none() {
                *slot = Some(!self.rng.random_bool(self.accuracy));
            }
        }

        if self.cooldown > 0 {
            self.cooldown -= 1;
            return Action::Wait;
        }

        // Closest to its last stage first
        let target = LANE_ORDER
            .into_iter()
            .filter(|&id| self.ignore[id.index()] != Some(true))
            .filter(|&id| state.lane(id).is_hittable())
            .min_by_key(|&id| id.kind().max_stage() - state.lane(id).stage());

        match target {
            Some(id) if id == state.cursor => Action::Attack,
            Some(id) => {
                self.cooldown = self.reaction_ticks;
                Action::Move(id)
            }
            None => Action::Wait,
        }
    }

    /// Decide and apply to the session
    pub fn drive(&mut self, state: &mut GameState) -> Action {
        let action = self.decide(state);
        match action {
            Action::Wait => {}
            Action::Move(lane) => state.move_player(lane),
            Action::Attack => {
                state.attack();
            }
        }
        action
    }
}

/// Run one started game with the bot until the game over screen or
/// `max_ticks`. Returns ticks simulated.
pub fn play_headless(state: &mut GameState, bot: &mut Autoplay, max_ticks: u64) -> u64 {
    let mut ticks = 0;
    while state.scene == Scene::Playing && ticks < max_ticks {
        bot.drive(state);
        state.update();
        ticks += 1;
    }
    ticks
}
