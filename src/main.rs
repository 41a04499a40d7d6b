//! Fire Attack entry point
//!
//! The browser build is driven from JS through `platform::web`. Natively this
//! runs one headless demo game: `fire-attack [A|B] [seed]`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use fire_attack::sim::{Autoplay, GameEvent, GameMode, GameState, play_headless};

    fire_attack::platform::init_logging();

    let mut args = std::env::args().skip(1);
    let mode = args
        .next()
        .and_then(|s| GameMode::from_str(&s))
        .unwrap_or_default();
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0x0F12E);

    log::info!("Fire Attack (native) demo, mode {} seed {}", mode.as_str(), seed);

    let mut state = GameState::new(seed);
    state.start_game(mode);
    let mut bot = Autoplay::new(seed, 0.97, 4);

    // One hour of play at 60 Hz
    let ticks = play_headless(&mut state, &mut bot, 60 * 60 * 60);

    let events = state.drain_events();
    let bonuses = events
        .iter()
        .filter(|e| matches!(e, GameEvent::BonusAwarded { .. }))
        .count();
    let snapshot = state.snapshot();
    log::info!(
        "Finished after {} ticks: score {}, hits {}, misses {}, bonuses {}, scene {:?}",
        ticks,
        snapshot.score,
        snapshot.total_hits,
        snapshot.misses,
        bonuses,
        snapshot.scene
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
