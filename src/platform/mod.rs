//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Logging backends (console on web, env_logger natively)
//! - The wasm-bindgen bridge the JS host drives

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Install the logger for this target. Safe to call more than once; a
/// logger installed earlier is kept.
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            log::warn!("Console logger not installed: {}", e);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let env = env_logger::Env::default().default_filter_or("info");
        if let Err(e) = env_logger::Builder::from_env(env).try_init() {
            log::warn!("env_logger not installed: {}", e);
        }
    }
}
