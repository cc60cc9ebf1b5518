//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::time::Duration;
use sunset_timer::config::Config;
use sunset_timer::countdown::{Clock, ManualClock};
use sunset_timer::ui::app::App;
use tempfile::TempDir;

/// Default config with the given default duration and tick interval.
pub fn config_with(default_secs: u64, tick_ms: u64) -> Config {
    let mut config = Config::default();
    config.timer.default_duration_secs = default_secs;
    config.timer.tick_interval_ms = tick_ms;
    config
}

/// App driven by a simulated clock. Keep the returned clock to advance time.
pub fn make_app(config: &Config) -> (App<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    (App::with_clock(config, clock.clone()), clock)
}

/// Advance simulated time by `total` in `step` increments, letting the app
/// poll its countdown after each step (like the frame timer does).
pub fn advance<C: Clock>(app: &mut App<C>, clock: &ManualClock, total: Duration, step: Duration) {
    let mut elapsed = Duration::ZERO;
    while elapsed < total {
        let delta = step.min(total - elapsed);
        clock.advance(delta);
        app.on_tick();
        elapsed += delta;
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
