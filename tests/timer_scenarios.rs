//! End-to-end countdown behaviour through the app controller, on simulated time.

mod common;

use common::{advance, config_with, make_app};
use std::time::Duration;
use sunset_timer::config::Config;
use sunset_timer::ui::timer::TimerPhase;

const STEP: Duration = Duration::from_millis(100);

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn ten_second_countdown_shows_remaining_then_finishes() {
    let (mut app, clock) = make_app(&config_with(10, 1000));
    app.launch();
    app.on_tick();
    assert_eq!(app.timer().display(), "00:00:10");

    advance(&mut app, &clock, ms(3_000), STEP);
    assert_eq!(app.timer().phase(), TimerPhase::Running);
    assert_eq!(app.timer().display(), "00:00:07");

    advance(&mut app, &clock, ms(7_000), STEP);
    assert_eq!(app.timer().phase(), TimerPhase::Idle);
    assert_eq!(app.timer().display(), "00:00:00");
    assert!(!app.is_countdown_active());
}

#[test]
fn cancel_mid_run_stops_updates() {
    let (mut app, clock) = make_app(&config_with(3, 1000));
    app.launch();
    app.on_tick();
    advance(&mut app, &clock, ms(1_000), STEP);
    assert_eq!(app.timer().display(), "00:00:02");

    app.stop();
    assert_eq!(app.timer().phase(), TimerPhase::Idle);
    assert_eq!(app.timer().display(), "00:00:00");

    advance(&mut app, &clock, ms(5_000), STEP);
    assert_eq!(app.timer().phase(), TimerPhase::Idle);
    assert_eq!(app.timer().display(), "00:00:00");
    assert_eq!(app.timer().remaining(), Duration::ZERO);
}

#[test]
fn launch_then_stop_leaves_idle_and_zero() {
    let (mut app, _clock) = make_app(&Config::default());
    app.launch();
    app.stop();
    assert_eq!(app.timer().phase(), TimerPhase::Idle);
    assert_eq!(app.timer().remaining(), Duration::ZERO);
    assert!(!app.is_countdown_active());
}

#[test]
fn stop_twice_from_idle_changes_nothing() {
    let (mut app, _clock) = make_app(&Config::default());
    let before = app.timer().clone();
    app.stop();
    app.stop();
    assert_eq!(app.timer(), &before);
    assert!(!app.is_countdown_active());
}

#[test]
fn selected_duration_produces_one_update_per_interval() {
    let mut config = Config::default();
    config.timer.presets_secs = vec![5];
    let (mut app, clock) = make_app(&config);

    assert!(app.select_preset(0));
    assert_eq!(app.timer().phase(), TimerPhase::PreArmed);
    app.launch();

    let mut seen = vec![app.timer().remaining()];
    while app.timer().is_running() {
        clock.advance(ms(1_000));
        app.on_tick();
        if app.timer().is_running() && seen.last() != Some(&app.timer().remaining()) {
            seen.push(app.timer().remaining());
        }
    }

    let expected: Vec<Duration> = (1..=5).rev().map(Duration::from_secs).collect();
    assert_eq!(seen, expected);
    assert_eq!(app.timer().phase(), TimerPhase::Idle);
}

#[test]
fn preset_run_returns_to_default_duration() {
    let (mut app, clock) = make_app(&config_with(10, 1000));
    app.select_preset(1);
    app.launch();
    assert_eq!(app.timer().configured(), Duration::from_secs(30));

    advance(&mut app, &clock, ms(5_000), STEP);
    assert_eq!(app.timer().display(), "00:00:25");

    advance(&mut app, &clock, ms(25_000), STEP);
    assert_eq!(app.timer().phase(), TimerPhase::Idle);
    assert_eq!(app.timer().configured(), Duration::from_secs(10));
}

#[test]
fn launch_while_running_acts_as_stop() {
    let (mut app, clock) = make_app(&Config::default());
    app.launch();
    advance(&mut app, &clock, ms(2_000), STEP);
    app.launch();
    assert_eq!(app.timer().phase(), TimerPhase::Idle);
    assert!(!app.is_countdown_active());
}

#[test]
fn relaunch_after_stop_starts_fresh_run() {
    let (mut app, clock) = make_app(&config_with(10, 1000));
    app.launch();
    advance(&mut app, &clock, ms(4_000), STEP);
    app.stop();

    app.launch();
    app.on_tick();
    assert_eq!(app.timer().display(), "00:00:10");
    advance(&mut app, &clock, ms(1_000), STEP);
    assert_eq!(app.timer().display(), "00:00:09");
}

#[test]
fn slow_polling_coalesces_missed_ticks() {
    let (mut app, clock) = make_app(&config_with(10, 1000));
    app.launch();
    clock.advance(ms(6_500));
    app.on_tick();
    assert_eq!(app.timer().display(), "00:00:04");
}

#[test]
fn sub_second_ticks_keep_display_in_whole_seconds() {
    let (mut app, clock) = make_app(&config_with(2, 250));
    app.launch();
    advance(&mut app, &clock, ms(750), Duration::from_millis(250));
    assert_eq!(app.timer().remaining(), ms(1_250));
    assert_eq!(app.timer().display(), "00:00:01");
}
