mod common;

use clap::Parser;
use common::temp_config;
use std::path::PathBuf;
use std::time::Duration;
use sunset_timer::cli::Cli;
use sunset_timer::config::{Config, ConfigError, MAX_PRESETS};

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.timer.default_duration(), Duration::from_secs(10));
    assert_eq!(config.timer.tick_interval(), Duration::from_millis(1000));
    assert_eq!(config.timer.presets_secs, vec![10, 30, 60, 300]);
    assert_eq!(config.ui.frame_interval(), Duration::from_millis(100));
    assert!(config.ui.show_sun);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("sunset-timer/config.toml"));
}

#[test]
fn test_default_config_is_valid() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = temp_config(
        r#"[timer]
default_duration_secs = 25

[logging]
level = "debug"
file = "/tmp/sunset.log"
"#,
    );
    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.timer.default_duration_secs, 25);
    assert_eq!(config.timer.tick_interval_ms, 1000);
    assert_eq!(config.timer.presets_secs, vec![10, 30, 60, 300]);
    assert!(config.ui.show_sun);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/sunset.log")));
}

#[test]
fn test_full_file_round_trips_values() {
    let (_dir, path) = temp_config(
        r#"[timer]
default_duration_secs = 90
tick_interval_ms = 500
presets_secs = [5, 15]

[ui]
frame_interval_ms = 50
show_sun = false
"#,
    );
    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.timer.default_duration(), Duration::from_secs(90));
    assert_eq!(config.timer.tick_interval(), Duration::from_millis(500));
    assert_eq!(
        config.timer.presets(),
        vec![Duration::from_secs(5), Duration::from_secs(15)]
    );
    assert_eq!(config.ui.frame_interval(), Duration::from_millis(50));
    assert!(!config.ui.show_sun);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[timer\ndefault_duration_secs = ");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = temp_config("[timer]\ndefault_duration_secs = \"ten\"\n");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_zero_default_duration_fails_validation() {
    let (_dir, path) = temp_config("[timer]\ndefault_duration_secs = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("default_duration_secs"));
}

#[test]
fn test_zero_tick_interval_fails_validation() {
    let mut config = Config::default();
    config.timer.tick_interval_ms = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("tick_interval_ms"));
}

#[test]
fn test_zero_frame_interval_fails_validation() {
    let mut config = Config::default();
    config.ui.frame_interval_ms = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("frame_interval_ms"));
}

#[test]
fn test_zero_preset_fails_validation() {
    let mut config = Config::default();
    config.timer.presets_secs = vec![10, 0];
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("presets_secs[1]"));
}

#[test]
fn test_too_many_presets_fails_validation() {
    let mut config = Config::default();
    config.timer.presets_secs = (1..=MAX_PRESETS as u64 + 1).collect();
    assert!(config.validate().is_err());
}

#[test]
fn test_empty_presets_are_allowed() {
    let mut config = Config::default();
    config.timer.presets_secs.clear();
    assert!(config.validate().is_ok());
}

// -- command-line overrides -----------------------------------------------------

#[test]
fn test_cli_overrides_config_values() {
    let cli = Cli::try_parse_from([
        "sunset-timer",
        "--duration",
        "45",
        "--tick-ms",
        "250",
        "--preset",
        "5",
        "--preset",
        "15",
        "--log-file",
        "/tmp/timer.log",
        "--no-sun",
    ])
    .unwrap();

    let mut config = Config::default();
    cli.apply(&mut config);

    assert_eq!(config.timer.default_duration_secs, 45);
    assert_eq!(config.timer.tick_interval_ms, 250);
    assert_eq!(config.timer.presets_secs, vec![5, 15]);
    assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/timer.log")));
    assert!(!config.ui.show_sun);
}

#[test]
fn test_cli_without_flags_keeps_config() {
    let cli = Cli::try_parse_from(["sunset-timer"]).unwrap();
    let mut config = Config::default();
    cli.apply(&mut config);
    assert_eq!(config, Config::default());
}

#[test]
fn test_cli_loads_explicit_config_then_overrides() {
    let (_dir, path) = temp_config("[timer]\ndefault_duration_secs = 20\ntick_interval_ms = 500\n");
    let cli = Cli::try_parse_from([
        "sunset-timer",
        "--config",
        path.to_str().unwrap(),
        "--duration",
        "40",
    ])
    .unwrap();

    let config = cli.load_config().unwrap();
    assert_eq!(config.timer.default_duration_secs, 40);
    assert_eq!(config.timer.tick_interval_ms, 500);
}

#[test]
fn test_cli_missing_explicit_config_is_read_error() {
    let cli = Cli::try_parse_from([
        "sunset-timer",
        "--config",
        "/nonexistent/sunset-timer/config.toml",
    ])
    .unwrap();
    assert!(matches!(cli.load_config(), Err(ConfigError::ReadError { .. })));
}

#[test]
fn test_cli_zero_duration_fails_validation() {
    let (_dir, path) = temp_config("");
    let cli = Cli::try_parse_from([
        "sunset-timer",
        "--config",
        path.to_str().unwrap(),
        "--duration",
        "0",
    ])
    .unwrap();
    assert!(matches!(
        cli.load_config(),
        Err(ConfigError::ValidationError { .. })
    ));
}
