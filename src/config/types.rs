use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Number-key shortcuts go from 1 to 9.
pub const MAX_PRESETS: usize = 9;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Countdown settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Length of a countdown launched without selecting a preset (default: 10).
    #[serde(default = "default_duration_secs")]
    pub default_duration_secs: u64,
    /// Cadence of remaining-time updates in milliseconds (default: 1000).
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Preset durations offered on the idle screen, in seconds.
    #[serde(default = "default_presets_secs")]
    pub presets_secs: Vec<u64>,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds (default: 100).
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    /// Draw the sun while the countdown runs (default: true).
    #[serde(default = "default_show_sun")]
    pub show_sun: bool,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to the platform cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_duration_secs() -> u64 {
    10
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_presets_secs() -> Vec<u64> {
    vec![10, 30, 60, 300]
}

fn default_frame_interval_ms() -> u64 {
    100
}

fn default_show_sun() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            default_duration_secs: default_duration_secs(),
            tick_interval_ms: default_tick_interval_ms(),
            presets_secs: default_presets_secs(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: default_frame_interval_ms(),
            show_sun: default_show_sun(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl TimerConfig {
    pub fn default_duration(&self) -> Duration {
        Duration::from_secs(self.default_duration_secs)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn presets(&self) -> Vec<Duration> {
        self.presets_secs
            .iter()
            .map(|secs| Duration::from_secs(*secs))
            .collect()
    }
}

impl UiConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}
