use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::config::types::{Config, MAX_PRESETS};
use crate::countdown::validate_duration;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// `~/.config/sunset-timer/config.toml` on Linux, the platform
    /// equivalent elsewhere. Falls back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("sunset-timer").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields `Config::default()`. An existing file is parsed
    /// as TOML and validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Default duration and every preset are non-zero
    /// - Tick and frame intervals are non-zero
    /// - At most nine presets (one per number key)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if validate_duration(self.timer.default_duration()).is_err() {
            return Err(invalid("timer.default_duration_secs must be greater than zero"));
        }

        if self.timer.tick_interval() == Duration::ZERO {
            return Err(invalid("timer.tick_interval_ms must be greater than zero"));
        }

        if self.ui.frame_interval() == Duration::ZERO {
            return Err(invalid("ui.frame_interval_ms must be greater than zero"));
        }

        if self.timer.presets_secs.len() > MAX_PRESETS {
            return Err(invalid(format!(
                "timer.presets_secs has {} entries, at most {} are supported",
                self.timer.presets_secs.len(),
                MAX_PRESETS
            )));
        }

        if let Some(index) = self
            .timer
            .presets()
            .into_iter()
            .position(|preset| validate_duration(preset).is_err())
        {
            return Err(invalid(format!(
                "timer.presets_secs[{}] must be greater than zero",
                index
            )));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        message: message.into(),
    }
}
