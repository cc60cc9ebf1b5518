//! Command-line arguments.

use clap::Parser;
use std::io;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(
    name = "sunset-timer",
    version,
    about = "Terminal countdown timer with a setting sun"
)]
pub struct Cli {
    /// Config file (default: ~/.config/sunset-timer/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Countdown length in seconds when launching without a preset
    #[arg(long, value_name = "SECS")]
    pub duration: Option<u64>,

    /// Interval between remaining-time updates in milliseconds
    #[arg(long = "tick-ms", value_name = "MS")]
    pub tick_ms: Option<u64>,

    /// Preset duration in seconds; repeat to offer several (replaces configured presets)
    #[arg(long = "preset", value_name = "SECS")]
    pub presets: Vec<u64>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Do not draw the sun
    #[arg(long)]
    pub no_sun: bool,
}

impl Cli {
    /// Load the config file and layer command-line overrides on top.
    ///
    /// An explicit `--config` path must exist; the default path may be absent.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) if !path.exists() => {
                return Err(ConfigError::ReadError {
                    path: path.clone(),
                    source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
                });
            }
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Override config values with the flags that were given.
    pub fn apply(&self, config: &mut Config) {
        if let Some(secs) = self.duration {
            config.timer.default_duration_secs = secs;
        }
        if let Some(ms) = self.tick_ms {
            config.timer.tick_interval_ms = ms;
        }
        if !self.presets.is_empty() {
            config.timer.presets_secs = self.presets.clone();
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        if self.no_sun {
            config.ui.show_sun = false;
        }
    }
}
