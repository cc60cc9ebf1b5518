mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, TimerConfig, UiConfig, MAX_PRESETS};
