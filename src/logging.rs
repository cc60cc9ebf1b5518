//! Log setup.
//!
//! The terminal belongs to the UI, so log lines go to a file.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// `<cache_dir>/sunset-timer/sunset-timer.log`
pub fn default_log_path() -> PathBuf {
    let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    cache_dir.join("sunset-timer").join("sunset-timer.log")
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
///
/// Returns the log file path, or `None` when the file could not be opened
/// (logging stays disabled; the timer works without it).
pub fn init_tracing(config: &LoggingConfig) -> Option<PathBuf> {
    let path = config.file.clone().unwrap_or_else(default_log_path);
    let file = open_log_file(&path).ok()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .ok()?;

    Some(path)
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
