//! File-backed tracing setup
//!
//! Logs cannot go to the terminal while it is in raw mode, so everything
//! is appended to a plain-text log file.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::error::{TrainerError, TrainerResult};

/// Install the global subscriber. Call once at startup.
pub fn init(log_path: &Path, level: &str) -> TrainerResult<()> {
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let filter = EnvFilter::try_new(level)
        .map_err(|e| TrainerError::Logging(format!("invalid log level {level:?}: {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| TrainerError::Logging(e.to_string()))?;

    Ok(())
}
