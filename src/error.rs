//! Top-level error type for the trainer.

use thiserror::Error;

use crate::config::ConfigError;
use crate::content::ContentError;
use crate::session::SessionError;
use crate::stats::StatsError;

#[derive(Error, Debug)]
pub enum TrainerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Session setup failed (e.g. empty corpus)
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Stats error: {0}")]
    Stats(#[from] StatsError),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// Terminal or file I/O
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TrainerResult<T> = Result<T, TrainerError>;
