//! Stats: per-user history persistence and aggregation
//!
//! # Components
//! - `store.rs`: StatsStore trait, JSON file and in-memory stores
//! - `overview.rs`: Average/max speed and average accuracy

pub mod overview;
pub mod store;

pub use overview::StatsOverview;
pub use store::{JsonStatsStore, StatsRecord, StatsStore};

use crate::session::SessionSummary;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("stats file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stats file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("stats store lock poisoned")]
    Poisoned,
}

impl From<&SessionSummary> for StatsRecord {
    fn from(summary: &SessionSummary) -> Self {
        StatsRecord {
            speed: summary.speed,
            accuracy: summary.accuracy,
        }
    }
}
