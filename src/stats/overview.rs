//! Aggregate view over a user's history

use super::StatsRecord;

/// Summary statistics across all recorded runs
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatsOverview {
    pub runs: usize,
    pub average_speed: f64,
    pub max_speed: f64,
    pub average_accuracy: f64,
}

impl StatsOverview {
    /// `None` when there is no history yet
    pub fn from_records(records: &[StatsRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let runs = records.len();
        let total_speed: f64 = records.iter().map(|r| r.speed).sum();
        let total_accuracy: f64 = records.iter().map(|r| r.accuracy).sum();
        let max_speed = records
            .iter()
            .map(|r| r.speed)
            .fold(f64::NEG_INFINITY, f64::max);

        Some(StatsOverview {
            runs,
            average_speed: total_speed / runs as f64,
            max_speed,
            average_accuracy: total_accuracy / runs as f64,
        })
    }
}
