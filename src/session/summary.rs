//! Finished-session summary: speed and accuracy

use std::time::Duration;

use super::SessionError;

/// Result of one completed run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionSummary {
    /// Correct characters per minute
    pub speed: f64,
    /// Percentage of judgments that were correct (0-100)
    pub accuracy: f64,
    pub correct_count: u32,
    pub incorrect_count: u32,
    pub elapsed: Duration,
}

impl SessionSummary {
    /// Rejects zero elapsed time and zero total judgments instead of
    /// producing Infinity/NaN.
    pub fn compute(
        correct_count: u32,
        incorrect_count: u32,
        elapsed: Duration,
    ) -> Result<Self, SessionError> {
        if elapsed.is_zero() {
            return Err(SessionError::DegenerateTiming(
                "elapsed time is zero".to_string(),
            ));
        }

        let total = correct_count as u64 + incorrect_count as u64;
        if total == 0 {
            return Err(SessionError::DegenerateTiming(
                "no keystrokes were judged".to_string(),
            ));
        }

        let speed = correct_count as f64 / elapsed.as_secs_f64() * 60.0;
        let accuracy = correct_count as f64 / total as f64 * 100.0;

        Ok(SessionSummary {
            speed,
            accuracy,
            correct_count,
            incorrect_count,
            elapsed,
        })
    }
}
