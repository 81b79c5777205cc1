//! Practice session: keystroke judgment, state machine and summary
//!
//! # Components
//! - `matcher.rs`: Jamo-level / exact judgment of the latest keystroke
//! - `state.rs`: SessionState lifecycle (begin → submit_input → finished)
//! - `summary.rs`: Speed and accuracy of a finished run
//! - `errors.rs`: Mistake pairs for repeated mistyping

pub mod errors;
pub mod matcher;
pub mod state;
pub mod summary;

pub use errors::MistakeLog;
pub use state::SessionState;
pub use summary::SessionSummary;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    /// Input arrived after the content was completed
    #[error("session already finished; begin a new one")]
    Finished,

    /// Zero elapsed time or zero judged keystrokes at finish
    #[error("degenerate timing: {0}")]
    DegenerateTiming(String),
}
