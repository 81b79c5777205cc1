//! Session state tracking
//!
//! Maintains:
//! - Target content and cursor position
//! - Correct/incorrect keystroke counters
//! - Latest input buffer (for rendering)
//! - Lifecycle phase (active → finished)

use std::time::Duration;
use tracing::{debug, info};

use super::errors::MistakeLog;
use super::matcher::{judge, Judgment};
use super::summary::SessionSummary;
use super::SessionError;
use crate::clock::Clock;
use crate::content::{Language, PracticeContent};

/// Floor applied to elapsed time so a sub-millisecond run still has a speed
pub const MIN_ELAPSED: Duration = Duration::from_millis(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Active,
    /// Terminal; start a new session with [`SessionState::begin`]
    Finished,
}

/// Outcome of one input event
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Submission {
    #[allow(dead_code)]
    pub judgment: Judgment,
    /// Present only on the event that completed the content
    pub summary: Option<SessionSummary>,
}

/// One practice run
#[derive(Clone, Debug)]
pub struct SessionState {
    content: PracticeContent,
    language: Language,
    /// Index of the next expected character; only moves forward on Correct
    cursor: usize,
    correct_count: u32,
    incorrect_count: u32,
    started_at: Duration,
    input: String,
    phase: SessionPhase,
    summary: Option<SessionSummary>,
    mistakes: MistakeLog,
}

impl SessionState {
    /// Start a run over `content` with counters at zero and the timer running
    pub fn begin(content: PracticeContent, language: Language, clock: &impl Clock) -> Self {
        debug!(len = content.len(), %language, "Session started");
        SessionState {
            content,
            language,
            cursor: 0,
            correct_count: 0,
            incorrect_count: 0,
            started_at: clock.now(),
            input: String::new(),
            phase: SessionPhase::Active,
            summary: None,
            mistakes: MistakeLog::new(),
        }
    }

    /// Judge the latest character of the accumulated input buffer.
    ///
    /// Correct advances the cursor by one; Incorrect only bumps the
    /// counter. Reaching the end of the content finishes the session and
    /// returns its summary.
    pub fn submit_input(
        &mut self,
        buffer: &str,
        clock: &impl Clock,
    ) -> Result<Submission, SessionError> {
        if self.phase == SessionPhase::Finished {
            return Err(SessionError::Finished);
        }

        let expected = self
            .content
            .get(self.cursor)
            .ok_or(SessionError::Finished)?;

        self.input.clear();
        self.input.push_str(buffer);

        let judgment = judge(self.language, expected, buffer);
        debug!(cursor = self.cursor, %expected, ?judgment, "Judged input");

        match judgment {
            Judgment::Correct => {
                self.correct_count += 1;
                self.cursor += 1;
            }
            Judgment::Incorrect => {
                self.incorrect_count += 1;
                if let Some(got) = buffer.chars().last() {
                    self.mistakes.record(expected, got);
                }
            }
        }

        let summary = if self.cursor >= self.content.len() {
            Some(self.finish(clock)?)
        } else {
            None
        };

        Ok(Submission { judgment, summary })
    }

    /// Replace the input buffer without judging it (e.g. after Backspace).
    /// Counters and cursor are untouched.
    pub fn edit_input(&mut self, buffer: &str) {
        self.input.clear();
        self.input.push_str(buffer);
    }

    fn finish(&mut self, clock: &impl Clock) -> Result<SessionSummary, SessionError> {
        let elapsed = clock.elapsed(self.started_at).max(MIN_ELAPSED);
        let summary = SessionSummary::compute(self.correct_count, self.incorrect_count, elapsed)?;

        self.phase = SessionPhase::Finished;
        self.summary = Some(summary);
        info!(
            speed = summary.speed,
            accuracy = summary.accuracy,
            correct = self.correct_count,
            incorrect = self.incorrect_count,
            "Session finished"
        );
        Ok(summary)
    }

    pub fn content(&self) -> &PracticeContent {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn incorrect_count(&self) -> u32 {
        self.incorrect_count
    }

    /// Latest full input buffer as submitted
    pub fn input(&self) -> &str {
        &self.input
    }

    #[allow(dead_code)]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[allow(dead_code)]
    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }

    pub fn mistakes(&self) -> &MistakeLog {
        &self.mistakes
    }

    /// Expected character, `None` once finished
    #[allow(dead_code)]
    pub fn expected(&self) -> Option<char> {
        match self.phase {
            SessionPhase::Active => self.content.get(self.cursor),
            SessionPhase::Finished => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClock;

    fn session(text: &str, language: Language, clock: &MockClock) -> SessionState {
        SessionState::begin(PracticeContent::new(text).unwrap(), language, clock)
    }

    #[test]
    fn test_begin_resets_everything() {
        let clock = MockClock::new();
        let state = session("hello", Language::En, &clock);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.correct_count(), 0);
        assert_eq!(state.incorrect_count(), 0);
        assert_eq!(state.phase(), SessionPhase::Active);
        assert_eq!(state.expected(), Some('h'));
    }

    #[test]
    fn test_single_syllable_session() {
        let clock = MockClock::new();
        let mut state = session("가", Language::Ko, &clock);

        let sub = state.submit_input("ㄱ", &clock).unwrap();
        assert_eq!(sub.judgment, Judgment::Incorrect);
        assert!(sub.summary.is_none());
        assert_eq!(state.cursor(), 0);

        clock.advance(Duration::from_secs(3));
        let sub = state.submit_input("가", &clock).unwrap();
        assert_eq!(sub.judgment, Judgment::Correct);
        assert_eq!(state.cursor(), 1);
        assert_eq!(state.phase(), SessionPhase::Finished);

        let summary = sub.summary.unwrap();
        assert_eq!(summary.correct_count, 1);
        assert_eq!(summary.incorrect_count, 1);
        assert!((summary.accuracy - 50.0).abs() < 1e-9);
        assert!((summary.speed - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_incorrect_never_advances() {
        let clock = MockClock::new();
        let mut state = session("hello", Language::En, &clock);

        for buffer in ["x", "", "hx", "H"] {
            let sub = state.submit_input(buffer, &clock).unwrap();
            assert_eq!(sub.judgment, Judgment::Incorrect);
            assert_eq!(state.cursor(), 0);
        }
        assert_eq!(state.incorrect_count(), 4);
        assert_eq!(state.correct_count(), 0);
        // empty buffer has nothing to log
        assert_eq!(state.mistakes().total(), 3);
    }

    #[test]
    fn test_typing_through_accumulated_buffer() {
        let clock = MockClock::new();
        let mut state = session("hi!", Language::En, &clock);

        let mut buffer = String::new();
        let mut summaries = 0;
        for c in "hi!".chars() {
            buffer.push(c);
            let before = state.cursor();
            let sub = state.submit_input(&buffer, &clock).unwrap();
            assert_eq!(sub.judgment, Judgment::Correct);
            assert_eq!(state.cursor(), before + 1);
            assert_eq!(state.input(), buffer);
            if sub.summary.is_some() {
                summaries += 1;
            }
        }

        assert_eq!(summaries, 1);
        assert_eq!(state.phase(), SessionPhase::Finished);
        assert!(state.summary().is_some());
        assert_eq!(state.expected(), None);
    }

    #[test]
    fn test_korean_sentence_with_space_and_punctuation() {
        let clock = MockClock::new();
        let mut state = session("안녕 하세요.", Language::Ko, &clock);

        // IME composition steps for 안
        for buffer in ["ㅇ", "아", "안"] {
            state.submit_input(buffer, &clock).unwrap();
        }
        assert_eq!(state.cursor(), 1);
        assert_eq!(state.incorrect_count(), 2);

        let mut buffer = String::from("안");
        for c in "녕 하세요.".chars() {
            buffer.push(c);
            state.submit_input(&buffer, &clock).unwrap();
        }
        assert_eq!(state.phase(), SessionPhase::Finished);
        assert_eq!(state.correct_count(), 7);
    }

    #[test]
    fn test_backspace_edit_is_not_judged() {
        let clock = MockClock::new();
        let mut state = session("가나다", Language::Ko, &clock);

        let mut buffer = String::from("가");
        state.submit_input(&buffer, &clock).unwrap();
        buffer.push('x');
        state.submit_input(&buffer, &clock).unwrap();
        assert_eq!(state.input(), "가x");

        buffer.pop();
        state.edit_input(&buffer);
        assert_eq!(state.input(), "가");
        assert_eq!(state.cursor(), 1);
        assert_eq!(state.correct_count(), 1);
        assert_eq!(state.incorrect_count(), 1);

        buffer.push('나');
        let sub = state.submit_input(&buffer, &clock).unwrap();
        assert_eq!(sub.judgment, Judgment::Correct);
        assert_eq!(state.input(), "가나");
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn test_submit_after_finish_rejected() {
        let clock = MockClock::new();
        let mut state = session("a", Language::En, &clock);
        state.submit_input("a", &clock).unwrap();

        let err = state.submit_input("a", &clock).unwrap_err();
        assert!(matches!(err, SessionError::Finished));
        assert_eq!(state.correct_count(), 1);
    }

    #[test]
    fn test_instant_finish_is_clamped() {
        let clock = MockClock::new();
        let mut state = session("a", Language::En, &clock);

        let summary = state.submit_input("a", &clock).unwrap().summary.unwrap();
        assert_eq!(summary.elapsed, MIN_ELAPSED);
        assert!(summary.speed.is_finite());
        assert!((summary.accuracy - 100.0).abs() < 1e-9);
    }
}
