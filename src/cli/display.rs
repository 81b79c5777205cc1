//! Terminal display and UI rendering
//!
//! Features:
//! - Practice text with typed / current / untouched highlighting
//! - Input buffer colored per position against the text
//! - Live counters and finished-run summary

use crossterm::{
    cursor, execute,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{stdout, Result as IoResult, Write};

use crate::content::{Language, PracticeType};
use crate::session::{MistakeLog, SessionState, SessionSummary};
use crate::stats::StatsOverview;

/// How a character of the practice text is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharMark {
    /// Before the cursor
    Typed,
    /// At the cursor
    Current,
    /// After the cursor
    Untouched,
}

/// Per-character marks for the practice text
pub fn content_marks(state: &SessionState) -> Vec<CharMark> {
    let cursor = state.cursor();
    (0..state.content().len())
        .map(|i| {
            if i < cursor {
                CharMark::Typed
            } else if i == cursor {
                CharMark::Current
            } else {
                CharMark::Untouched
            }
        })
        .collect()
}

/// Per-character match of the input buffer against the text at the same position
pub fn input_marks(state: &SessionState) -> Vec<(char, bool)> {
    let content = state.content();
    state
        .input()
        .chars()
        .enumerate()
        .map(|(i, c)| (c, content.get(i) == Some(c)))
        .collect()
}

fn accuracy_color(accuracy: f64) -> Color {
    if accuracy > 90.0 {
        Color::Green
    } else if accuracy > 80.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Tracks whether the screen is stale; starts stale so the first frame draws
#[derive(Debug)]
pub struct RedrawGate {
    dirty: bool,
}

impl RedrawGate {
    pub fn new() -> Self {
        RedrawGate { dirty: true }
    }

    /// Something changed (a key arrived)
    pub fn mark(&mut self) {
        self.dirty = true;
    }

    /// True once per `mark`
    pub fn take(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

impl Default for RedrawGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal display manager
pub struct Display {
    /// Whether raw mode was enabled and must be restored
    raw_mode: bool,
}

impl Display {
    /// Enter raw mode for live keystroke capture
    pub fn raw() -> IoResult<Self> {
        terminal::enable_raw_mode()?;
        Ok(Display { raw_mode: true })
    }

    /// Clear screen
    pub fn clear(&self) -> IoResult<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        Ok(())
    }

    /// Header line: who is practicing what
    pub fn show_header(
        &self,
        user: &str,
        language: Language,
        practice: PracticeType,
        round: usize,
        rounds: usize,
    ) -> IoResult<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            SetForegroundColor(Color::Cyan),
            Print(format!("{} ", user)),
            ResetColor,
            Print(format!(
                "| {} | {} | round {}/{}\r\n\r\n",
                language, practice, round, rounds
            )),
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Practice text: typed in green, current underlined, rest grey
    pub fn show_content(&self, state: &SessionState) -> IoResult<()> {
        let mut stdout = stdout();

        for (c, mark) in state.content().chars().iter().zip(content_marks(state)) {
            match mark {
                CharMark::Typed => execute!(
                    stdout,
                    SetForegroundColor(Color::Green),
                    Print(c),
                    ResetColor
                )?,
                CharMark::Current => execute!(
                    stdout,
                    SetForegroundColor(Color::Yellow),
                    SetAttribute(Attribute::Underlined),
                    Print(c),
                    SetAttribute(Attribute::Reset),
                    ResetColor
                )?,
                CharMark::Untouched => execute!(
                    stdout,
                    SetForegroundColor(Color::DarkGrey),
                    Print(c),
                    ResetColor
                )?,
            }
        }

        execute!(stdout, Print("\r\n"))?;
        stdout.flush()?;
        Ok(())
    }

    /// Show input buffer with character-by-character highlighting
    /// Green for matching position, Red otherwise
    pub fn show_input(&self, state: &SessionState) -> IoResult<()> {
        let mut stdout = stdout();

        execute!(
            stdout,
            SetForegroundColor(Color::Yellow),
            Print("> "),
            ResetColor
        )?;

        for (c, matches) in input_marks(state) {
            let color = if matches { Color::Green } else { Color::Red };
            execute!(stdout, SetForegroundColor(color), Print(c), ResetColor)?;
        }

        execute!(stdout, Print("\r\n\r\n"))?;
        stdout.flush()?;
        Ok(())
    }

    /// Live counters
    pub fn show_progress(&self, state: &SessionState) -> IoResult<()> {
        let mut stdout = stdout();

        execute!(
            stdout,
            SetForegroundColor(Color::Magenta),
            Print("Progress: "),
            ResetColor,
            Print(format!(
                "{}/{}  |  Correct: {}  |  Incorrect: {}\r\n",
                state.cursor(),
                state.content().len(),
                state.correct_count(),
                state.incorrect_count()
            )),
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Finished-run summary
    pub fn show_summary(&self, summary: &SessionSummary, mistakes: &MistakeLog) -> IoResult<()> {
        let mut stdout = stdout();

        execute!(
            stdout,
            SetForegroundColor(Color::Blue),
            Print("─".repeat(50)),
            Print("\r\n"),
            ResetColor,
            Print(format!("Speed: {:.2} chars/min  |  Accuracy: ", summary.speed)),
            SetForegroundColor(accuracy_color(summary.accuracy)),
            Print(format!("{:.2}%", summary.accuracy)),
            ResetColor,
            Print(format!(
                "  |  Time: {:.1}s\r\n",
                summary.elapsed.as_secs_f64()
            )),
        )?;

        let problematic = mistakes.problematic_chars();
        if !problematic.is_empty() {
            execute!(
                stdout,
                SetForegroundColor(Color::Red),
                Print("Problematic characters: "),
                ResetColor,
                Print(format!("{:?}\r\n", problematic)),
            )?;
        }

        execute!(
            stdout,
            SetForegroundColor(Color::DarkGrey),
            Print("Press any key to continue...\r\n"),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Show help text
    pub fn show_help(&self) -> IoResult<()> {
        let mut stdout = stdout();

        execute!(
            stdout,
            SetForegroundColor(Color::DarkGrey),
            Print("Backspace to correct  |  Esc or Ctrl+C to exit\r\n"),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Reset terminal state and cleanup
    pub fn shutdown(&mut self) -> IoResult<()> {
        if self.raw_mode {
            terminal::disable_raw_mode()?;
            self.raw_mode = false;
        }
        Ok(())
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        // Best effort cleanup
        let _ = self.shutdown();
    }
}

/// Plain-text stats overview (printed outside raw mode)
pub fn format_overview(user: &str, overview: Option<&StatsOverview>) -> String {
    match overview {
        Some(o) => format!(
            "Stats for {user} ({} runs)\n  Average speed: {:.2} chars/min\n  Max speed: {:.2} chars/min\n  Average accuracy: {:.2}%",
            o.runs, o.average_speed, o.max_speed, o.average_accuracy
        ),
        None => format!("No stats recorded for {user}."),
    }
}
