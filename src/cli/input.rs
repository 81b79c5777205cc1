//! Keystroke input handling using crossterm
//!
//! Features:
//! - Polled keystroke capture
//! - Unicode character support (Hangul arrives already composed by the OS IME)
//! - Esc / Ctrl+C exit

use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::Result as IoResult;
use std::time::Duration;

/// What a keystroke means to the practice loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Exit,
    Backspace,
    Char(char),
    Ignore,
}

/// Handles user input from terminal
pub struct InputHandler {
    /// Timeout for poll operations
    poll_timeout: Duration,
}

impl InputHandler {
    /// Create new input handler with default timeout (50ms for responsive input)
    pub fn new() -> Self {
        InputHandler {
            poll_timeout: Duration::from_millis(50),
        }
    }

    /// Poll for keystroke with timeout
    /// Returns Some(KeyEvent) on key press, None on timeout
    pub fn read_key(&self) -> IoResult<Option<KeyEvent>> {
        if event::poll(self.poll_timeout)? {
            match event::read()? {
                event::Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                    Ok(Some(key_event))
                }
                _ => Ok(None),
            }
        } else {
            Ok(None)
        }
    }

    /// Block until any key is pressed
    pub fn wait_any_key(&self) -> IoResult<()> {
        loop {
            if self.read_key()?.is_some() {
                return Ok(());
            }
        }
    }

    pub fn classify(key: &KeyEvent) -> InputAction {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                InputAction::Exit
            }
            KeyCode::Esc => InputAction::Exit,
            KeyCode::Backspace => InputAction::Backspace,
            // Regular character input (including space which is KeyCode::Char(' '))
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                InputAction::Char(c)
            }
            _ => InputAction::Ignore,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            InputHandler::classify(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputAction::Exit
        );
        assert_eq!(
            InputHandler::classify(&key(KeyCode::Esc, KeyModifiers::NONE)),
            InputAction::Exit
        );
        assert_eq!(
            InputHandler::classify(&key(KeyCode::Backspace, KeyModifiers::NONE)),
            InputAction::Backspace
        );
        assert_eq!(
            InputHandler::classify(&key(KeyCode::Char('한'), KeyModifiers::NONE)),
            InputAction::Char('한')
        );
        assert_eq!(
            InputHandler::classify(&key(KeyCode::Char('H'), KeyModifiers::SHIFT)),
            InputAction::Char('H')
        );
        assert_eq!(
            InputHandler::classify(&key(KeyCode::Char('x'), KeyModifiers::ALT)),
            InputAction::Ignore
        );
        assert_eq!(
            InputHandler::classify(&key(KeyCode::Enter, KeyModifiers::NONE)),
            InputAction::Ignore
        );
    }
}
