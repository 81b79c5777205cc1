//! CLI Interface: User input and terminal rendering
//!
//! # Components
//! - `input.rs`: Keystroke capture using crossterm
//! - `display.rs`: Terminal rendering of session state

pub mod display;
pub mod input;

pub use display::{format_overview, Display, RedrawGate};
pub use input::{InputAction, InputHandler};
