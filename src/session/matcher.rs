//! Keystroke judgment
//!
//! Korean syllables are compared jamo by jamo. Everything else, and all
//! English text, is compared by exact codepoint.

use crate::content::Language;
use crate::hangul::{decompose, is_hangul_syllable};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Judgment {
    Correct,
    Incorrect,
}

/// Judge the last character of `buffer` against `expected`.
///
/// An empty buffer is always Incorrect. A partially composed Korean
/// input (bare jamo) never decomposes, so it is Incorrect until the IME
/// finalizes the block.
pub fn judge(language: Language, expected: char, buffer: &str) -> Judgment {
    let Some(latest) = buffer.chars().last() else {
        return Judgment::Incorrect;
    };

    if language == Language::Ko && is_hangul_syllable(expected) {
        return match (decompose(expected), decompose(latest)) {
            (Ok(want), Ok(got))
                if want.leading == got.leading
                    && want.vowel == got.vowel
                    && want.trailing == got.trailing =>
            {
                Judgment::Correct
            }
            _ => Judgment::Incorrect,
        };
    }

    if latest == expected {
        Judgment::Correct
    } else {
        Judgment::Incorrect
    }
}
