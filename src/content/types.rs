//! Practice selection types

use clap::ValueEnum;
use std::fmt;

use super::ContentError;

/// Practice language. Korean enables jamo-level matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Kind of drill
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum PracticeType {
    Keyboard,
    Word,
    Sentence,
    LongText,
}

impl PracticeType {
    /// File stem used for corpus overrides
    pub fn file_stem(&self) -> &'static str {
        match self {
            PracticeType::Keyboard => "keyboard",
            PracticeType::Word => "word",
            PracticeType::Sentence => "sentence",
            PracticeType::LongText => "long-text",
        }
    }
}

impl fmt::Display for PracticeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// Immutable text for one session, stored as chars for O(1) cursor lookup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeContent {
    chars: Vec<char>,
}

impl PracticeContent {
    pub fn new(text: &str) -> Result<Self, ContentError> {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return Err(ContentError::EmptyContent);
        }
        Ok(PracticeContent { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl fmt::Display for PracticeContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
