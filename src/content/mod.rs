//! Practice content: selection types, corpora and the provider
//!
//! # Components
//! - `types.rs`: Language, PracticeType, PracticeContent
//! - `corpus.rs`: Built-in word/sentence/long-text lists
//! - `provider.rs`: ContentProvider trait and random corpus selection

pub mod corpus;
pub mod provider;
pub mod types;

pub use provider::{ContentProvider, CorpusProvider};
pub use types::{Language, PracticeContent, PracticeType};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    /// No entries for the requested pair; aborts session setup
    #[error("no practice content for {practice} ({language})")]
    EmptyCorpus {
        practice: PracticeType,
        language: Language,
    },

    #[error("practice content is empty")]
    EmptyContent,

    #[error("failed to read corpus file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
