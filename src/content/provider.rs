//! Content selection from built-in or on-disk corpora
//!
//! On-disk layout: `<corpus_dir>/<ko|en>/<type>.txt`, one entry per
//! non-empty line. A missing file falls back to the built-in corpus.

use rand::seq::SliceRandom;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

use super::corpus;
use super::{ContentError, Language, PracticeContent, PracticeType};

/// Supplies practice text for a (type, language) pair
pub trait ContentProvider {
    fn select(
        &self,
        practice: PracticeType,
        language: Language,
    ) -> Result<PracticeContent, ContentError>;
}

/// Uniform random pick from a corpus
#[derive(Clone, Debug, Default)]
pub struct CorpusProvider {
    corpus_dir: Option<PathBuf>,
}

impl CorpusProvider {
    /// Built-in corpora only
    pub fn builtin() -> Self {
        CorpusProvider { corpus_dir: None }
    }

    /// Prefer files under `dir`, fall back to built-ins
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        CorpusProvider {
            corpus_dir: Some(dir.into()),
        }
    }

    /// All entries available for a pair
    pub fn entries(
        &self,
        practice: PracticeType,
        language: Language,
    ) -> Result<Vec<String>, ContentError> {
        if let Some(dir) = &self.corpus_dir {
            let path = dir
                .join(language.code())
                .join(format!("{}.txt", practice.file_stem()));

            if path.exists() {
                let text = fs::read_to_string(&path).map_err(|source| ContentError::Read {
                    path: path.clone(),
                    source,
                })?;
                let entries: Vec<String> = text
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect();
                debug!(path = %path.display(), count = entries.len(), "Loaded corpus file");
                return Ok(entries);
            }

            warn!(path = %path.display(), "Corpus file not found, using built-in corpus");
        }

        Ok(corpus::builtin(practice, language)
            .iter()
            .map(|entry| entry.to_string())
            .collect())
    }
}

impl ContentProvider for CorpusProvider {
    fn select(
        &self,
        practice: PracticeType,
        language: Language,
    ) -> Result<PracticeContent, ContentError> {
        let entries = self.entries(practice, language)?;
        let chosen = entries
            .choose(&mut rand::thread_rng())
            .ok_or(ContentError::EmptyCorpus { practice, language })?;
        PracticeContent::new(chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_selection_comes_from_corpus() {
        let provider = CorpusProvider::builtin();
        let entries = provider.entries(PracticeType::Word, Language::En).unwrap();
        for _ in 0..20 {
            let content = provider.select(PracticeType::Word, Language::En).unwrap();
            assert!(entries.contains(&content.to_string()));
        }
    }

    #[test]
    fn test_dir_override() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("ko")).unwrap();
        fs::write(dir.path().join("ko/sentence.txt"), "\n  가나다  \n\n").unwrap();

        let provider = CorpusProvider::with_dir(dir.path());
        let content = provider.select(PracticeType::Sentence, Language::Ko).unwrap();
        assert_eq!(content.to_string(), "가나다");
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let provider = CorpusProvider::with_dir(dir.path());
        let entries = provider.entries(PracticeType::LongText, Language::En).unwrap();
        assert_eq!(
            entries.len(),
            corpus::builtin(PracticeType::LongText, Language::En).len()
        );
    }

    #[test]
    fn test_empty_corpus_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("en")).unwrap();
        fs::write(dir.path().join("en/word.txt"), "\n \n").unwrap();

        let provider = CorpusProvider::with_dir(dir.path());
        let err = provider
            .select(PracticeType::Word, Language::En)
            .unwrap_err();
        assert!(matches!(
            err,
            ContentError::EmptyCorpus {
                practice: PracticeType::Word,
                language: Language::En
            }
        ));
    }
}
