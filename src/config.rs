//! Trainer configuration.
//!
//! Defaults come from environment variables; CLI flags override them.

use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_STATS_PATH: &str = "data/stats.json";
const DEFAULT_LOG_PATH: &str = "data/trainer.log";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Blank user identity
    #[error("user id must not be empty")]
    EmptyUser,

    #[error("rounds must be at least 1")]
    NoRounds,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainerConfig {
    /// JSON file holding every user's history
    pub stats_path: PathBuf,
    /// Optional corpus override directory
    pub corpus_dir: Option<PathBuf>,
    /// Log file (the terminal is in raw mode while practicing)
    pub log_path: PathBuf,
    /// tracing filter directive, e.g. `debug` or `hangul_typing_trainer=trace`
    pub log_level: String,
}

impl TrainerConfig {
    /// Read `TRAINER_STATS_PATH`, `TRAINER_CORPUS_DIR`, `TRAINER_LOG_PATH`
    /// and `TRAINER_LOG`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let stats_path = lookup("TRAINER_STATS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATS_PATH));

        let corpus_dir = lookup("TRAINER_CORPUS_DIR")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let log_path = lookup("TRAINER_LOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH));

        let log_level = lookup("TRAINER_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        TrainerConfig {
            stats_path,
            corpus_dir,
            log_path,
            log_level,
        }
    }
}

#[cfg(test)]
impl Default for TrainerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Trim and validate a user-supplied identity
pub fn parse_user_id(raw: &str) -> Result<String, ConfigError> {
    let user = raw.trim();
    if user.is_empty() {
        return Err(ConfigError::EmptyUser);
    }
    Ok(user.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = TrainerConfig::default();
        assert_eq!(config.stats_path, PathBuf::from("data/stats.json"));
        assert_eq!(config.corpus_dir, None);
        assert_eq!(config.log_path, PathBuf::from("data/trainer.log"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("TRAINER_STATS_PATH", "/tmp/s.json"),
            ("TRAINER_CORPUS_DIR", "/tmp/corpus"),
            ("TRAINER_LOG", "debug"),
        ]
        .into_iter()
        .collect();

        let config = TrainerConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.stats_path, PathBuf::from("/tmp/s.json"));
        assert_eq!(config.corpus_dir, Some(PathBuf::from("/tmp/corpus")));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_path, PathBuf::from("data/trainer.log"));
    }

    #[test]
    fn test_user_id() {
        assert_eq!(parse_user_id("  minji "), Ok("minji".to_string()));
        assert_eq!(parse_user_id("   "), Err(ConfigError::EmptyUser));
    }
}
