//! Per-user stats persistence
//!
//! The JSON file maps each user id to parallel `speed`/`accuracy` arrays:
//!
//! ```json
//! { "minji": { "speed": [212.5, 230.1], "accuracy": [96.0, 98.2] } }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;
use tracing::debug;

use super::StatsError;

/// One finished run
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatsRecord {
    /// Correct characters per minute
    pub speed: f64,
    /// Percent correct (0-100)
    pub accuracy: f64,
}

/// Append-only per-user history
pub trait StatsStore {
    fn append(&self, user: &str, record: StatsRecord) -> Result<(), StatsError>;

    /// Records in append order; empty for an unknown user
    fn read_all(&self, user: &str) -> Result<Vec<StatsRecord>, StatsError>;
}

/// On-disk shape of one user's history
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct UserStats {
    speed: Vec<f64>,
    accuracy: Vec<f64>,
}

impl UserStats {
    fn push(&mut self, record: StatsRecord) {
        self.speed.push(record.speed);
        self.accuracy.push(record.accuracy);
    }

    fn records(&self) -> Vec<StatsRecord> {
        self.speed
            .iter()
            .zip(&self.accuracy)
            .map(|(&speed, &accuracy)| StatsRecord { speed, accuracy })
            .collect()
    }
}

type StatsFile = BTreeMap<String, UserStats>;

/// Stats persisted in a single JSON file.
///
/// Appends hold a lock across read-modify-write and replace the file
/// atomically, so concurrent completions never drop a record.
#[derive(Debug)]
pub struct JsonStatsStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonStatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonStatsStore {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<StatsFile, StatsError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StatsFile::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    fn save(&self, data: &StatsFile) -> Result<(), StatsError> {
        let parent_dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir)?;

        let temp_file = NamedTempFile::new_in(parent_dir)?;
        {
            let mut writer = BufWriter::new(&temp_file);
            serde_json::to_writer_pretty(&mut writer, data)?;
            writer.flush()?;
        }
        temp_file
            .persist(&self.path)
            .map_err(|e| StatsError::Io(e.error))?;
        Ok(())
    }
}

impl StatsStore for JsonStatsStore {
    fn append(&self, user: &str, record: StatsRecord) -> Result<(), StatsError> {
        let _guard = self.lock.lock().map_err(|_| StatsError::Poisoned)?;

        let mut data = self.load()?;
        data.entry(user.to_string()).or_default().push(record);
        self.save(&data)?;

        debug!(user, path = %self.path.display(), "Appended stats record");
        Ok(())
    }

    fn read_all(&self, user: &str) -> Result<Vec<StatsRecord>, StatsError> {
        let _guard = self.lock.lock().map_err(|_| StatsError::Poisoned)?;
        Ok(self
            .load()?
            .get(user)
            .map(UserStats::records)
            .unwrap_or_default())
    }
}

/// Process-local store
#[cfg(test)]
#[derive(Debug, Default)]
pub struct InMemoryStatsStore {
    users: Mutex<BTreeMap<String, Vec<StatsRecord>>>,
}

#[cfg(test)]
impl InMemoryStatsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl StatsStore for InMemoryStatsStore {
    fn append(&self, user: &str, record: StatsRecord) -> Result<(), StatsError> {
        let mut users = self.users.lock().map_err(|_| StatsError::Poisoned)?;
        users.entry(user.to_string()).or_default().push(record);
        Ok(())
    }

    fn read_all(&self, user: &str) -> Result<Vec<StatsRecord>, StatsError> {
        let users = self.users.lock().map_err(|_| StatsError::Poisoned)?;
        Ok(users.get(user).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn record(speed: f64, accuracy: f64) -> StatsRecord {
        StatsRecord { speed, accuracy }
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStatsStore::new(dir.path().join("stats.json"));
        assert!(store.read_all("nobody").unwrap().is_empty());
    }

    #[test]
    fn test_append_preserves_order_per_user() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStatsStore::new(dir.path().join("nested/stats.json"));

        store.append("minji", record(100.0, 90.0)).unwrap();
        store.append("alex", record(50.0, 80.0)).unwrap();
        store.append("minji", record(120.0, 95.0)).unwrap();

        assert_eq!(
            store.read_all("minji").unwrap(),
            vec![record(100.0, 90.0), record(120.0, 95.0)]
        );
        assert_eq!(store.read_all("alex").unwrap(), vec![record(50.0, 80.0)]);

        // survives a fresh handle
        let reopened = JsonStatsStore::new(store.path());
        assert_eq!(reopened.read_all("minji").unwrap().len(), 2);
    }

    #[test]
    fn test_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        let store = JsonStatsStore::new(&path);
        store.append("minji", record(212.5, 96.0)).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["minji"]["speed"][0], 212.5);
        assert_eq!(raw["minji"]["accuracy"][0], 96.0);
    }

    #[test]
    fn test_corrupt_file_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonStatsStore::new(&path);
        assert!(matches!(
            store.read_all("minji"),
            Err(StatsError::Json(_))
        ));
    }

    #[test]
    fn test_concurrent_appends_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonStatsStore::new(dir.path().join("stats.json")));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store.append("shared", record(i as f64, 100.0)).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.read_all("shared").unwrap().len(), 8);
    }

    #[test]
    fn test_in_memory_store() {
        let store = InMemoryStatsStore::new();
        store.append("a", record(1.0, 2.0)).unwrap();
        assert_eq!(store.read_all("a").unwrap(), vec![record(1.0, 2.0)]);
        assert!(store.read_all("b").unwrap().is_empty());
    }
}
