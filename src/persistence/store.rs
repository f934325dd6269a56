use crate::domain::Task;
use crate::errors::StorageError;
use crate::persistence::atomic_write;
use chrono::{DateTime, TimeZone, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// File holding the serialized task collection inside the store directory
pub const STORE_FILE: &str = "tasks.json";

/// Fixed timestamp carried by every seed task
fn seed_stamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 24, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Sample collection written on first run and substituted whenever stored
/// data is unreadable. Single source for both paths.
pub fn seed_tasks() -> Vec<Task> {
    let stamp = seed_stamp();
    let sample = |id: &str, text: &str, completed: bool| Task {
        id: id.to_string(),
        text: text.to_string(),
        completed,
        created_at: stamp,
        updated_at: stamp,
    };

    vec![
        sample("1", "Complete project documentation", false),
        sample("2", "Review code with team", true),
        sample("3", "Design new user interface", false),
    ]
}

/// Result of loading the store: the collection to use, plus an optional
/// non-fatal notice when stored data had to be discarded
#[derive(Debug)]
pub struct LoadOutcome {
    pub tasks: Vec<Task>,
    pub notice: Option<StorageError>,
}

/// Persistent store for the task collection, backed by a single JSON file
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Store rooted at the given directory
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(STORE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the task collection.
    ///
    /// First run (no file) writes the seed collection and returns it. An
    /// undecodable blob falls back to the seed collection without touching
    /// the stored file, so a later save is what replaces it. A decodable
    /// blob that is not an array loads as an empty collection.
    pub fn load(&self) -> LoadOutcome {
        if !self.path.exists() {
            let tasks = seed_tasks();
            // First run: persist the seed so the next launch finds it
            let notice = self.save(&tasks).err();
            return LoadOutcome { tasks, notice };
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                return LoadOutcome {
                    tasks: seed_tasks(),
                    notice: Some(StorageError::read(e)),
                }
            }
        };

        let value: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                return LoadOutcome {
                    tasks: seed_tasks(),
                    notice: Some(StorageError::read(e)),
                }
            }
        };

        if !value.is_array() {
            return LoadOutcome {
                tasks: Vec::new(),
                notice: None,
            };
        }

        match serde_json::from_value::<Vec<Task>>(value) {
            Ok(tasks) => LoadOutcome {
                tasks,
                notice: None,
            },
            Err(e) => LoadOutcome {
                tasks: seed_tasks(),
                notice: Some(StorageError::read(e)),
            },
        }
    }

    /// Serialize and write the full collection, replacing any prior value.
    /// Failure leaves the caller's in-memory collection authoritative.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(tasks).map_err(StorageError::write)?;
        atomic_write(&self.path, &json).map_err(StorageError::write)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_first_run_writes_and_returns_seed() {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path());

        let outcome = store.load();
        assert!(outcome.notice.is_none());

        let ids: Vec<&str> = outcome.tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(!outcome.tasks[0].completed);
        assert!(outcome.tasks[1].completed);
        assert!(!outcome.tasks[2].completed);

        // The seed was persisted, so a second load reads it back from disk
        assert!(store.path().exists());
        let second = store.load();
        assert!(second.notice.is_none());
        assert_eq!(second.tasks, outcome.tasks);
    }

    #[test]
    fn test_seed_timestamps_are_uniform() {
        let tasks = seed_tasks();
        for task in &tasks {
            assert_eq!(task.created_at, tasks[0].created_at);
            assert_eq!(task.updated_at, task.created_at);
        }
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path());

        let tasks = vec![Task::new("Buy milk"), Task::new("Walk the dog")];
        store.save(&tasks).unwrap();

        let outcome = store.load();
        assert!(outcome.notice.is_none());
        assert_eq!(outcome.tasks, tasks);
    }

    #[test]
    fn test_corrupt_blob_falls_back_to_seed_without_overwriting() {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path());

        let corrupt = "not json at all {{{";
        fs::write(store.path(), corrupt).unwrap();

        let outcome = store.load();
        assert_eq!(outcome.tasks, seed_tasks());
        assert!(matches!(outcome.notice, Some(StorageError::Read { .. })));

        // The faulty blob stays on disk untouched
        assert_eq!(fs::read_to_string(store.path()).unwrap(), corrupt);
    }

    #[test]
    fn test_array_of_non_tasks_falls_back_to_seed() {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path());

        fs::write(store.path(), r#"[{"foo": 1}]"#).unwrap();

        let outcome = store.load();
        assert_eq!(outcome.tasks, seed_tasks());
        assert!(matches!(outcome.notice, Some(StorageError::Read { .. })));
    }

    #[test]
    fn test_non_array_blob_loads_as_empty() {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path());

        fs::write(store.path(), r#"{"tasks": []}"#).unwrap();

        let outcome = store.load();
        assert!(outcome.tasks.is_empty());
        assert!(outcome.notice.is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path());

        let blob = r#"[
            {
                "id": "42",
                "text": "From a future version",
                "completed": false,
                "createdAt": "2025-08-24T00:00:00Z",
                "updatedAt": "2025-08-24T00:00:00Z",
                "priority": "high"
            }
        ]"#;
        fs::write(store.path(), blob).unwrap();

        let outcome = store.load();
        assert!(outcome.notice.is_none());
        assert_eq!(outcome.tasks.len(), 1);
        assert_eq!(outcome.tasks[0].id, "42");
        assert_eq!(outcome.tasks[0].text, "From a future version");
    }

    #[test]
    fn test_save_failure_reports_write_error() {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path().join("missing_subdir"));

        let err = store.save(&[Task::new("Doomed")]).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
    }
}
