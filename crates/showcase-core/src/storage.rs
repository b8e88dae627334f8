use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use anyhow::{Context, anyhow};
use tracing::debug;

use crate::task::Task;

/// String-keyed, string-valued storage with the shape of the browser's
/// `localStorage`.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Where the task list lives between page loads.
pub trait TaskRepository {
    /// Returns the stored list, or an empty list when nothing was stored.
    fn load(&self) -> anyhow::Result<Vec<Task>>;

    /// Overwrites the stored list.
    fn save(&self, tasks: &[Task]) -> anyhow::Result<()>;
}

/// Keeps the whole task list as one JSON array under a single key.
#[derive(Debug, Clone)]
pub struct KeyValueRepository<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> KeyValueRepository<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }
}

impl<S: KeyValueStorage> TaskRepository for KeyValueRepository<S> {
    #[tracing::instrument(skip(self), fields(key = %self.key))]
    fn load(&self) -> anyhow::Result<Vec<Task>> {
        let Some(raw) = self
            .storage
            .get(&self.key)
            .with_context(|| format!("failed reading storage key {}", self.key))?
        else {
            debug!("no stored tasks");
            return Ok(vec![]);
        };

        // A stored `null` counts as an empty list.
        if raw.trim() == "null" {
            return Ok(vec![]);
        }

        let tasks: Vec<Task> = serde_json::from_str(&raw)
            .with_context(|| format!("failed parsing tasks stored under {}", self.key))?;
        debug!(count = tasks.len(), "loaded stored tasks");
        Ok(tasks)
    }

    #[tracing::instrument(skip(self, tasks), fields(key = %self.key, count = tasks.len()))]
    fn save(&self, tasks: &[Task]) -> anyhow::Result<()> {
        let json = serde_json::to_string(tasks).context("failed encoding tasks")?;
        self.storage
            .set(&self.key, &json)
            .with_context(|| format!("failed writing storage key {}", self.key))
    }
}

/// In-process storage. Clones share the same entries, so a test can keep a
/// handle and inspect what a store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose writes always fail, like a browser over its quota.
    pub fn read_only() -> Self {
        Self {
            entries: Rc::default(),
            read_only: true,
        }
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        if self.read_only {
            return Err(anyhow!("storage is read-only"));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskId;

    fn sample() -> Vec<Task> {
        vec![
            Task {
                id: TaskId(1),
                text: "Buy milk".to_string(),
                completed: false,
            },
            Task {
                id: TaskId(2),
                text: "Walk dog".to_string(),
                completed: true,
            },
        ]
    }

    #[test]
    fn save_then_load_keeps_order_and_fields() {
        let repo = KeyValueRepository::new(MemoryStorage::new(), "todos");
        repo.save(&sample()).expect("save");
        assert_eq!(repo.load().expect("load"), sample());
    }

    #[test]
    fn missing_key_loads_empty() {
        let repo = KeyValueRepository::new(MemoryStorage::new(), "todos");
        assert!(repo.load().expect("load").is_empty());
    }

    #[test]
    fn reads_plain_numeric_ids() {
        let storage = MemoryStorage::new().with_entry(
            "todos",
            r#"[{"id":1718000000000,"text":"Plan trip","completed":false}]"#,
        );
        let repo = KeyValueRepository::new(storage, "todos");
        let tasks = repo.load().expect("load");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, TaskId(1718000000000));
        assert_eq!(tasks[0].text, "Plan trip");
    }

    #[test]
    fn stored_null_loads_empty() {
        let storage = MemoryStorage::new().with_entry("todos", "null");
        let repo = KeyValueRepository::new(storage, "todos");
        assert!(repo.load().expect("load").is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let storage = MemoryStorage::new().with_entry("todos", "[{not json");
        let repo = KeyValueRepository::new(storage, "todos");
        let err = repo.load().expect_err("malformed data");
        assert!(err.to_string().contains("failed parsing"));
    }

    #[test]
    fn read_only_storage_rejects_save() {
        let repo = KeyValueRepository::new(MemoryStorage::read_only(), "todos");
        assert!(repo.save(&sample()).is_err());
    }
}
