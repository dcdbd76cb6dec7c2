//! Persistence for the sprint configuration store.
//!
//! A single JSON document per project root. A missing file is a
//! well-defined condition (`Ok(None)`), not a parse error; the store
//! enforces only structural well-formedness and leaves field-level
//! invariants to its writers.

use crate::domain::SprintConfig;
use crate::error::{StoreError, StoreResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Handle on the sprint store file
#[derive(Debug, Clone)]
pub struct SprintStore {
    path: PathBuf,
}

impl SprintStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the store. Missing file is `Ok(None)`.
    pub fn load(&self) -> StoreResult<Option<SprintConfig>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let value: serde_json::Value = serde_json::from_str(&content)?;

        // Structural check before deserializing into the typed document
        if !value
            .get("workstreams")
            .map(serde_json::Value::is_array)
            .unwrap_or(false)
        {
            return Err(StoreError::Malformed {
                path: self.path.clone(),
                reason: "'workstreams' is missing or not an array".to_string(),
            });
        }

        let config: SprintConfig = serde_json::from_value(value)?;
        Ok(Some(config))
    }

    /// Write the store, creating parent directories as needed.
    pub fn save(&self, config: &SprintConfig) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json + "\n")?;
        Ok(())
    }

    /// Remove the store file. Removing an absent store is a no-op.
    pub fn delete(&self) -> StoreResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Workstream, WorkstreamStatus};
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> SprintStore {
        SprintStore::new(temp.path().join(".sprint/sprint-config.json"))
    }

    #[test]
    fn test_load_missing_is_none() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let mut ws = Workstream::new(
            "ui",
            vec!["TASK-001".to_string(), "TASK-002".to_string()],
            ".worktrees/ui",
        );
        ws.dependencies.push("api".to_string());
        let config = SprintConfig::new("sprint-1", vec![ws]);

        store.save(&config).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.workstreams[0].status, WorkstreamStatus::ReadyToStart);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store
            .save(&SprintConfig::new("sprint-1", Vec::new()))
            .unwrap();
        assert!(store.exists());
    }

    #[test]
    fn test_malformed_workstreams_rejected() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::create_dir_all(temp.path().join(".sprint")).unwrap();
        fs::write(store.path(), r#"{"sprint": "s", "workstreams": 42}"#).unwrap();

        assert!(matches!(
            store.load(),
            Err(StoreError::Malformed { .. })
        ));
    }

    #[test]
    fn test_invalid_json_is_error() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::create_dir_all(temp.path().join(".sprint")).unwrap();
        fs::write(store.path(), "not json").unwrap();

        assert!(matches!(store.load(), Err(StoreError::Json(_))));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store
            .save(&SprintConfig::new("sprint-1", Vec::new()))
            .unwrap();

        store.delete().unwrap();
        assert!(!store.exists());
        store.delete().unwrap();
    }

    #[test]
    fn test_wire_format_field_names() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let mut ws = Workstream::new("ui", vec!["TASK-001".to_string()], ".worktrees/ui");
        ws.completed_at = Some("2024-06-01T12:00:00Z".to_string());
        ws.status = WorkstreamStatus::Completed;
        store
            .save(&SprintConfig::new("sprint-1", vec![ws]))
            .unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"fileConflicts\""));
        assert!(raw.contains("\"completedAt\""));
        assert!(raw.contains("\"completed\""));
    }
}
