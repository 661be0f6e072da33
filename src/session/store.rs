//! Synchronous key-value stores backing the session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;

use crate::error::ClientError;

/// Durable or short-lived key-value slot. Writes replace a value wholesale.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError>;

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), ClientError>;
}

/// Process-local store. Used for tests and as the session-scoped slot when
/// nothing should outlive the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| ClientError::storage("Session store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| ClientError::storage("Session store lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ClientError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| ClientError::storage("Session store lock poisoned"))?;
        entries.remove(key);
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionFile {
    entries: BTreeMap<String, String>,
    updated_at: Option<DateTime<Utc>>,
}

/// JSON file store. Every write goes to an owner-only sibling temp file that
/// is renamed over the original, so readers see either the old or the new
/// contents and other local users see neither.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<SessionFile, ClientError> {
        if !self.path.exists() {
            return Ok(SessionFile::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(SessionFile::default());
        }

        serde_json::from_str(&content).map_err(|e| {
            ClientError::storage(format!("Corrupt session file {}: {}", self.path.display(), e))
        })
    }

    fn save(&self, file: &SessionFile) -> Result<(), ClientError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !parent.exists() {
            create_private_dir(parent)?;
        }

        let content = serde_json::to_string_pretty(file)
            .map_err(|e| ClientError::storage(format!("Failed to encode session file: {}", e)))?;

        // NamedTempFile is created owner-only (0600) and keeps that mode on persist
        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| {
            ClientError::storage(format!("Failed to write session file {}: {}", self.path.display(), e.error))
        })?;
        Ok(())
    }

    fn update<F>(&self, apply: F) -> Result<(), ClientError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| ClientError::storage("Session store lock poisoned"))?;

        let mut file = self.load()?;
        apply(&mut file.entries);
        file.updated_at = Some(Utc::now());
        self.save(&file)
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        Ok(self.load()?.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), ClientError> {
        if !self.path.exists() {
            return Ok(());
        }
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_replaces_and_removes() {
        let store = MemorySessionStore::new();
        store.set("token", "first").unwrap();
        store.set("token", "second").unwrap();
        assert_eq!(store.get("token").unwrap().as_deref(), Some("second"));

        store.remove("token").unwrap();
        store.remove("token").unwrap();
        assert_eq!(store.get("token").unwrap(), None);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        FileSessionStore::new(&path).set("token", "abc123").unwrap();

        let reopened = FileSessionStore::new(&path);
        assert_eq!(reopened.get("token").unwrap().as_deref(), Some("abc123"));
        let leftovers: Vec<_> = fs::read_dir(path.parent().unwrap()).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn file_store_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("private").join("session.json");
        let store = FileSessionStore::new(&path);

        store.set("token", "secret").unwrap();
        store.set("remembered_user", "bosun@example.com").unwrap();

        let file_mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        let dir_mode = fs::metadata(path.parent().unwrap()).unwrap().permissions().mode() & 0o777;
        assert_eq!(file_mode, 0o600);
        assert_eq!(dir_mode, 0o700);
    }

    #[test]
    fn file_store_remove_without_file_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        store.remove("token").unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        let err = FileSessionStore::new(&path).get("token").unwrap_err();
        assert!(matches!(err, ClientError::Storage(_)));
    }
}
