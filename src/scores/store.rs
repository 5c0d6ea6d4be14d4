//! Key-value storage backing the score log.
//!
//! The score log only needs `get` and `set` on string values, the way a
//! browser's local storage behaves. Two backends are provided:
//! - `MemoryStore`: process-local map, for tests and ephemeral games
//! - `FileStore`: one file per key under a directory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors from reading or writing the score store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("score store I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("score log could not be encoded: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("store key '{0}' does not name a file inside the store directory")]
    InvalidKey(String),
}

/// String key-value storage with get/set semantics.
pub trait KeyValueStore {
    /// Read the value under `key`, or `None` if it was never set.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store keeping each key in `<dir>/<key>.json`.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory of this store.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`. Keys that could escape `dir` are rejected.
    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        if key.trim().is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)?) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(path, value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set() {
        let mut store = MemoryStore::new();

        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v2".to_string()));
    }

    #[test]
    fn test_file_store_get_set() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));

        assert_eq!(store.get("scores").unwrap(), None);
        store.set("scores", "[]").unwrap();
        assert_eq!(store.get("scores").unwrap(), Some("[]".to_string()));
        assert!(store.dir().join("scores.json").exists());
    }

    #[test]
    fn test_file_store_rejects_escaping_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));

        for key in ["../outside", "a/b", "a\\b", ""] {
            assert!(matches!(store.get(key), Err(StoreError::InvalidKey(k)) if k == key));
            assert!(matches!(store.set(key, "[]"), Err(StoreError::InvalidKey(_))));
        }
        assert!(!dir.path().join("outside.json").exists());
        assert!(!store.dir().exists());
    }
}
