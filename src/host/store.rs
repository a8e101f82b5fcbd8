//! Key-value storage for the persisted photo list.
//!
//! The gallery persists one value under one key — the JSON snapshot of the
//! photo list — so the seam is the smallest usable get/set pair. [`FileStore`]
//! keeps each key in its own file, which makes the persisted state inspectable
//! with `cat`; [`MemoryStore`] backs tests and embedders that persist through
//! their own mechanism.

use super::HostError;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

/// String-valued storage by key. Values survive as the host decides; `None`
/// from `get` means the key has never been written.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, HostError>;
    fn set(&self, key: &str, value: &str) -> Result<(), HostError>;
}

/// One file per key under a directory: key `photos` lives at
/// `<dir>/photos.json`. Keys are internal identifiers, not user input.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        match fs::read_to_string(self.path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), HostError> {
        fs::create_dir_all(&self.dir)?;
        Ok(fs::write(self.path(key), value)?)
    }
}

/// In-process store. Snapshot semantics match [`FileStore`]; nothing outlives
/// the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, HostError> {
        self.entries
            .lock()
            .map_err(|_| HostError::Failed("store mutex poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), HostError> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_store_unwritten_key_is_none() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());
        assert_eq!(store.get("photos").unwrap(), None);
    }

    #[test]
    fn file_store_roundtrips_a_value() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());

        store.set("photos", "[]").unwrap();
        assert_eq!(store.get("photos").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn file_store_set_overwrites() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());

        store.set("photos", "[1]").unwrap();
        store.set("photos", "[2]").unwrap();
        assert_eq!(store.get("photos").unwrap(), Some("[2]".to_string()));
    }

    #[test]
    fn file_store_values_survive_a_new_instance() {
        let tmp = TempDir::new().unwrap();
        FileStore::new(tmp.path()).set("photos", "[]").unwrap();

        let reopened = FileStore::new(tmp.path());
        assert_eq!(reopened.get("photos").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn file_store_creates_its_directory_on_first_set() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().join("state"));

        store.set("photos", "[]").unwrap();
        assert!(tmp.path().join("state/photos.json").exists());
    }

    #[test]
    fn memory_store_roundtrips_a_value() {
        let store = MemoryStore::new();
        assert_eq!(store.get("photos").unwrap(), None);

        store.set("photos", "[]").unwrap();
        assert_eq!(store.get("photos").unwrap(), Some("[]".to_string()));
    }
}
