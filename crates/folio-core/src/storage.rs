//! Durable key-value storage.
//!
//! The portfolio persists exactly one value (the profile image), but the
//! store is exposed as a small string key-value trait so widgets receive it
//! by injection:
//! - [`Storage`]: redb file, survives restarts
//! - [`MemoryStore`]: process-lifetime map, for tests and as a fallback

use crate::error::FolioError;
use parking_lot::RwLock;
use redb::{Database, TableDefinition};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

/// String key-value store consumed by the page widgets.
///
/// Writes overwrite; there is no expiry and no namespacing.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, `None` if never written.
    fn get(&self, key: &str) -> Result<Option<String>, FolioError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), FolioError>;
}

/// Type-erased store handle shared between components.
pub type SharedStore = Arc<dyn KeyValueStore>;

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, FolioError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FolioError> {
        (**self).set(key, value)
    }
}

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// This will:
    /// - Create the database directory if it doesn't exist
    /// - Initialize the database file
    /// - Create the preferences table
    pub fn new(path: impl AsRef<Path>) -> Result<Self, FolioError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!(path = %path.display(), "opened preferences database");

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

impl KeyValueStore for Storage {
    fn get(&self, key: &str) -> Result<Option<String>, FolioError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;

        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FolioError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        tracing::debug!(key, bytes = value.len(), "stored preference");
        Ok(())
    }
}

/// In-memory store. Contents are lost when the process exits.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, FolioError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FolioError> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");
        let storage = Storage::new(&db_path).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_storage_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested/path/to/test.redb");
        let storage = Storage::new(&db_path);
        assert!(storage.is_ok());
        assert!(db_path.exists());
    }

    #[test]
    fn test_get_missing_key() {
        let (storage, _temp) = create_test_storage();
        assert_eq!(storage.get("profileImage").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let (storage, _temp) = create_test_storage();
        storage.set("profileImage", "first").unwrap();
        storage.set("profileImage", "second").unwrap();
        assert_eq!(
            storage.get("profileImage").unwrap().as_deref(),
            Some("second")
        );
    }

    #[test]
    fn test_storage_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");

        {
            let storage = Storage::new(&db_path).unwrap();
            storage.set("profileImage", "data:image/png;base64,AAAA").unwrap();
        }

        let storage = Storage::new(&db_path).unwrap();
        assert_eq!(
            storage.get("profileImage").unwrap().as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_shared_store_delegates() {
        let memory = MemoryStore::new();
        let shared: SharedStore = Arc::new(memory.clone());
        shared.set("k", "v").unwrap();
        assert_eq!(memory.get("k").unwrap().as_deref(), Some("v"));
    }
}
