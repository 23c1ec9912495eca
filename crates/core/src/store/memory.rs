//! In-process storage backend.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{StorageBackend, StorageError};

/// A storage backend backed by a map in memory.
///
/// Nothing survives the process. Wrap it in an `Arc` to share one medium
/// between several stores.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    /// An empty medium.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    ///
    /// Returns 0 if the lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.read().map(|items| items.len()).unwrap_or_default()
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self
            .items
            .read()
            .map_err(|_| StorageError::Unavailable("memory backend lock poisoned".to_owned()))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self
            .items
            .write()
            .map_err(|_| StorageError::Unavailable("memory backend lock poisoned".to_owned()))?;
        items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
