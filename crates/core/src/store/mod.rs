//! Best-effort JSON persistence over a key/value medium.
//!
//! [`PersistentStore`] never reports storage failures to its callers: a value
//! that cannot be read falls back to the supplied default, and a value that
//! cannot be written stays in memory for the rest of the session. Failures
//! are logged at `warn`.
//!
//! The medium itself is a [`StorageBackend`]. Two are provided:
//! - [`MemoryBackend`] - an in-process map
//! - [`FileBackend`] - one JSON document per key in a directory

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod file;
pub mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

/// Key under which the redemption state is stored.
pub const REDEMPTION_STATE_KEY: &str = "birthday-pass:v1";

/// Key under which the flipbook link is stored.
pub const FLIPBOOK_LINK_KEY: &str = "birthday-pass-fliplink:v1";

/// Failures of the underlying storage medium.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The medium cannot be used at all.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Filesystem error.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A value could not be encoded or decoded.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A string key/value medium, the equivalent of browser local storage.
pub trait StorageBackend {
    /// Read the raw value stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for Arc<B> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// JSON load/save with silent fallback.
#[derive(Debug, Clone, Default)]
pub struct PersistentStore<B> {
    backend: B,
}

impl<B: StorageBackend> PersistentStore<B> {
    /// Wrap a storage backend.
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The underlying backend.
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Load the value stored under `key`, or `default` if it is missing or
    /// unreadable.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to load stored value, using default");
                default
            }
        }
    }

    /// Serialize `value` and store it under `key`. Failures are logged and
    /// otherwise ignored.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_save(key, value) {
            tracing::warn!(key, error = %e, "Failed to persist value, keeping it in memory only");
        }
    }

    fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.backend.get_item(key)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn try_save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set_item(key, &raw)?;
        tracing::debug!(key, bytes = raw.len(), "Persisted value");
        Ok(())
    }
}
