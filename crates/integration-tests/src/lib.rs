//! Integration tests for Birthday Pass.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p birthday-pass-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `redemption_lifecycle` - Redeem/reset scenarios against file-backed storage
//! - `storage_failures` - Behavior when the storage medium is broken or corrupted
//! - `flipbook_link` - Flipbook link persistence
//!
//! Shared helpers live in this crate so every test file uses the same
//! fixtures.

use std::path::Path;
use std::sync::Arc;

use birthday_pass_core::store::{FileBackend, StorageBackend, StorageError};

/// The pass IDs of the built-in catalog, in order.
pub const PASS_IDS: [&str; 5] = [
    "argument-immunity",
    "food-treat",
    "movie-night",
    "chore-pass",
    "visit-home",
];

/// A file backend rooted at `dir`, shareable between controllers.
pub fn file_backend(dir: &Path) -> Arc<FileBackend> {
    Arc::new(FileBackend::new(dir))
}

/// A storage medium that fails on demand.
#[derive(Debug, Default)]
pub struct FailingBackend {
    /// Fail every read.
    pub fail_reads: bool,
    /// Fail every write.
    pub fail_writes: bool,
}

impl FailingBackend {
    /// A medium that fails both reads and writes.
    #[must_use]
    pub const fn broken() -> Self {
        Self {
            fail_reads: true,
            fail_writes: true,
        }
    }
}

impl StorageBackend for FailingBackend {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Unavailable("simulated read failure".to_owned()));
        }
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("simulated quota exceeded".to_owned()));
        }
        Ok(())
    }
}
