//! # Storage Backends
//!
//! Flat key-value storage the bookmark store persists into.
//! Implementations can be swapped for different targets (memory, files, ...).

mod file;
mod memory;

use std::sync::Arc;

use crate::error::{BookmarkError, Result};

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Key-value storage holding serialized values under string keys
pub trait StorageBackend: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value stored under `key`; missing keys are not an error
    fn remove(&self, key: &str) -> Result<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for Arc<B> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Keys are restricted to `[A-Za-z0-9_-]+` so they map safely onto file names.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(BookmarkError::InvalidKey(key.to_string()))
    }
}
