//! In-process storage backend

use super::{KEY_PREFIX, Storage, StorageError};
use rustc_hash::FxHashMap;

/// Storage held in a hash map
///
/// Values are kept as JSON text, so everything passes through the same
/// serialization as a durable backend.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_raw(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.entries.retain(|key, _| !key.starts_with(KEY_PREFIX));
        Ok(())
    }
}
