//! In-Memory Store Implementation
//!
//! Simple in-memory implementation of the key-value store port.
//! Useful for testing and for sessions that should not touch disk.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use questlog_domain::{KeyValueStore, StoreError};

/// In-memory Key-Value Store
///
/// Thread-safe implementation using RwLock. Clones share the same
/// entries, so a clone can be kept to inspect what a session wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::ReadFailed {
            key: key.to_string(),
            message: "Failed to acquire read lock".to_string(),
        })?;
        Ok(entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::WriteFailed {
            key: key.to_string(),
            message: "Failed to acquire write lock".to_string(),
        })?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
