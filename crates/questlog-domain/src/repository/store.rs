//! Key-Value Store - Abstract persistence for serialized state
//!
//! The domain only needs get/set of opaque bytes under a fixed key.
//! How they're stored (memory, file, browser storage) is not our concern here.

/// Errors that can occur during store operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing medium could not be read
    ReadFailed { key: String, message: String },
    /// The backing medium could not be written
    WriteFailed { key: String, message: String },
}

impl core::fmt::Display for StoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StoreError::ReadFailed { key, message } => {
                write!(f, "Failed to read '{}': {}", key, message)
            }
            StoreError::WriteFailed { key, message } => {
                write!(f, "Failed to write '{}': {}", key, message)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Key-Value Store Trait
///
/// This is a PORT in hexagonal architecture.
/// The domain defines what it needs; adapters provide implementations.
pub trait KeyValueStore {
    /// Read the bytes stored under `key`, `None` if nothing was stored
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}
