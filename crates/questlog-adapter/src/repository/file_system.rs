//! File System Store Implementation
//!
//! One file per key, `<dir>/<key>.json`. Writes go to a temporary file
//! first and are renamed into place, so a crash mid-write leaves the
//! previous save intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use questlog_domain::{KeyValueStore, StoreError};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Key-value store backed by a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store files under `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf, FileStoreError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(FileStoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }

    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, FileStoreError> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => {
                debug!(path = %path.display(), bytes = bytes.len(), "Read store file");
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(FileStoreError::Io { path, source }),
        }
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<(), FileStoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|source| FileStoreError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        fs::write(&tmp, value).map_err(|source| FileStoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| FileStoreError::Io {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), bytes = value.len(), "Wrote store file");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.read(key).map_err(|e| StoreError::ReadFailed {
            key: key.to_string(),
            message: e.to_string(),
        })
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.write(key, value).map_err(|e| StoreError::WriteFailed {
            key: key.to_string(),
            message: e.to_string(),
        })
    }
}
