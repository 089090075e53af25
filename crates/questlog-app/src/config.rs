//! Configuration for the questlog binary

use std::path::{Path, PathBuf};

use anyhow::Context;
use questlog_usecase::STORAGE_KEY;
use serde::{Deserialize, Serialize};

/// Config file format (config.json)
///
/// Every field is optional in the file; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Directory the save file lives in
    pub data_dir: PathBuf,

    /// Key (file stem) of the save
    pub storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".questlog"),
            storage_key: STORAGE_KEY.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Load `path` if given, otherwise use the defaults
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply a `--data-dir` override
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }
}
