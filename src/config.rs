//! Scan configuration for callers that drive the dispatcher over a library.
//!
//! The engine itself reads no files; this is the document the CLI (or any
//! other scanner) loads to decide how to call it.

use crate::api::Options;
use crate::error::{Error, Result};
use crate::LibraryType;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Every field has a default, so `{}` is a valid document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub library_type: LibraryType,
    /// Library root. When unset, callers use the scanned directory.
    pub library_root: Option<String>,
    /// Worker threads for parallel dispatch; unset uses rayon's global pool.
    pub workers: Option<usize>,
    /// Skip dot-files and dot-folders while walking.
    pub skip_hidden: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig { library_type: LibraryType::Manga, library_root: None, workers: None, skip_hidden: true }
    }
}

impl ScanConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| Error::Config(err.to_string()))
    }

    /// Read a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load `path` if given. A missing file or a malformed document falls
    /// back to defaults, with the reason logged.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return ScanConfig::default();
        };

        match Self::load(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), library_type = %config.library_type, "loaded scan config");
                config
            }
            Err(Error::Io { source }) if source.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "config file not found, using defaults");
                ScanConfig::default()
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "invalid config, using defaults");
                ScanConfig::default()
            }
        }
    }

    pub fn options(&self) -> Options {
        Options { workers: self.workers }
    }
}
