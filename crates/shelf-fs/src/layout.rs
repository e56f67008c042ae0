//! Storage layout resolution
//!
//! Locates the held-files directory and the settings file. Both default to
//! per-user locations and can be overridden for tests and portable use.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result, ShelfPath};

/// Resolved on-disk locations used by a shelf instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    held_files: PathBuf,
    settings_file: PathBuf,
}

impl StorageLayout {
    /// Resolve the per-user layout.
    ///
    /// Held files live in `<data_dir>/Shelf/HeldFiles`, settings in
    /// `<config_dir>/Shelf/settings.toml`.
    pub fn user() -> Result<Self> {
        let data = dirs::data_dir().ok_or(Error::NoUserDirectory { kind: "data" })?;
        let config = dirs::config_dir().ok_or(Error::NoUserDirectory { kind: "config" })?;
        Ok(Self {
            held_files: data.join(ShelfPath::AppDir).join(ShelfPath::HeldFiles),
            settings_file: config
                .join(ShelfPath::AppDir)
                .join(ShelfPath::SettingsFile),
        })
    }

    /// Layout rooted at a single directory, used for tests and `--storage-dir`.
    pub fn rooted(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            held_files: root.join(ShelfPath::HeldFiles),
            settings_file: root.join(ShelfPath::SettingsFile),
        }
    }

    /// Replace the settings file location.
    pub fn with_settings_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_file = path.into();
        self
    }

    pub fn held_files(&self) -> &Path {
        &self.held_files
    }

    pub fn settings_file(&self) -> &Path {
        &self.settings_file
    }

    /// Create the held-files directory if needed.
    pub fn ensure(&self) -> Result<()> {
        fs::create_dir_all(&self.held_files).map_err(|e| Error::io(&self.held_files, e))
    }
}
