//! Constants for the shelf's on-disk locations.

use std::path::Path;

/// Well-known path components used by the shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShelfPath {
    /// The per-app directory under the user's data and config roots
    AppDir,
    /// The directory holding files moved onto the shelf
    HeldFiles,
    /// The persisted settings file
    SettingsFile,
}

impl ShelfPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AppDir => "Shelf",
            Self::HeldFiles => "HeldFiles",
            Self::SettingsFile => "settings.toml",
        }
    }
}

impl AsRef<Path> for ShelfPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ShelfPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ShelfPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
