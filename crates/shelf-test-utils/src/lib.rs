//! Shared test utilities for the shelf workspace.
//!
//! Dev-dependency only. [`TestShelf`] lays out a temporary directory with a
//! held-files directory and a separate "outside" area standing in for the
//! user's own folders.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary shelf root with helpers for creating and checking files.
///
/// ```rust,no_run
/// use shelf_test_utils::TestShelf;
///
/// let shelf = TestShelf::new();
/// let file = shelf.create_file("docs/a.txt", "hello");
/// shelf.assert_file_contents(&file, "hello");
/// ```
pub struct TestShelf {
    temp_dir: TempDir,
}

impl Default for TestShelf {
    fn default() -> Self {
        Self::new()
    }
}

impl TestShelf {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("outside")).unwrap();
        Self { temp_dir }
    }

    /// Root of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Where the store under test should keep held files.
    pub fn storage_dir(&self) -> PathBuf {
        self.root().join("HeldFiles")
    }

    /// Path to the settings file inside the root.
    pub fn settings_file(&self) -> PathBuf {
        self.root().join("settings.toml")
    }

    /// Directory standing in for the user's own files.
    pub fn outside(&self) -> PathBuf {
        self.root().join("outside")
    }

    /// Path of `relative` under the outside directory, not created.
    pub fn outside_path(&self, relative: &str) -> PathBuf {
        self.outside().join(relative)
    }

    /// Create a file under the outside directory, with parents.
    pub fn create_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.outside_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Create a directory under the outside directory.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.outside_path(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Path a file named `name` would have in shelf storage.
    pub fn held_path(&self, name: &str) -> PathBuf {
        self.storage_dir().join(name)
    }

    pub fn assert_file_contents(&self, path: &Path, expected: &str) {
        let actual = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("expected {} to exist: {}", path.display(), e));
        assert_eq!(actual, expected, "contents of {}", path.display());
    }

    pub fn assert_missing(&self, path: &Path) {
        assert!(!path.exists(), "expected {} to be gone", path.display());
    }
}
