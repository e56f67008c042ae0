//! File moves and atomic writes
//!
//! Moves always overwrite their destination. A rename that crosses
//! filesystems falls back to copy-then-remove.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Move a file or directory to `to`, replacing anything already there.
pub fn move_path(from: &Path, to: &Path) -> Result<()> {
    fs::symlink_metadata(from).map_err(|e| Error::io(from, e))?;

    if same_path(from, to) {
        return Ok(());
    }

    if fs::symlink_metadata(to).is_ok() {
        remove_path(to)?;
    }

    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::CrossesDevices => {
            tracing::debug!(from = %from.display(), to = %to.display(), "Rename crosses devices, copying");
            copy_then_remove(from, to, remove_path)
        }
        Err(e) => Err(Error::io(to, e)),
    }
}

/// Copy `from` to `to`, then remove `from` with `remove`.
///
/// On failure the copy at `to` is removed again, so the move either
/// completes or leaves only the source. A directory whose removal failed
/// part way keeps its copy, since the source may no longer be whole.
fn copy_then_remove(
    from: &Path,
    to: &Path,
    remove: impl FnOnce(&Path) -> Result<()>,
) -> Result<()> {
    let source_is_dir = fs::symlink_metadata(from).is_ok_and(|meta| meta.is_dir());

    let error = match copy_recursive(from, to) {
        Err(e) => e,
        Ok(()) => match remove(from) {
            Ok(()) => return Ok(()),
            Err(e) if source_is_dir => {
                tracing::warn!(from = %from.display(), to = %to.display(), error = %e, "Directory move failed part way, keeping both trees");
                return Err(e);
            }
            Err(e) => e,
        },
    };

    if fs::symlink_metadata(to).is_ok()
        && let Err(cleanup) = remove_path(to)
    {
        tracing::warn!(path = %to.display(), error = %cleanup, "Failed to remove copy after failed move");
    }
    Err(error)
}

/// Move `from` into `dir`, keeping its file name. Returns the new path.
pub fn move_into(from: &Path, dir: &Path) -> Result<PathBuf> {
    let name = from.file_name().ok_or_else(|| Error::NoFileName {
        path: from.to_path_buf(),
    })?;
    let dest = dir.join(name);
    move_path(from, &dest)?;
    Ok(dest)
}

/// Create the parent directory of `path` if it is missing.
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    Ok(())
}

/// Remove a file, symlink or directory tree.
pub fn remove_path(path: &Path) -> Result<()> {
    let meta = fs::symlink_metadata(path).map_err(|e| Error::io(path, e))?;
    let result = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    result.map_err(|e| Error::io(path, e))
}

/// Check whether `path` lies inside `dir`.
///
/// Both sides are canonicalised where they exist so that symlinked roots
/// (such as `/tmp` on macOS) compare equal. The comparison is by path
/// component, so `/a/bc` is not inside `/a/b`.
pub fn is_within(path: &Path, dir: &Path) -> bool {
    let path = resolve(path);
    let dir = resolve(dir);
    path != dir && path.starts_with(&dir)
}

/// Check whether two paths name the same directory entry.
///
/// A symlink is compared as itself, not by its target.
pub fn same_path(a: &Path, b: &Path) -> bool {
    resolve(a) == resolve(b)
}

/// Canonicalise the parent of a path and re-join its file name.
///
/// The last component is never followed, so two symlinks to one target
/// stay distinct.
fn resolve(path: &Path) -> PathBuf {
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            dunce::canonicalize(parent)
                .unwrap_or_else(|_| resolve(parent))
                .join(name)
        }
        _ => dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()),
    }
}

fn copy_recursive(from: &Path, to: &Path) -> Result<()> {
    let meta = fs::symlink_metadata(from).map_err(|e| Error::io(from, e))?;
    if !meta.is_dir() {
        fs::copy(from, to).map_err(|e| Error::io(to, e))?;
        return Ok(());
    }

    fs::create_dir_all(to).map_err(|e| Error::io(to, e))?;
    for entry in fs::read_dir(from).map_err(|e| Error::io(from, e))? {
        let entry = entry.map_err(|e| Error::io(from, e))?;
        copy_recursive(&entry.path(), &to.join(entry.file_name()))?;
    }
    Ok(())
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so readers never see a partial file.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();
    ensure_parent(&native_path)?;

    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;
    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;
    FileExt::unlock(&temp_file).map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e))?;
    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn resolve_missing_file_uses_canonical_parent() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone.txt");
        let canonical = dunce::canonicalize(dir.path()).unwrap();
        assert_eq!(resolve(&missing), canonical.join("gone.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_keeps_symlink_as_itself() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("real.txt");
        fs::write(&target, "real").unwrap();
        let first = dir.path().join("first");
        let second = dir.path().join("second");
        std::os::unix::fs::symlink(&target, &first).unwrap();
        std::os::unix::fs::symlink(&target, &second).unwrap();

        assert!(!same_path(&first, &second));
        assert!(!same_path(&first, &target));
        assert!(same_path(&first, &dir.path().join(".").join("first")));
    }

    #[test]
    fn failed_remove_after_copy_drops_the_copy() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("a.txt");
        let to = dir.path().join("b.txt");
        fs::write(&from, "only once").unwrap();

        let result = copy_then_remove(&from, &to, |path| {
            Err(Error::io(path, std::io::Error::other("busy")))
        });

        assert!(matches!(result, Err(Error::Io { .. })));
        assert_eq!(fs::read_to_string(&from).unwrap(), "only once");
        assert!(!to.exists());
    }

    #[test]
    fn copy_then_remove_completes_move() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("tree");
        fs::create_dir_all(from.join("nested")).unwrap();
        fs::write(from.join("nested/c.txt"), "c").unwrap();
        let to = dir.path().join("moved");

        copy_then_remove(&from, &to, remove_path).unwrap();

        assert!(!from.exists());
        assert_eq!(fs::read_to_string(to.join("nested/c.txt")).unwrap(), "c");
    }

    #[test]
    fn is_within_rejects_sibling_prefix() {
        let dir = tempdir().unwrap();
        let held = dir.path().join("held");
        let sibling = dir.path().join("held-other").join("a.txt");
        fs::create_dir_all(&held).unwrap();
        assert!(!is_within(&sibling, &held));
        assert!(is_within(&held.join("a.txt"), &held));
        assert!(!is_within(&held, &held));
    }
}
