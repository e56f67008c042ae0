//! The shelf item store
//!
//! Keeps the ordered list of items (newest first) and the notepad text, and
//! keeps the held-files directory consistent with what is on the shelf.
//!
//! Filesystem work is best-effort. A failed move or restore is logged and
//! the store falls back to the safest outcome it can reach; the item list
//! always reflects what actually happened on disk.

use std::fs;
use std::path::{Path, PathBuf};

use shelf_fs::{StorageLayout, io};
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::clipboard::{Clipboard, ClipboardContent};
use crate::item::{ShelfContent, ShelfImage, ShelfItem};
use crate::{Error, Result};

/// Why `add_file` declined to add anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// A file item with the same path or file name is already held
    AlreadyShelved,
    /// The path is already inside shelf storage
    InStorage,
}

/// Result of [`ShelfStore::add_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The file now lives in shelf storage
    Moved(Uuid),
    /// The file is referenced where it is
    Referenced(Uuid),
    /// The move failed; the file is referenced where it is but keeps its
    /// source path
    MoveFailed(Uuid),
    Skipped(SkipReason),
}

impl AddOutcome {
    /// Id of the added item, if one was added.
    pub fn id(&self) -> Option<Uuid> {
        match self {
            Self::Moved(id) | Self::Referenced(id) | Self::MoveFailed(id) => Some(*id),
            Self::Skipped(_) => None,
        }
    }
}

/// What [`ShelfStore::delete`] did with an item's file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposal {
    /// The file was moved back to its source path
    Restored(PathBuf),
    /// Restoring failed; the shelf copy was discarded instead
    RestoreFailed,
    /// A held file without a source was removed from shelf storage
    Discarded,
    /// A referenced file outside shelf storage was left alone
    LeftInPlace,
    /// The item was not a file
    NotAFile,
}

/// Ordered shelf contents plus the notepad.
#[derive(Debug)]
pub struct ShelfStore {
    items: Vec<ShelfItem>,
    notepad: String,
    storage_dir: PathBuf,
}

impl ShelfStore {
    /// Create an empty store holding files in `storage_dir`.
    ///
    /// The directory is created if missing.
    pub fn new(storage_dir: impl Into<PathBuf>) -> Result<Self> {
        let storage_dir = storage_dir.into();
        fs::create_dir_all(&storage_dir).map_err(|e| shelf_fs::Error::io(&storage_dir, e))?;
        Ok(Self {
            items: Vec::new(),
            notepad: String::new(),
            storage_dir,
        })
    }

    /// Create an empty store using a resolved storage layout.
    pub fn open(layout: &StorageLayout) -> Result<Self> {
        layout.ensure()?;
        Self::new(layout.held_files())
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// All items, newest first.
    pub fn items(&self) -> &[ShelfItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&ShelfItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// The newest `limit` items and how many more follow them.
    pub fn recent(&self, limit: usize) -> (&[ShelfItem], usize) {
        let shown = limit.min(self.items.len());
        (&self.items[..shown], self.items.len() - shown)
    }

    pub fn notepad(&self) -> &str {
        &self.notepad
    }

    pub fn set_notepad(&mut self, text: impl Into<String>) {
        self.notepad = text.into();
    }

    /// Put an item at the front of the shelf.
    pub fn add(&mut self, item: ShelfItem) -> Uuid {
        let id = item.id();
        debug!(%id, kind = item.kind().label(), "Adding item to shelf");
        self.items.insert(0, item);
        id
    }

    pub fn add_text(&mut self, text: impl Into<String>) -> Uuid {
        self.add(ShelfItem::text(text))
    }

    pub fn add_image(&mut self, image: ShelfImage) -> Uuid {
        self.add(ShelfItem::image(image))
    }

    /// Add a file, optionally moving it into shelf storage.
    ///
    /// Files already on the shelf (same path or same file name) and files
    /// already inside shelf storage are skipped. A moved file records
    /// `source_path`, defaulting to `path`, so deleting the item can put it
    /// back. If the move fails the file is referenced in place instead.
    pub fn add_file(
        &mut self,
        path: &Path,
        move_to_shelf: bool,
        source_path: Option<PathBuf>,
    ) -> AddOutcome {
        if self.holds_file_like(path) {
            debug!(path = %path.display(), "File already on shelf, skipping");
            return AddOutcome::Skipped(SkipReason::AlreadyShelved);
        }
        if io::is_within(path, &self.storage_dir) {
            debug!(path = %path.display(), "File already in shelf storage, skipping");
            return AddOutcome::Skipped(SkipReason::InStorage);
        }

        if !move_to_shelf {
            return AddOutcome::Referenced(self.add(ShelfItem::file(path)));
        }

        let source = source_path.unwrap_or_else(|| path.to_path_buf());
        match io::move_into(path, &self.storage_dir) {
            Ok(held) => AddOutcome::Moved(self.add(ShelfItem::file(held).with_source_path(source))),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to move file to shelf, referencing it in place");
                AddOutcome::MoveFailed(self.add(ShelfItem::file(path).with_source_path(source)))
            }
        }
    }

    /// Drop an item from the shelf without touching the filesystem.
    pub fn remove(&mut self, id: Uuid) -> Option<ShelfItem> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    /// Drop the item at `index` without touching the filesystem.
    pub fn remove_at(&mut self, index: usize) -> Option<ShelfItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Delete an item, putting its file back where it came from.
    ///
    /// Files with a source path are restored there, replacing anything at
    /// that path. If that fails the shelf copy is removed. Files without a
    /// source are removed only when they live in shelf storage. The item is
    /// always removed from the shelf. Returns `None` for an unknown id.
    pub fn delete(&mut self, id: Uuid) -> Option<Disposal> {
        let index = self.position(id)?;
        let item = &self.items[index];

        let disposal = match (item.content(), item.source_path()) {
            (ShelfContent::File(current), Some(source)) => self.restore(current, source),
            (ShelfContent::File(current), None) if self.in_storage(current) => {
                if let Err(e) = io::remove_path(current) {
                    warn!(path = %current.display(), error = %e, "Failed to remove held file");
                }
                Disposal::Discarded
            }
            (ShelfContent::File(_), None) => Disposal::LeftInPlace,
            (ShelfContent::Text(_) | ShelfContent::Image(_), _) => Disposal::NotAFile,
        };

        self.items.remove(index);
        debug!(%id, ?disposal, "Deleted item");
        Some(disposal)
    }

    /// Move a file item out to `destination_dir` and drop it from the shelf.
    ///
    /// Returns `false` and keeps the item if nothing would leave the shelf:
    /// non-file items, failed moves, and destinations that are shelf
    /// storage or the directory the file already sits in.
    pub fn move_out(&mut self, id: Uuid, destination_dir: &Path) -> bool {
        let Some(current) = self.get(id).and_then(ShelfItem::file_path) else {
            return false;
        };

        let into_storage = io::same_path(destination_dir, &self.storage_dir)
            || io::is_within(destination_dir, &self.storage_dir);
        let into_own_dir = current
            .parent()
            .is_some_and(|parent| io::same_path(parent, destination_dir));
        if into_storage || into_own_dir {
            warn!(%id, destination = %destination_dir.display(), "Destination is shelf storage or the file's own directory, not moving");
            return false;
        }

        match io::move_into(current, destination_dir) {
            Ok(dest) => {
                debug!(%id, dest = %dest.display(), "Moved item out of shelf");
                self.remove(id);
                true
            }
            Err(e) => {
                warn!(%id, destination = %destination_dir.display(), error = %e, "Failed to move file out of shelf");
                false
            }
        }
    }

    /// Restore every restorable file, then empty the shelf and the notepad.
    ///
    /// Restores are best-effort; a file that cannot go back stays in
    /// shelf storage.
    pub fn clear(&mut self) {
        for item in &self.items {
            if let (ShelfContent::File(current), Some(source)) = (item.content(), item.source_path())
            {
                let restored = io::ensure_parent(source).and_then(|()| io::move_path(current, source));
                if let Err(e) = restored {
                    debug!(path = %current.display(), error = %e, "Could not restore file while clearing");
                }
            }
        }
        self.items.clear();
        self.notepad.clear();
    }

    /// Add whatever the clipboard holds.
    ///
    /// File references win over images, images over text. Pasted files are
    /// referenced, never moved. Returns the ids of added items.
    pub fn add_from_clipboard(&mut self, clipboard: &mut dyn Clipboard) -> Vec<Uuid> {
        match clipboard.read() {
            Some(ClipboardContent::Files(paths)) => paths
                .iter()
                .filter_map(|path| self.add_file(path, false, None).id())
                .collect(),
            Some(ClipboardContent::Image(image)) => vec![self.add_image(image)],
            Some(ClipboardContent::Text(text)) => vec![self.add_text(text)],
            None => Vec::new(),
        }
    }

    /// Put an item's content on the clipboard.
    pub fn copy_to_clipboard(&self, id: Uuid, clipboard: &mut dyn Clipboard) -> Result<()> {
        let item = self.get(id).ok_or(Error::ItemNotFound { id })?;
        let content = match item.content() {
            ShelfContent::Text(text) => ClipboardContent::Text(text.clone()),
            ShelfContent::Image(image) => ClipboardContent::Image(image.clone()),
            ShelfContent::File(path) => ClipboardContent::Files(vec![path.clone()]),
        };
        clipboard.write(&content)
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn in_storage(&self, path: &Path) -> bool {
        io::is_within(path, &self.storage_dir)
    }

    /// Storage is flat, so a matching file name would collide on move-in.
    fn holds_file_like(&self, path: &Path) -> bool {
        let name = path.file_name();
        self.items.iter().filter_map(ShelfItem::file_path).any(|held| {
            held == path || (name.is_some() && held.file_name() == name)
        })
    }

    fn restore(&self, current: &Path, source: &Path) -> Disposal {
        let restored = io::ensure_parent(source).and_then(|()| io::move_path(current, source));
        match restored {
            Ok(()) => Disposal::Restored(source.to_path_buf()),
            Err(e) => {
                error!(path = %current.display(), source = %source.display(), error = %e, "Failed to restore file, discarding shelf copy");
                if self.in_storage(current)
                    && let Err(e) = io::remove_path(current)
                {
                    warn!(path = %current.display(), error = %e, "Failed to remove held file");
                }
                Disposal::RestoreFailed
            }
        }
    }
}
