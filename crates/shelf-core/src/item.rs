//! Shelf item types
//!
//! An item is one thing held on the shelf: a text snippet, an image, or a
//! reference to a file. File items that were moved into shelf storage
//! remember where they came from so they can be put back.

use chrono::{DateTime, Utc};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

/// Number of characters of a text item shown as its display name.
const TEXT_PREVIEW_CHARS: usize = 30;

/// An opaque RGBA8 bitmap.
///
/// Clones share the underlying pixels. Equality is identity: two images
/// are equal only when they share the same bitmap.
#[derive(Clone)]
pub struct ShelfImage {
    width: usize,
    height: usize,
    rgba: Arc<[u8]>,
}

impl ShelfImage {
    pub fn from_rgba(width: usize, height: usize, rgba: impl Into<Arc<[u8]>>) -> Self {
        Self {
            width,
            height,
            rgba: rgba.into(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}

impl PartialEq for ShelfImage {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.rgba, &other.rgba)
    }
}

impl fmt::Debug for ShelfImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShelfImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

/// What an item holds.
#[derive(Debug, Clone, PartialEq)]
pub enum ShelfContent {
    Text(String),
    Image(ShelfImage),
    /// A file or directory, either in shelf storage or referenced in place
    File(PathBuf),
}

/// Coarse item category, used for icons and listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Text,
    Image,
    File,
    Folder,
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::File => "file",
            Self::Folder => "folder",
        }
    }
}

/// A single item on the shelf.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfItem {
    id: Uuid,
    created_at: DateTime<Utc>,
    content: ShelfContent,
    /// Original location of a file moved into shelf storage
    source_path: Option<PathBuf>,
}

impl ShelfItem {
    /// Create an item with a fresh id and the current time.
    pub fn new(content: ShelfContent) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            content,
            source_path: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(ShelfContent::Text(text.into()))
    }

    pub fn image(image: ShelfImage) -> Self {
        Self::new(ShelfContent::Image(image))
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(ShelfContent::File(path.into()))
    }

    /// Record where a moved-in file should be restored to.
    pub fn with_source_path(mut self, source: impl Into<PathBuf>) -> Self {
        self.source_path = Some(source.into());
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn content(&self) -> &ShelfContent {
        &self.content
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// The file path for file items.
    pub fn file_path(&self) -> Option<&Path> {
        match &self.content {
            ShelfContent::File(path) => Some(path),
            ShelfContent::Text(_) | ShelfContent::Image(_) => None,
        }
    }

    /// Whether deleting this item puts a file back somewhere.
    pub fn can_restore(&self) -> bool {
        self.source_path.is_some()
    }

    pub fn kind(&self) -> ItemKind {
        match &self.content {
            ShelfContent::Text(_) => ItemKind::Text,
            ShelfContent::Image(_) => ItemKind::Image,
            ShelfContent::File(path) if path.is_dir() => ItemKind::Folder,
            ShelfContent::File(_) => ItemKind::File,
        }
    }

    /// Short human-readable name.
    pub fn display_name(&self) -> String {
        match &self.content {
            ShelfContent::Text(text) => {
                let preview: String = text.chars().take(TEXT_PREVIEW_CHARS).collect();
                if preview.len() < text.len() {
                    format!("{preview}...")
                } else {
                    preview
                }
            }
            ShelfContent::Image(_) => "Image".to_string(),
            ShelfContent::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }
}
