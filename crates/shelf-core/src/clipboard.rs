//! Clipboard access
//!
//! The store talks to the clipboard through the [`Clipboard`] trait.
//! [`SystemClipboard`] uses `arboard`; [`MemoryClipboard`] keeps content in
//! process for tests and headless sessions.

use std::borrow::Cow;
use std::path::PathBuf;

use crate::item::ShelfImage;
use crate::{Error, Result};

/// Content in one of the clipboard representations the shelf understands.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipboardContent {
    Files(Vec<PathBuf>),
    Image(ShelfImage),
    Text(String),
}

/// Read and write access to a clipboard.
pub trait Clipboard {
    /// File references on the clipboard, if any.
    fn read_files(&mut self) -> Option<Vec<PathBuf>>;

    fn read_image(&mut self) -> Option<ShelfImage>;

    /// Non-empty text on the clipboard, if any.
    fn read_text(&mut self) -> Option<String>;

    /// Replace the clipboard content.
    fn write(&mut self, content: &ClipboardContent) -> Result<()>;

    /// Read the highest-priority content: files, then image, then text.
    fn read(&mut self) -> Option<ClipboardContent> {
        if let Some(files) = self.read_files().filter(|files| !files.is_empty()) {
            return Some(ClipboardContent::Files(files));
        }
        if let Some(image) = self.read_image() {
            return Some(ClipboardContent::Image(image));
        }
        self.read_text()
            .filter(|text| !text.is_empty())
            .map(ClipboardContent::Text)
    }
}

impl<T: Clipboard + ?Sized> Clipboard for Box<T> {
    fn read_files(&mut self) -> Option<Vec<PathBuf>> {
        (**self).read_files()
    }

    fn read_image(&mut self) -> Option<ShelfImage> {
        (**self).read_image()
    }

    fn read_text(&mut self) -> Option<String> {
        (**self).read_text()
    }

    fn write(&mut self, content: &ClipboardContent) -> Result<()> {
        (**self).write(content)
    }
}

/// The operating system clipboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new().map_err(|e| Error::ClipboardUnavailable {
            message: e.to_string(),
        })?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn read_files(&mut self) -> Option<Vec<PathBuf>> {
        self.inner.get().file_list().ok()
    }

    fn read_image(&mut self) -> Option<ShelfImage> {
        let image = self.inner.get_image().ok()?;
        Some(ShelfImage::from_rgba(
            image.width,
            image.height,
            image.bytes.into_owned(),
        ))
    }

    fn read_text(&mut self) -> Option<String> {
        self.inner.get_text().ok().filter(|text| !text.is_empty())
    }

    fn write(&mut self, content: &ClipboardContent) -> Result<()> {
        let result = match content {
            ClipboardContent::Text(text) => self.inner.set_text(text.as_str()),
            ClipboardContent::Image(image) => self.inner.set_image(arboard::ImageData {
                width: image.width(),
                height: image.height(),
                bytes: Cow::Borrowed(image.rgba()),
            }),
            // arboard cannot set file lists portably; paths go out as text.
            ClipboardContent::Files(paths) => {
                let listing = paths
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect::<Vec<_>>()
                    .join("\n");
                self.inner.set_text(listing)
            }
        };
        result.map_err(|e| Error::ClipboardWrite {
            message: e.to_string(),
        })
    }
}

/// An in-process clipboard.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    content: Option<ClipboardContent>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard pre-loaded with `content`.
    pub fn with(content: ClipboardContent) -> Self {
        Self {
            content: Some(content),
        }
    }

    pub fn content(&self) -> Option<&ClipboardContent> {
        self.content.as_ref()
    }
}

impl Clipboard for MemoryClipboard {
    fn read_files(&mut self) -> Option<Vec<PathBuf>> {
        match &self.content {
            Some(ClipboardContent::Files(paths)) => Some(paths.clone()),
            _ => None,
        }
    }

    fn read_image(&mut self) -> Option<ShelfImage> {
        match &self.content {
            Some(ClipboardContent::Image(image)) => Some(image.clone()),
            _ => None,
        }
    }

    fn read_text(&mut self) -> Option<String> {
        match &self.content {
            Some(ClipboardContent::Text(text)) if !text.is_empty() => Some(text.clone()),
            _ => None,
        }
    }

    fn write(&mut self, content: &ClipboardContent) -> Result<()> {
        self.content = Some(content.clone());
        Ok(())
    }
}
