//! Error types for shelf-core

use uuid::Uuid;

/// Result type for shelf-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in shelf-core operations
///
/// Store mutations never fail on filesystem problems; they log and fall
/// back. These errors cover lookups, the clipboard, settings and the queue.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No item with the given id is on the shelf
    #[error("Item not found: {id}")]
    ItemNotFound { id: Uuid },

    /// The system clipboard could not be opened
    #[error("Clipboard unavailable: {message}")]
    ClipboardUnavailable { message: String },

    /// Writing to the clipboard failed
    #[error("Clipboard write failed: {message}")]
    ClipboardWrite { message: String },

    /// A hotkey chord could not be parsed
    #[error("Invalid hotkey '{chord}': {reason}")]
    InvalidHotkey { chord: String, reason: String },

    /// Unknown layout name
    #[error("Invalid layout '{0}' (expected horizontal, grid or list)")]
    InvalidLayout(String),

    /// The event loop has shut down
    #[error("Shelf event queue is closed")]
    QueueClosed,

    /// Filesystem error from shelf-fs
    #[error(transparent)]
    Fs(#[from] shelf_fs::Error),
}
