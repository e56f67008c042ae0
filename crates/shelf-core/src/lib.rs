//! Core of the Shelf utility
//!
//! This crate holds everything that is not platform UI:
//!
//! - **Item store**: ordered shelf items with move-in/restore-on-delete
//!   file semantics ([`ShelfStore`])
//! - **Clipboard**: a [`Clipboard`] trait with a system backend and an
//!   in-memory double
//! - **Event queue**: a single-consumer loop that applies UI events to the
//!   store ([`EventLoop`])
//! - **Settings** and **hotkey** parsing as explicitly constructed services
//!
//! ```text
//!   drop / paste / delete / drag-out  (any thread)
//!                 |
//!            EventSender
//!                 |   mpsc
//!            EventLoop  --->  ShelfStore  --->  shelf-fs
//!                 |
//!             Clipboard
//! ```

pub mod clipboard;
pub mod error;
pub mod events;
pub mod hotkey;
pub mod item;
pub mod settings;
pub mod store;

pub use clipboard::{Clipboard, ClipboardContent, MemoryClipboard, SystemClipboard};
pub use error::{Error, Result};
pub use events::{DropPayload, EventLoop, EventSender, ShelfEvent, ShelfSnapshot};
pub use hotkey::{Hotkey, Modifier};
pub use item::{ItemKind, ShelfContent, ShelfImage, ShelfItem};
pub use settings::{Layout, Settings, SettingsService};
pub use store::{AddOutcome, Disposal, ShelfStore, SkipReason};
