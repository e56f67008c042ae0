//! Single-consumer event queue
//!
//! UI callbacks (drops, paste, delete, drag-out) may complete on any
//! thread. They never touch the store directly: each one sends a
//! [`ShelfEvent`] through an [`EventSender`], and one [`EventLoop`] applies
//! events to the store in arrival order.

use std::ops::ControlFlow;
use std::path::PathBuf;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::clipboard::Clipboard;
use crate::item::{ShelfImage, ShelfItem};
use crate::store::ShelfStore;
use crate::{Error, Result};

/// One dropped payload from a drag session.
#[derive(Debug, Clone, PartialEq)]
pub enum DropPayload {
    File(PathBuf),
    Image(ShelfImage),
    Text(String),
}

/// A request to change or inspect the shelf.
#[derive(Debug)]
pub enum ShelfEvent {
    /// Items dropped onto the shelf; files are moved into storage
    Drop(Vec<DropPayload>),
    AddText(String),
    AddFile { path: PathBuf, move_to_shelf: bool },
    /// Add from the system clipboard
    Paste,
    /// Copy an item to the clipboard
    Copy(Uuid),
    /// Delete an item, restoring its file
    Delete(Uuid),
    /// An item was dragged out and moved elsewhere; forget it
    DraggedOut(Uuid),
    MoveOut {
        id: Uuid,
        destination: PathBuf,
        reply: oneshot::Sender<bool>,
    },
    Clear,
    SetNotepad(String),
    TogglePanel,
    Snapshot(oneshot::Sender<ShelfSnapshot>),
    /// The newest `limit` items and how many more follow them
    Recent {
        limit: usize,
        reply: oneshot::Sender<(Vec<ShelfItem>, usize)>,
    },
    Shutdown,
}

/// A point-in-time copy of the shelf for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfSnapshot {
    pub items: Vec<ShelfItem>,
    pub notepad: String,
    pub panel_visible: bool,
}

/// Cloneable handle for sending events to the loop.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<ShelfEvent>,
}

impl EventSender {
    pub fn send(&self, event: ShelfEvent) -> Result<()> {
        self.tx.send(event).map_err(|_| Error::QueueClosed)
    }

    /// Ask the loop for a snapshot and wait for it.
    pub async fn snapshot(&self) -> Result<ShelfSnapshot> {
        let (reply, response) = oneshot::channel();
        self.send(ShelfEvent::Snapshot(reply))?;
        response.await.map_err(|_| Error::QueueClosed)
    }

    /// The newest `limit` items plus the count of the rest.
    pub async fn recent(&self, limit: usize) -> Result<(Vec<ShelfItem>, usize)> {
        let (reply, response) = oneshot::channel();
        self.send(ShelfEvent::Recent { limit, reply })?;
        response.await.map_err(|_| Error::QueueClosed)
    }

    /// Move an item out and wait for the result.
    pub async fn move_out(&self, id: Uuid, destination: impl Into<PathBuf>) -> Result<bool> {
        let (reply, response) = oneshot::channel();
        self.send(ShelfEvent::MoveOut {
            id,
            destination: destination.into(),
            reply,
        })?;
        response.await.map_err(|_| Error::QueueClosed)
    }
}

/// Owns the store and applies events to it one at a time.
pub struct EventLoop<C> {
    store: ShelfStore,
    clipboard: C,
    rx: mpsc::UnboundedReceiver<ShelfEvent>,
    panel_visible: bool,
}

impl<C: Clipboard> EventLoop<C> {
    /// Create a loop and the sender feeding it.
    pub fn new(store: ShelfStore, clipboard: C) -> (EventSender, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_loop = Self {
            store,
            clipboard,
            rx,
            panel_visible: false,
        };
        (EventSender { tx }, event_loop)
    }

    pub fn store(&self) -> &ShelfStore {
        &self.store
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    /// Process events until `Shutdown` arrives or every sender is dropped.
    ///
    /// Returns the store so the caller decides what happens to held files.
    pub async fn run(mut self) -> ShelfStore {
        info!(storage = %self.store.storage_dir().display(), "Shelf event loop started");
        while let Some(event) = self.rx.recv().await {
            if self.apply(event).is_break() {
                break;
            }
        }
        info!(items = self.store.len(), "Shelf event loop stopped");
        self.store
    }

    /// Apply a single event.
    pub fn apply(&mut self, event: ShelfEvent) -> ControlFlow<()> {
        match event {
            ShelfEvent::Drop(payloads) => {
                for payload in payloads {
                    match payload {
                        DropPayload::File(path) => {
                            self.store.add_file(&path, true, Some(path.clone()));
                        }
                        DropPayload::Image(image) => {
                            self.store.add_image(image);
                        }
                        DropPayload::Text(text) => {
                            self.store.add_text(text);
                        }
                    }
                }
            }
            ShelfEvent::AddText(text) => {
                self.store.add_text(text);
            }
            ShelfEvent::AddFile { path, move_to_shelf } => {
                let outcome = self.store.add_file(&path, move_to_shelf, None);
                debug!(path = %path.display(), ?outcome, "Add file");
            }
            ShelfEvent::Paste => {
                let added = self.store.add_from_clipboard(&mut self.clipboard);
                debug!(count = added.len(), "Pasted from clipboard");
            }
            ShelfEvent::Copy(id) => {
                if let Err(e) = self.store.copy_to_clipboard(id, &mut self.clipboard) {
                    warn!(%id, error = %e, "Copy to clipboard failed");
                }
            }
            ShelfEvent::Delete(id) => {
                if self.store.delete(id).is_none() {
                    debug!(%id, "Delete ignored, item not on shelf");
                }
            }
            ShelfEvent::DraggedOut(id) => {
                self.store.remove(id);
            }
            ShelfEvent::MoveOut {
                id,
                destination,
                reply,
            } => {
                let moved = self.store.move_out(id, &destination);
                // The requester may have stopped waiting.
                let _ = reply.send(moved);
            }
            ShelfEvent::Clear => self.store.clear(),
            ShelfEvent::SetNotepad(text) => self.store.set_notepad(text),
            ShelfEvent::TogglePanel => {
                self.panel_visible = !self.panel_visible;
                debug!(visible = self.panel_visible, "Toggled panel");
            }
            ShelfEvent::Snapshot(reply) => {
                let _ = reply.send(self.snapshot());
            }
            ShelfEvent::Recent { limit, reply } => {
                let (shown, more) = self.store.recent(limit);
                let _ = reply.send((shown.to_vec(), more));
            }
            ShelfEvent::Shutdown => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    pub fn snapshot(&self) -> ShelfSnapshot {
        ShelfSnapshot {
            items: self.store.items().to_vec(),
            notepad: self.store.notepad().to_string(),
            panel_visible: self.panel_visible,
        }
    }
}
