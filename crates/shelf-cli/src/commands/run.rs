//! The `run` command: an interactive session over the event loop

use colored::Colorize;
use shelf_core::{Clipboard, EventLoop, MemoryClipboard, ShelfStore, SystemClipboard};
use shelf_fs::StorageLayout;
use tokio::io::BufReader;
use tracing::{debug, warn};

use crate::error::Result;
use crate::session;

/// Run a session reading commands from stdin.
///
/// Held files stay in storage when the session ends unless
/// `restore_on_exit` is set.
pub fn run_session(layout: &StorageLayout, memory_clipboard: bool, restore_on_exit: bool) -> Result<()> {
    let store = ShelfStore::open(layout)?;
    let clipboard = open_clipboard(memory_clipboard);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut store = runtime.block_on(async {
        let (sender, event_loop) = EventLoop::new(store, clipboard);
        let input = BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        let (store, result) = tokio::join!(
            event_loop.run(),
            session::drive(input, &mut stdout, sender)
        );
        result.map(|()| store)
    })?;

    if restore_on_exit {
        debug!(items = store.len(), "Restoring held files on exit");
        store.clear();
        return Ok(());
    }

    let held = store.items().iter().filter(|item| item.can_restore()).count();
    if held > 0 {
        eprintln!(
            "{} {} held file(s) remain in {}",
            "note:".cyan().bold(),
            held,
            store.storage_dir().display()
        );
    }
    Ok(())
}

fn open_clipboard(memory_clipboard: bool) -> Box<dyn Clipboard> {
    if memory_clipboard {
        return Box::new(MemoryClipboard::new());
    }
    match SystemClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(e) => {
            warn!(error = %e, "System clipboard unavailable, using an in-process clipboard");
            Box::new(MemoryClipboard::new())
        }
    }
}
