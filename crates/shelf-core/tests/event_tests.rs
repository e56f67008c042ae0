//! Tests for the single-consumer event loop

use pretty_assertions::assert_eq;
use shelf_core::{
    ClipboardContent, DropPayload, EventLoop, MemoryClipboard, ShelfContent, ShelfEvent,
    ShelfStore,
};
use shelf_test_utils::TestShelf;

fn event_loop(shelf: &TestShelf) -> (shelf_core::EventSender, EventLoop<MemoryClipboard>) {
    let store = ShelfStore::new(shelf.storage_dir()).unwrap();
    EventLoop::new(store, MemoryClipboard::with(ClipboardContent::Text("pasted".into())))
}

#[tokio::test]
async fn test_drop_moves_files_and_adds_text() {
    let shelf = TestShelf::new();
    let file = shelf.create_file("dropped.txt", "d");
    let (sender, event_loop) = event_loop(&shelf);

    sender
        .send(ShelfEvent::Drop(vec![
            DropPayload::File(file.clone()),
            DropPayload::Text("note".into()),
        ]))
        .unwrap();
    sender.send(ShelfEvent::Shutdown).unwrap();
    let store = event_loop.run().await;

    assert_eq!(store.len(), 2);
    assert_eq!(store.items()[0].content(), &ShelfContent::Text("note".into()));
    assert_eq!(store.items()[1].source_path(), Some(file.as_path()));
    shelf.assert_missing(&file);
    shelf.assert_file_contents(&shelf.held_path("dropped.txt"), "d");
}

#[tokio::test]
async fn test_events_are_applied_in_order() {
    let shelf = TestShelf::new();
    let (sender, event_loop) = event_loop(&shelf);
    let handle = tokio::spawn(event_loop.run());

    sender.send(ShelfEvent::AddText("one".into())).unwrap();
    sender.send(ShelfEvent::Paste).unwrap();
    sender.send(ShelfEvent::SetNotepad("scratch".into())).unwrap();
    sender.send(ShelfEvent::TogglePanel).unwrap();
    let snapshot = sender.snapshot().await.unwrap();

    let names: Vec<_> = snapshot.items.iter().map(|item| item.display_name()).collect();
    assert_eq!(names, vec!["pasted", "one"]);
    assert_eq!(snapshot.notepad, "scratch");
    assert!(snapshot.panel_visible);

    sender.send(ShelfEvent::Shutdown).unwrap();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_senders_on_other_threads_feed_one_consumer() {
    let shelf = TestShelf::new();
    let (sender, event_loop) = event_loop(&shelf);

    let threads: Vec<_> = (0..4)
        .map(|i| {
            let sender = sender.clone();
            std::thread::spawn(move || {
                sender.send(ShelfEvent::AddText(format!("from {i}"))).unwrap();
            })
        })
        .collect();
    for thread in threads {
        thread.join().unwrap();
    }
    drop(sender);

    let store = event_loop.run().await;
    assert_eq!(store.len(), 4);
}

#[tokio::test]
async fn test_move_out_replies_with_result() {
    let shelf = TestShelf::new();
    let file = shelf.create_file("a.txt", "a");
    let destination = shelf.create_dir("dest");
    let (sender, event_loop) = event_loop(&shelf);
    let handle = tokio::spawn(event_loop.run());

    sender.send(ShelfEvent::Drop(vec![DropPayload::File(file)])).unwrap();
    let id = sender.snapshot().await.unwrap().items[0].id();

    assert!(sender.move_out(id, &destination).await.unwrap());
    assert!(!sender.move_out(id, &destination).await.unwrap());
    shelf.assert_file_contents(&destination.join("a.txt"), "a");

    sender.send(ShelfEvent::Shutdown).unwrap();
    let store = handle.await.unwrap();
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_delete_and_dragged_out() {
    let shelf = TestShelf::new();
    let restored = shelf.create_file("restore.txt", "r");
    let dragged = shelf.create_file("dragged.txt", "g");
    let (sender, event_loop) = event_loop(&shelf);
    let handle = tokio::spawn(event_loop.run());

    sender
        .send(ShelfEvent::Drop(vec![
            DropPayload::File(restored.clone()),
            DropPayload::File(dragged.clone()),
        ]))
        .unwrap();
    let items = sender.snapshot().await.unwrap().items;
    sender.send(ShelfEvent::DraggedOut(items[0].id())).unwrap();
    sender.send(ShelfEvent::Delete(items[1].id())).unwrap();
    sender.send(ShelfEvent::Shutdown).unwrap();
    let store = handle.await.unwrap();

    assert!(store.is_empty());
    shelf.assert_file_contents(&restored, "r");
    // Drag-out only forgets the item; the held file stays for the drop target.
    shelf.assert_file_contents(&shelf.held_path("dragged.txt"), "g");
}

#[tokio::test]
async fn test_send_after_shutdown_fails() {
    let shelf = TestShelf::new();
    let (sender, event_loop) = event_loop(&shelf);

    sender.send(ShelfEvent::Shutdown).unwrap();
    event_loop.run().await;

    assert!(matches!(
        sender.send(ShelfEvent::Clear),
        Err(shelf_core::Error::QueueClosed)
    ));
}

#[tokio::test]
async fn test_copy_event_writes_clipboard() {
    let shelf = TestShelf::new();
    let store = ShelfStore::new(shelf.storage_dir()).unwrap();
    let (sender, mut event_loop) = EventLoop::new(store, MemoryClipboard::new());

    let _ = event_loop.apply(ShelfEvent::AddText("copy me".into()));
    let id = event_loop.store().items()[0].id();
    let _ = event_loop.apply(ShelfEvent::Copy(id));

    drop(sender);
    assert_eq!(
        event_loop.clipboard().content(),
        Some(&ClipboardContent::Text("copy me".into()))
    );
    assert_eq!(event_loop.snapshot().items.len(), 1);
}

#[tokio::test]
async fn test_recent_reports_hidden_count() {
    let shelf = TestShelf::new();
    let (sender, event_loop) = event_loop(&shelf);
    let handle = tokio::spawn(event_loop.run());

    for i in 0..7 {
        sender.send(ShelfEvent::AddText(format!("item {i}"))).unwrap();
    }
    let (shown, more) = sender.recent(5).await.unwrap();

    assert_eq!(shown.len(), 5);
    assert_eq!(shown[0].display_name(), "item 6");
    assert_eq!(more, 2);

    sender.send(ShelfEvent::Shutdown).unwrap();
    handle.await.unwrap();
}
