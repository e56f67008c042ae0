use pretty_assertions::assert_eq;
use shelf_fs::{NormalizedPath, io};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_move_path_moves_file() {
    let temp = TempDir::new().unwrap();
    let from = temp.path().join("a.txt");
    let to = temp.path().join("b.txt");
    fs::write(&from, "hello").unwrap();

    io::move_path(&from, &to).unwrap();

    assert!(!from.exists());
    assert_eq!(fs::read_to_string(&to).unwrap(), "hello");
}

#[test]
fn test_move_path_overwrites_existing_file() {
    let temp = TempDir::new().unwrap();
    let from = temp.path().join("new.txt");
    let to = temp.path().join("old.txt");
    fs::write(&from, "new").unwrap();
    fs::write(&to, "old").unwrap();

    io::move_path(&from, &to).unwrap();

    assert_eq!(fs::read_to_string(&to).unwrap(), "new");
}

#[test]
fn test_move_path_overwrites_existing_directory() {
    let temp = TempDir::new().unwrap();
    let from = temp.path().join("incoming");
    let to = temp.path().join("target");
    fs::create_dir_all(&from).unwrap();
    fs::write(from.join("inner.txt"), "inner").unwrap();
    fs::create_dir_all(to.join("stale")).unwrap();

    io::move_path(&from, &to).unwrap();

    assert!(to.join("inner.txt").exists());
    assert!(!to.join("stale").exists());
}

#[test]
fn test_move_path_missing_source_fails() {
    let temp = TempDir::new().unwrap();
    let result = io::move_path(&temp.path().join("nope"), &temp.path().join("dest"));
    assert!(result.is_err());
}

#[test]
fn test_move_path_onto_itself_is_noop() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("same.txt");
    fs::write(&file, "keep").unwrap();

    io::move_path(&file, &file).unwrap();

    assert_eq!(fs::read_to_string(&file).unwrap(), "keep");
}

#[test]
fn test_move_into_keeps_file_name() {
    let temp = TempDir::new().unwrap();
    let from = temp.path().join("report.pdf");
    let dir = temp.path().join("held");
    fs::create_dir_all(&dir).unwrap();
    fs::write(&from, "pdf").unwrap();

    let dest = io::move_into(&from, &dir).unwrap();

    assert_eq!(dest, dir.join("report.pdf"));
    assert!(dest.exists());
}

#[test]
fn test_ensure_parent_creates_missing_directories() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("a").join("b").join("file.txt");

    io::ensure_parent(&nested).unwrap();

    assert!(temp.path().join("a").join("b").is_dir());
}

#[test]
fn test_remove_path_handles_files_and_directories() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("f.txt");
    let dir = temp.path().join("d");
    fs::write(&file, "x").unwrap();
    fs::create_dir_all(dir.join("sub")).unwrap();

    io::remove_path(&file).unwrap();
    io::remove_path(&dir).unwrap();

    assert!(!file.exists());
    assert!(!dir.exists());
}

#[test]
fn test_is_within_detects_nested_paths() {
    let temp = TempDir::new().unwrap();
    let held = temp.path().join("HeldFiles");
    fs::create_dir_all(held.join("nested")).unwrap();

    assert!(io::is_within(&held.join("nested").join("x.txt"), &held));
    assert!(!io::is_within(&temp.path().join("x.txt"), &held));
}

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("test.txt"));

    io::write_atomic(&path, b"hello world").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "hello world");
}

#[test]
fn test_write_text_then_read_text() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("nested").join("note.txt"));

    io::write_text(&path, "scratch").unwrap();

    assert_eq!(io::read_text(&path).unwrap(), "scratch");
}
