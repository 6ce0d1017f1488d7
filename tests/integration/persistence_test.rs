//! History persistence across sessions with file-backed storage.

use paicheco::config::Config;
use paicheco::console::{Console, Direction};
use paicheco::persistence::{FileStorage, Storage};
use tempfile::tempdir;

#[test]
fn test_history_survives_reopen() {
    let dir = tempdir().unwrap();

    let mut console = Console::with_defaults(FileStorage::open(dir.path()).unwrap());
    let lines = ["help", "sum 5 3", "foo", "sum 5 3"];
    for line in lines {
        console.submit(line);
    }
    console.close().unwrap();

    let mut reopened = Console::with_defaults(FileStorage::open(dir.path()).unwrap());
    assert_eq!(reopened.history(), lines);

    reopened.recall(Direction::Previous);
    assert_eq!(reopened.input(), "sum 5 3");
}

#[test]
fn test_history_is_saved_on_every_append() {
    let dir = tempdir().unwrap();
    let mut console = Console::with_defaults(FileStorage::open(dir.path()).unwrap());

    console.submit("time");

    let raw = std::fs::read_to_string(dir.path().join("terminal_history.json")).unwrap();
    assert_eq!(raw, r#"["time"]"#);
}

#[test]
fn test_corrupt_history_file_starts_empty() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("terminal_history.json"), "{broken").unwrap();

    let mut console = Console::with_defaults(FileStorage::open(dir.path()).unwrap());
    assert!(console.history().is_empty());

    console.submit("help");
    let storage = console.close().unwrap();
    assert_eq!(
        storage.get_item("terminal_history").unwrap().as_deref(),
        Some(r#"["help"]"#)
    );
}

#[test]
fn test_configured_storage_key() {
    let dir = tempdir().unwrap();
    let mut config = Config::default();
    config.history.storage_key = "other_history".to_string();

    let mut console = Console::open(FileStorage::open(dir.path()).unwrap(), &config);
    console.submit("clear");
    console.close().unwrap();

    assert!(dir.path().join("other_history.json").exists());
    assert!(!dir.path().join("terminal_history.json").exists());
}
