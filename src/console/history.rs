//! Submitted-line history with recall navigation.
//!
//! The log is append-only and unbounded. Every append is persisted before
//! it returns; persistence failures are logged and otherwise ignored.

use crate::persistence::{load_history, save_history, Storage};
use tracing::warn;

/// Persisted history log with a recall cursor.
///
/// The cursor lies in `[0, len]`; `len` means a fresh line with nothing
/// recalled.
#[derive(Debug)]
pub struct HistoryLog<S> {
    /// Submitted lines, oldest first.
    entries: Vec<String>,
    /// Recall position.
    cursor: usize,
    storage: S,
    key: String,
}

impl<S: Storage> HistoryLog<S> {
    /// Loads the log stored under `key`; absent or malformed data is empty.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let entries = load_history(&storage, &key);
        let cursor = entries.len();
        Self {
            entries,
            cursor,
            storage,
            key,
        }
    }

    /// Appends a line, persists the log and resets the cursor.
    pub fn append(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.cursor = self.entries.len();
        if let Err(e) = self.flush() {
            warn!("History not saved: {e}");
        }
    }

    /// Moves the cursor one entry back and returns that entry.
    ///
    /// Returns `None` at the oldest entry; the caller keeps its input.
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.entry_at_cursor())
    }

    /// Moves the cursor one entry forward and returns that entry.
    ///
    /// Stepping past the newest entry returns an empty string. Returns `None`
    /// when the cursor is already past the newest entry.
    pub fn recall_next(&mut self) -> Option<&str> {
        if self.cursor >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.entry_at_cursor())
    }

    fn entry_at_cursor(&self) -> &str {
        self.entries
            .get(self.cursor)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Writes the full log to storage.
    pub fn flush(&mut self) -> crate::error::Result<()> {
        save_history(&mut self.storage, &self.key, &self.entries)
    }

    /// Returns the current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all entries (oldest first).
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the log, returning the storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }
}
