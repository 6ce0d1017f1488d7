//! History log persistence.
//!
//! The log is stored as a JSON array of strings in chronological order.
//! Loading never fails: absent, unreadable or malformed data is an empty log.

use super::Storage;
use crate::error::{ConsoleError, Result};
use tracing::warn;

/// Loads the history log stored under `key`.
pub fn load_history<S: Storage + ?Sized>(storage: &S, key: &str) -> Vec<String> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("History unavailable, starting empty: {e}");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Discarding malformed history under '{key}': {e}");
            Vec::new()
        }
    }
}

/// Saves the full history log under `key`.
pub fn save_history<S: Storage + ?Sized>(
    storage: &mut S,
    key: &str,
    entries: &[String],
) -> Result<()> {
    let raw = serde_json::to_string(entries)
        .map_err(|e| ConsoleError::internal(format!("Failed to serialize history: {e}")))?;
    storage.set_item(key, &raw)
}
