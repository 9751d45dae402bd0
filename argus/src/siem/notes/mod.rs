// argus/src/siem/notes/mod.rs
//!
//! Per-record investigation notes in a simple key-value store.
//!
//! Notes are keyed by the record's stable id and live entirely outside the
//! query engine; this is the presentation side's storage collaborator.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use sled::{Config, Db};

/// Storage contract for investigation notes.
pub trait NoteStore: Send + Sync {
    fn save_note(&self, record_id: &str, text: &str) -> Result<(), String>;
    fn load_note(&self, record_id: &str) -> Option<String>;
    fn delete_note(&self, record_id: &str) -> Result<(), String>;
}

/// Sled-backed persistent note store.
#[derive(Debug, Clone)]
pub struct SledNoteStore {
    db: Arc<Mutex<Db>>,
}

impl SledNoteStore {
    /// Open or create the store at `path`, falling back to a temporary
    /// database when the path cannot be opened.
    pub fn open(path: &Path) -> Self {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }

        let db = Config::new()
            .path(path)
            .flush_every_ms(Some(5000))
            .open()
            .unwrap_or_else(|e| {
                log::warn!("Failed to open note storage, using temporary: {}", e);
                Config::new().temporary(true).open().unwrap()
            });

        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }

    /// Throwaway store for tests.
    pub fn temporary() -> Self {
        let db = Config::new().temporary(true).open().unwrap();
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }
}

impl NoteStore for SledNoteStore {
    fn save_note(&self, record_id: &str, text: &str) -> Result<(), String> {
        let db = self.db.lock().unwrap_or_else(|e| e.into_inner());
        let tree = db.open_tree(b"notes").map_err(|e| e.to_string())?;
        tree.insert(record_id.as_bytes(), text.as_bytes())
            .map_err(|e| e.to_string())?;
        Ok(())
    }

    fn load_note(&self, record_id: &str) -> Option<String> {
        let db = self.db.lock().unwrap_or_else(|e| e.into_inner());
        let tree = db.open_tree(b"notes").ok()?;
        let value = tree.get(record_id.as_bytes()).ok()??;
        String::from_utf8(value.to_vec()).ok()
    }

    fn delete_note(&self, record_id: &str) -> Result<(), String> {
        let db = self.db.lock().unwrap_or_else(|e| e.into_inner());
        let tree = db.open_tree(b"notes").map_err(|e| e.to_string())?;
        tree.remove(record_id.as_bytes()).map_err(|e| e.to_string())?;
        Ok(())
    }
}

/// In-memory note store for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryNoteStore {
    notes: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoteStore for MemoryNoteStore {
    fn save_note(&self, record_id: &str, text: &str) -> Result<(), String> {
        let mut notes = self.notes.lock().unwrap_or_else(|e| e.into_inner());
        notes.insert(record_id.to_string(), text.to_string());
        Ok(())
    }

    fn load_note(&self, record_id: &str) -> Option<String> {
        self.notes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(record_id)
            .cloned()
    }

    fn delete_note(&self, record_id: &str) -> Result<(), String> {
        let mut notes = self.notes.lock().unwrap_or_else(|e| e.into_inner());
        notes.remove(record_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_note_store() {
        let store = MemoryNoteStore::new();

        store.save_note("rec-1", "looks like a scan").unwrap();
        assert_eq!(store.load_note("rec-1").as_deref(), Some("looks like a scan"));
        assert!(store.load_note("rec-2").is_none());

        store.save_note("rec-1", "confirmed benign").unwrap();
        assert_eq!(store.load_note("rec-1").as_deref(), Some("confirmed benign"));

        store.delete_note("rec-1").unwrap();
        assert!(store.load_note("rec-1").is_none());
    }

    #[test]
    fn test_sled_note_store_round_trip() {
        let store = SledNoteStore::temporary();

        store.save_note("rec-9", "escalated to tier 2").unwrap();
        assert_eq!(
            store.load_note("rec-9").as_deref(),
            Some("escalated to tier 2")
        );

        store.delete_note("rec-9").unwrap();
        assert!(store.load_note("rec-9").is_none());
    }

    #[test]
    fn test_notes_keyed_per_record() {
        let store = MemoryNoteStore::new();
        store.save_note("a", "note a").unwrap();
        store.save_note("b", "note b").unwrap();

        assert_eq!(store.load_note("a").as_deref(), Some("note a"));
        assert_eq!(store.load_note("b").as_deref(), Some("note b"));
    }
}
