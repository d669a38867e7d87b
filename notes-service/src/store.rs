//! NoteStore: in-memory, insertion-ordered note list.
//!
//! Notes live for the lifetime of the process. Ids are millisecond
//! timestamps generated under the write lock and never reused.

use crate::error::{NotesError, Result};
use chrono::Utc;
use notes_types::Note;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

struct Inner {
    notes: Vec<Note>,
    last_id: i64,
}

pub struct NoteStore {
    inner: RwLock<Inner>,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                notes: Vec::new(),
                last_id: i64::MIN,
            }),
        }
    }

    /// Append a new note and return it. Empty text is accepted.
    pub fn create(&self, text: impl Into<String>) -> Note {
        let mut inner = self.write();

        let id = next_id(inner.last_id, Utc::now().timestamp_millis());
        inner.last_id = id;

        let note = Note {
            id: id.to_string(),
            text: text.into(),
        };
        inner.notes.push(note.clone());

        log::debug!("[NOTES] Created note {} ({} total)", note.id, inner.notes.len());
        note
    }

    /// All notes in insertion order
    pub fn list(&self) -> Vec<Note> {
        self.read().notes.clone()
    }

    pub fn get(&self, id: &str) -> Result<Note> {
        self.read()
            .notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or(NotesError::NotFound)
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        let mut inner = self.write();
        let pos = inner
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or(NotesError::NotFound)?;
        inner.notes.remove(pos);

        log::debug!("[NOTES] Deleted note {} ({} left)", id, inner.notes.len());
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.read().notes.len()
    }

    // A panic while holding the lock cannot leave `Inner` half-updated,
    // so poisoned guards are safe to reuse.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

/// Millisecond timestamp, bumped past the previous id when the clock has
/// not moved on or has gone backwards.
fn next_id(last_id: i64, now_millis: i64) -> i64 {
    now_millis.max(last_id + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_create_then_list() {
        let store = NoteStore::new();
        let note = store.create("Buy milk");

        assert!(!note.id.is_empty());
        assert_eq!(note.text, "Buy milk");
        assert_eq!(store.list(), vec![note]);
    }

    #[test]
    fn test_list_empty_store() {
        let store = NoteStore::new();
        assert!(store.list().is_empty());
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = NoteStore::new();
        let a = store.create("first");
        let b = store.create("second");
        let c = store.create("third");

        let ids: Vec<String> = store.list().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
    }

    #[test]
    fn test_empty_text_is_accepted() {
        let store = NoteStore::new();
        let note = store.create("");
        assert_eq!(store.get(&note.id).unwrap().text, "");
    }

    #[test]
    fn test_ids_are_unique_within_same_millisecond() {
        let store = NoteStore::new();
        let ids: HashSet<String> = (0..500).map(|i| store.create(i.to_string()).id).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_ids_are_timestamps() {
        let before = Utc::now().timestamp_millis();
        let store = NoteStore::new();
        let id: i64 = store.create("x").id.parse().expect("numeric id");
        let after = Utc::now().timestamp_millis();
        assert!(id >= before && id <= after);
    }

    #[test]
    fn test_next_id_follows_clock() {
        assert_eq!(next_id(0, 1_700_000_000_000), 1_700_000_000_000);
        assert_eq!(next_id(1_700_000_000_000, 1_700_000_000_005), 1_700_000_000_005);
    }

    #[test]
    fn test_next_id_never_repeats_when_clock_stalls_or_rewinds() {
        assert_eq!(next_id(1_700_000_000_000, 1_700_000_000_000), 1_700_000_000_001);
        assert_eq!(next_id(1_700_000_000_000, 1_600_000_000_000), 1_700_000_000_001);
        // Pre-epoch clock readings keep their real value instead of collapsing to zero.
        assert_eq!(next_id(i64::MIN + 1, -5_000), -5_000);
    }

    #[test]
    fn test_concurrent_creates_do_not_collide() {
        let store = Arc::new(NoteStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    (0..100).map(|_| store.create("n").id).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for h in handles {
            ids.extend(h.join().unwrap());
        }
        assert_eq!(ids.len(), 800);
        assert_eq!(store.count(), 800);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let store = NoteStore::new();
        store.create("present");
        assert!(matches!(store.get("nope"), Err(NotesError::NotFound)));
    }

    #[test]
    fn test_delete_then_delete_again() {
        let store = NoteStore::new();
        let note = store.create("Buy milk");

        store.delete(&note.id).expect("first delete");
        assert!(store.list().is_empty());
        assert!(matches!(store.delete(&note.id), Err(NotesError::NotFound)));
    }

    #[test]
    fn test_delete_nonexistent_leaves_store_untouched() {
        let store = NoteStore::new();
        let a = store.create("a");
        let b = store.create("b");

        assert!(matches!(store.delete("12345"), Err(NotesError::NotFound)));
        assert_eq!(store.list(), vec![a, b]);
    }

    #[test]
    fn test_delete_keeps_order_of_remaining() {
        let store = NoteStore::new();
        let a = store.create("a");
        let b = store.create("b");
        let c = store.create("c");

        store.delete(&b.id).unwrap();
        assert_eq!(store.list(), vec![a, c]);
    }
}
