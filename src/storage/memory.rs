//! In-memory entry store.
//!
//! Holds entries in a map for the lifetime of the value. Used by the test
//! suite and handy for driving a [`Session`](crate::app::Session) without a
//! file on disk.

use crate::domain::error::{JouError, Result};
use crate::domain::{Entry, EntryId};
use crate::storage::backend::{sort_newest_first, EntryStore};
use chrono::Utc;
use std::collections::BTreeMap;

/// Entry store that never touches the filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<EntryId, Entry>,
    last_id: EntryId,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with existing entries, keeping their ids and timestamps.
    ///
    /// New entries get ids above the largest seeded one.
    #[must_use]
    pub fn with_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut store = Self::new();
        for entry in entries {
            store.last_id = store.last_id.max(entry.id);
            store.entries.insert(entry.id, entry);
        }
        store
    }
}

impl EntryStore for MemoryStore {
    fn create(&mut self, content: &str) -> Result<EntryId> {
        self.last_id += 1;
        let id = self.last_id;
        self.entries.insert(id, Entry::new(id, content, Utc::now()));
        Ok(id)
    }

    fn read(&self, id: EntryId) -> Result<Entry> {
        self.entries.get(&id).cloned().ok_or(JouError::NotFound(id))
    }

    fn update(&mut self, id: EntryId, content: &str) -> Result<EntryId> {
        let entry = self.entries.get_mut(&id).ok_or(JouError::NotFound(id))?;
        entry.content = content.to_string();
        Ok(id)
    }

    fn delete(&mut self, id: EntryId) -> Result<EntryId> {
        self.entries.remove(&id);
        Ok(id)
    }

    fn list_all(&self) -> Result<Vec<Entry>> {
        let mut entries: Vec<Entry> = self.entries.values().cloned().collect();
        sort_newest_first(&mut entries);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn seeded_entries_keep_ids_and_new_ids_follow() {
        let at = Utc.with_ymd_and_hms(2023, 6, 1, 9, 0, 0).unwrap();
        let mut store = MemoryStore::with_entries([Entry::new(5, "old", at)]);

        assert_eq!(store.create("new").unwrap(), 6);
        assert_eq!(store.read(5).unwrap().content, "old");
    }

    #[test]
    fn list_all_orders_ties_by_descending_id() {
        let at = Utc.with_ymd_and_hms(2023, 6, 1, 9, 0, 0).unwrap();
        let store = MemoryStore::with_entries([
            Entry::new(1, "A", at),
            Entry::new(2, "B", at),
        ]);

        let ids: Vec<EntryId> = store.list_all().unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
