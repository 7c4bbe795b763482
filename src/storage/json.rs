//! JSON file-based entry store.
//!
//! The whole journal lives in one human-readable JSON document that is loaded
//! into memory on open and rewritten atomically (write-to-temp + rename) after
//! every mutation, so a crash never leaves a half-written file behind.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) lookups against the in-memory map
//! - **Write**: O(n), the full document is serialized per mutation
//! - **Best for**: personal journals of a few thousand entries

use crate::domain::error::{JouError, Result};
use crate::domain::{Entry, EntryId};
use crate::storage::backend::{sort_newest_first, EntryStore};
use crate::storage::models::EntryRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// Top-level document serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JournalData {
    /// Format version for future migrations.
    version: u32,

    /// Id handed to the next created entry. Ids are never reused.
    next_id: EntryId,

    /// Entries keyed by id.
    #[serde(default)]
    entries: BTreeMap<EntryId, EntryRecord>,
}

impl Default for JournalData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            next_id: 1,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file entry store.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "next_id": 3,
///   "entries": {
///     "1": { "content": "so today was a great day", "created_at": "2024-05-01T08:30:00Z" },
///     "2": { "content": "rain again", "created_at": "2024-05-02T21:10:00Z" }
///   }
/// }
/// ```
pub struct JsonStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy of the document.
    data: JournalData,
}

impl JsonStore {
    /// Opens the store at `file_path`, creating parent directories as needed.
    ///
    /// A missing file starts an empty journal; nothing is written until the
    /// first mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but cannot be read
    /// - The file contains invalid JSON
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use jou::storage::JsonStore;
    ///
    /// let store = JsonStore::open("/tmp/journal.json")?;
    /// # Ok::<(), jou::JouError>(())
    /// ```
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        tracing::debug!(path = ?file_path, "opening JSON store");

        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no journal file yet, starting empty");
            JournalData::default()
        };

        tracing::debug!(
            entry_count = data.entries.len(),
            next_id = data.next_id,
            "store opened"
        );

        Ok(Self { file_path, data })
    }

    fn load_from_file(path: &Path) -> Result<JournalData> {
        let contents = std::fs::read_to_string(path)?;
        let data: JournalData = serde_json::from_str(&contents).map_err(|e| {
            JouError::Storage(format!("failed to parse {}: {e}", path.display()))
        })?;

        if data.version > FORMAT_VERSION {
            return Err(JouError::Storage(format!(
                "unsupported journal format version {}",
                data.version
            )));
        }

        Ok(data)
    }

    /// Writes the document to disk through a temporary file and a rename.
    fn write_to_file(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| JouError::Storage(format!("failed to serialize journal: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!(path = ?self.file_path, "journal saved");
        Ok(())
    }

    /// Applies a mutation and persists it, restoring the previous document if
    /// the write fails so the store stays consistent with the file.
    fn commit<T>(&mut self, mutate: impl FnOnce(&mut JournalData) -> Result<T>) -> Result<T> {
        let snapshot = self.data.clone();
        let value = mutate(&mut self.data)?;

        if let Err(e) = self.write_to_file() {
            tracing::warn!(error = %e, "write failed, rolling back in-memory journal");
            self.data = snapshot;
            return Err(e);
        }

        Ok(value)
    }
}

impl EntryStore for JsonStore {
    fn create(&mut self, content: &str) -> Result<EntryId> {
        let _span = tracing::debug_span!("json_create", content_len = content.len()).entered();

        let id = self.commit(|data| {
            let id = data.next_id;
            data.entries.insert(id, EntryRecord::new(content));
            data.next_id = id.saturating_add(1);
            Ok(id)
        })?;

        tracing::debug!(entry_id = id, "entry created");
        Ok(id)
    }

    fn read(&self, id: EntryId) -> Result<Entry> {
        let _span = tracing::debug_span!("json_read", entry_id = id).entered();

        self.data
            .entries
            .get(&id)
            .map(|record| record.to_entry(id))
            .ok_or(JouError::NotFound(id))
    }

    fn update(&mut self, id: EntryId, content: &str) -> Result<EntryId> {
        let _span = tracing::debug_span!("json_update", entry_id = id).entered();

        self.commit(|data| {
            let record = data.entries.get_mut(&id).ok_or(JouError::NotFound(id))?;
            record.content = content.to_string();
            Ok(id)
        })?;

        tracing::debug!("entry updated");
        Ok(id)
    }

    fn delete(&mut self, id: EntryId) -> Result<EntryId> {
        let _span = tracing::debug_span!("json_delete", entry_id = id).entered();

        if !self.data.entries.contains_key(&id) {
            tracing::debug!("entry already absent");
            return Ok(id);
        }

        self.commit(|data| {
            data.entries.remove(&id);
            Ok(id)
        })
    }

    fn list_all(&self) -> Result<Vec<Entry>> {
        let _span = tracing::debug_span!("json_list_all").entered();

        let mut entries: Vec<Entry> = self
            .data
            .entries
            .iter()
            .map(|(id, record)| record.to_entry(*id))
            .collect();
        sort_newest_first(&mut entries);

        tracing::debug!(count = entries.len(), "listed entries");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonStore {
        JsonStore::open(dir.path().join("journal.json")).unwrap()
    }

    #[test]
    fn create_then_read_round_trips_through_disk() {
        let dir = TempDir::new().unwrap();
        let id = {
            let mut store = store_in(&dir);
            store.create("so today was a great day for me").unwrap()
        };

        let reopened = store_in(&dir);
        let entry = reopened.read(id).unwrap();
        assert_eq!(entry.id, 1);
        assert_eq!(entry.content, "so today was a great day for me");
    }

    #[test]
    fn update_keeps_creation_time() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let id = store.create("draft").unwrap();
        let before = store.read(id).unwrap();

        assert_eq!(store.update(id, "final").unwrap(), id);

        let after = store.read(id).unwrap();
        assert_eq!(after.content, "final");
        assert_eq!(after.created_at, before.created_at);
    }

    #[test]
    fn update_and_read_of_missing_id_fail_with_not_found() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        assert!(matches!(store.update(42, "x"), Err(JouError::NotFound(42))));
        assert!(matches!(store.read(42), Err(JouError::NotFound(42))));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let first = store.create("a").unwrap();
        store.delete(first).unwrap();

        let second = store.create("b").unwrap();
        assert_eq!(second, first + 1);
        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn deleting_absent_entry_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        assert_eq!(store.delete(9).unwrap(), 9);
    }

    #[test]
    fn list_all_is_newest_first() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let a = store.create("older").unwrap();
        let b = store.create("newer").unwrap();

        let ids: Vec<EntryId> = store.list_all().unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![b, a]);
    }

    #[test]
    fn every_mutation_is_on_disk_while_store_is_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("journal.json");
        let mut store = JsonStore::open(&path).unwrap();

        let id = store.create("first").unwrap();
        store.update(id, "second").unwrap();

        let on_disk = JsonStore::open(&path).unwrap();
        assert_eq!(on_disk.read(id).unwrap().content, "second");
    }

    #[test]
    fn failed_write_leaves_store_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("journal.json");
        let mut store = JsonStore::open(&path).unwrap();
        std::fs::create_dir(path.with_extension("tmp")).unwrap();

        assert!(store.create("lost").is_err());
        assert!(store.list_all().unwrap().is_empty());
        assert!(!path.exists());

        std::fs::remove_dir(path.with_extension("tmp")).unwrap();
        assert_eq!(store.create("kept").unwrap(), 1);
    }

    #[test]
    fn corrupt_file_fails_to_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("journal.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(JsonStore::open(&path), Err(JouError::Storage(_))));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("journal.json");
        let mut store = JsonStore::open(&path).unwrap();
        store.create("hello").unwrap();
        assert!(path.exists());
    }
}
