//! Entry store abstraction.
//!
//! This module defines the [`EntryStore`] trait that the store worker drives.
//! Implementations are swapped without touching the navigation engine, which
//! only ever speaks in [`StoreRequest`](crate::worker::StoreRequest) values.
//!
//! Every method is fallible and atomic on its own: a failed call leaves the
//! store as it was.

use crate::domain::error::Result;
use crate::domain::{Entry, EntryId};

/// Durable CRUD over journal entries keyed by an integer id.
///
/// # Implementations
///
/// - [`JsonStore`](crate::storage::JsonStore): JSON file with atomic writes (default)
/// - [`MemoryStore`](crate::storage::MemoryStore): in-process, used by tests and demos
///
/// # Examples
///
/// ```
/// use jou::storage::{EntryStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// let id = store.create("first light")?;
/// assert_eq!(store.read(id)?.content, "first light");
/// # Ok::<(), jou::JouError>(())
/// ```
pub trait EntryStore: Send {
    /// Persists a new entry and returns its freshly assigned id.
    ///
    /// The creation timestamp is stamped by the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn create(&mut self, content: &str) -> Result<EntryId>;

    /// Retrieves a single entry.
    ///
    /// # Errors
    ///
    /// Returns [`JouError::NotFound`](crate::JouError::NotFound) if no entry has
    /// this id, or an error if the read fails.
    fn read(&self, id: EntryId) -> Result<Entry>;

    /// Replaces the content of an existing entry, keeping its creation time.
    ///
    /// # Errors
    ///
    /// Returns [`JouError::NotFound`](crate::JouError::NotFound) if no entry has
    /// this id, or an error if the write fails.
    fn update(&mut self, id: EntryId, content: &str) -> Result<EntryId>;

    /// Removes an entry. Deleting an id that does not exist succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn delete(&mut self, id: EntryId) -> Result<EntryId>;

    /// Returns every entry, newest first by creation time.
    ///
    /// Entries created in the same instant are ordered by descending id.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn list_all(&self) -> Result<Vec<Entry>>;
}

impl<S: EntryStore + ?Sized> EntryStore for Box<S> {
    fn create(&mut self, content: &str) -> Result<EntryId> {
        (**self).create(content)
    }

    fn read(&self, id: EntryId) -> Result<Entry> {
        (**self).read(id)
    }

    fn update(&mut self, id: EntryId, content: &str) -> Result<EntryId> {
        (**self).update(id, content)
    }

    fn delete(&mut self, id: EntryId) -> Result<EntryId> {
        (**self).delete(id)
    }

    fn list_all(&self) -> Result<Vec<Entry>> {
        (**self).list_all()
    }
}

/// Sorts entries newest first, breaking timestamp ties by descending id.
pub fn sort_newest_first(entries: &mut [Entry]) {
    entries.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}
