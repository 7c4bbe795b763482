//! Storage record models.
//!
//! Records are what the JSON file holds. They omit the id, which is the map
//! key in the file, and convert into domain [`Entry`] values on the way out.

use crate::domain::{Entry, EntryId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A journal entry as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    /// Entry text, stored exactly as saved.
    pub content: String,

    /// Creation time, stamped once by the store.
    pub created_at: DateTime<Utc>,
}

impl EntryRecord {
    /// Creates a record stamped with the current time.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Materializes the record as a domain entry.
    #[must_use]
    pub fn to_entry(&self, id: EntryId) -> Entry {
        Entry::new(id, self.content.clone(), self.created_at)
    }
}
