//! Store request/response protocol.
//!
//! Defines the messages exchanged between the navigation engine and the store
//! worker. Failures travel as plain values so the engine can record them
//! without any error propagation.

use crate::domain::{Entry, EntryId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Requests sent from the engine to the store worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreRequest {
    /// Persist a new entry.
    Create {
        /// Text of the new entry.
        content: String,
    },

    /// Fetch a single entry.
    Read {
        /// Id of the entry to fetch.
        id: EntryId,
    },

    /// Replace the content of an existing entry.
    Update {
        /// Id of the entry to update.
        id: EntryId,

        /// Replacement text.
        content: String,
    },

    /// Remove an entry.
    Delete {
        /// Id of the entry to remove.
        id: EntryId,
    },

    /// Fetch every entry, newest first.
    ListAll,
}

impl StoreRequest {
    /// The operation this request performs.
    #[must_use]
    pub fn operation(&self) -> StoreOperation {
        match self {
            Self::Create { .. } => StoreOperation::Create,
            Self::Read { .. } => StoreOperation::Read,
            Self::Update { .. } => StoreOperation::Update,
            Self::Delete { .. } => StoreOperation::Delete,
            Self::ListAll => StoreOperation::ListAll,
        }
    }
}

/// Responses sent from the store worker back to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreResponse {
    /// An entry was created.
    Created {
        /// Id assigned by the store.
        id: EntryId,
    },

    /// An entry was fetched.
    Fetched {
        /// The stored entry.
        entry: Entry,
    },

    /// An entry was updated.
    Updated {
        /// Id of the updated entry.
        id: EntryId,
    },

    /// An entry was deleted (or was already absent).
    Deleted {
        /// Id of the removed entry.
        id: EntryId,
    },

    /// All entries were listed.
    Listed {
        /// Entries, newest first.
        entries: Vec<Entry>,
    },

    /// The request failed.
    Failed(StoreFailure),
}

/// Store operation kind, used to label failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreOperation {
    Create,
    Read,
    Update,
    Delete,
    ListAll,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Create => "create entry",
            Self::Read => "read entry",
            Self::Update => "update entry",
            Self::Delete => "delete entry",
            Self::ListAll => "list entries",
        };
        f.write_str(name)
    }
}

/// A failed store operation as seen by the engine and the footer.
///
/// ```
/// use jou::worker::{StoreFailure, StoreOperation};
///
/// let failure = StoreFailure::new(StoreOperation::Update, "disk full");
/// assert_eq!(failure.to_string(), "failed to update entry: disk full");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreFailure {
    /// Which operation failed.
    pub operation: StoreOperation,

    /// Human-readable cause.
    pub message: String,
}

impl StoreFailure {
    pub fn new(operation: StoreOperation, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }
}

impl fmt::Display for StoreFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to {}: {}", self.operation, self.message)
    }
}
