//! Error types for the journal.
//!
//! This module defines the centralized error type [`JouError`] and a type alias
//! [`Result`] used by the storage, configuration and presentation layers. The
//! navigation engine never sees these values directly: store failures reach it
//! as plain [`StoreFailure`](crate::worker::StoreFailure) messages.

use crate::domain::EntryId;
use thiserror::Error;

/// The main error type for journal operations.
///
/// Most variants carry a human-readable description. I/O failures wrap the
/// underlying `std::io::Error` via `#[from]` so `?` works on filesystem calls.
///
/// # Examples
///
/// ```
/// use jou::JouError;
///
/// let err = JouError::NotFound(7);
/// assert_eq!(err.to_string(), "no journal entry found with id 7");
/// ```
#[derive(Debug, Error)]
pub enum JouError {
    /// Reading or writing the entry store failed.
    ///
    /// Covers malformed store files and serialization failures.
    #[error("Storage error: {0}")]
    Storage(String),

    /// No entry exists with the requested id.
    #[error("no journal entry found with id {0}")]
    NotFound(EntryId),

    /// Filesystem or terminal I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is missing, unreadable or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A theme could not be parsed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for journal operations.
pub type Result<T> = std::result::Result<T, JouError>;
