//! Domain layer: journal entries and the crate error type.
//!
//! Nothing in here knows about the terminal, the store file format or the
//! navigation engine.
//!
//! - [`entry`]: the [`Entry`] record and its id type
//! - [`error`]: [`JouError`] and the [`Result`] alias

pub mod entry;
pub mod error;

pub use entry::{Entry, EntryId};
pub use error::{JouError, Result};
