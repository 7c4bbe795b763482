//! Storage layer for persistent journal entries.
//!
//! # Modules
//!
//! - `backend`: the [`EntryStore`] trait every backend implements
//! - `json`: JSON file storage with atomic writes (the default backend)
//! - `memory`: in-process storage for tests and demos
//! - `models`: on-disk record types separate from domain models

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::{sort_newest_first, EntryStore};
pub use json::JsonStore;
pub use memory::MemoryStore;
pub use models::EntryRecord;
