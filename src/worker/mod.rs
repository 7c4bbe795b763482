//! Synchronous store worker.
//!
//! The navigation engine never touches storage directly. It emits
//! [`StoreRequest`]s, the worker runs them against an
//! [`EntryStore`](crate::storage::EntryStore) and answers with a
//! [`StoreResponse`] that is fed back into the engine as an event.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types
//! - `handler`: Worker implementation and request processing logic

pub mod handler;
pub mod messages;

pub use handler::StoreWorker;
pub use messages::{StoreFailure, StoreOperation, StoreRequest, StoreResponse};
