//! Store worker implementation.
//!
//! Executes one [`StoreRequest`] at a time against the wrapped store and turns
//! every outcome, success or failure, into a [`StoreResponse`].

use crate::domain::error::Result;
use crate::storage::backend::EntryStore;
use crate::worker::{StoreFailure, StoreOperation, StoreRequest, StoreResponse};

/// Runs store requests synchronously.
pub struct StoreWorker<S> {
    store: S,
}

impl<S: EntryStore> StoreWorker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read access to the wrapped store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Helper for handling store results with consistent logging.
    ///
    /// Converts errors into [`StoreResponse::Failed`] so nothing past this point
    /// has to deal with a `Result`.
    fn handle_store_result<T, F>(operation: StoreOperation, result: Result<T>, on_success: F) -> StoreResponse
    where
        F: FnOnce(T) -> StoreResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(%operation, "store operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(%operation, error = %e, "store operation failed");
                StoreResponse::Failed(StoreFailure::new(operation, e.to_string()))
            }
        }
    }

    /// Processes a request and returns the matching response.
    pub fn handle(&mut self, request: StoreRequest) -> StoreResponse {
        let operation = request.operation();
        let _span = tracing::debug_span!("worker_handle_request", %operation).entered();

        match request {
            StoreRequest::Create { content } => Self::handle_store_result(
                operation,
                self.store.create(&content),
                |id| StoreResponse::Created { id },
            ),

            StoreRequest::Read { id } => Self::handle_store_result(
                operation,
                self.store.read(id),
                |entry| StoreResponse::Fetched { entry },
            ),

            StoreRequest::Update { id, content } => Self::handle_store_result(
                operation,
                self.store.update(id, &content),
                |id| StoreResponse::Updated { id },
            ),

            StoreRequest::Delete { id } => Self::handle_store_result(
                operation,
                self.store.delete(id),
                |id| StoreResponse::Deleted { id },
            ),

            StoreRequest::ListAll => Self::handle_store_result(
                operation,
                self.store.list_all(),
                |entries| {
                    tracing::debug!(count = entries.len(), "entries listed");
                    StoreResponse::Listed { entries }
                },
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn create_answers_with_new_id() {
        let mut worker = StoreWorker::new(MemoryStore::new());
        let response = worker.handle(StoreRequest::Create {
            content: "hello".into(),
        });
        assert_eq!(response, StoreResponse::Created { id: 1 });
    }

    #[test]
    fn missing_entry_becomes_failed_response() {
        let mut worker = StoreWorker::new(MemoryStore::new());
        let response = worker.handle(StoreRequest::Update {
            id: 3,
            content: "x".into(),
        });

        match response {
            StoreResponse::Failed(failure) => {
                assert_eq!(failure.operation, StoreOperation::Update);
                assert!(failure.message.contains('3'));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn delete_of_absent_entry_succeeds() {
        let mut worker = StoreWorker::new(MemoryStore::new());
        assert_eq!(
            worker.handle(StoreRequest::Delete { id: 8 }),
            StoreResponse::Deleted { id: 8 }
        );
    }
}
