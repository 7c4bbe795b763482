//! Session runtime.
//!
//! A [`Session`] owns the application state and the store worker. Dispatching
//! one event runs it through the engine, executes every emitted store request
//! synchronously and feeds each response back in, until nothing is left to do.

use super::handler::{handle_event, Event};
use super::state::AppState;
use crate::app::Action;
use crate::storage::EntryStore;
use crate::worker::StoreWorker;
use std::collections::VecDeque;

/// Whether the session keeps running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Application state paired with the worker that serves its store requests.
pub struct Session<S> {
    state: AppState,
    worker: StoreWorker<S>,
}

impl<S: EntryStore> Session<S> {
    pub fn new(state: AppState, store: S) -> Self {
        Self {
            state,
            worker: StoreWorker::new(store),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// The store behind the worker.
    pub fn store(&self) -> &S {
        self.worker.store()
    }

    /// Processes one input event to completion.
    ///
    /// Quit wins over any queued store work: once the engine asks to quit the
    /// remaining actions are dropped.
    pub fn dispatch(&mut self, event: Event) -> Flow {
        let _span = tracing::debug_span!("dispatch").entered();

        let mut pending = VecDeque::from([event]);
        while let Some(event) = pending.pop_front() {
            let (_render, actions) = handle_event(&mut self.state, &event);

            for action in actions {
                match action {
                    Action::Quit => {
                        tracing::debug!("quit requested");
                        return Flow::Quit;
                    }
                    Action::Store(request) => {
                        let response = self.worker.handle(request);
                        pending.push_back(Event::Store(response));
                    }
                }
            }
        }

        Flow::Continue
    }
}
