//! Actions representing side effects to be executed by the session runtime.
//!
//! The event handler never performs I/O itself. It returns a `Vec<Action>`
//! after processing each event and the [`Session`](crate::app::Session)
//! executes them in order.
//!
//! # Example
//!
//! ```rust
//! use jou::app::Action;
//! use jou::worker::StoreRequest;
//!
//! let actions = vec![Action::Store(StoreRequest::ListAll)];
//! assert!(!actions.contains(&Action::Quit));
//! ```

use crate::worker::StoreRequest;

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Ends the interactive session.
    Quit,

    /// Runs a request against the entry store.
    ///
    /// The response comes back as [`Event::Store`](crate::app::Event::Store).
    Store(StoreRequest),
}
