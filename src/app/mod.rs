//! Application layer coordinating state, events, and actions.
//!
//! This module holds the navigation state machine and the draft lifecycle. It
//! sits between the terminal loop (main.rs) and the storage/worker layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Key Press → map_key → Event → handle_event → State Mutations → Actions
//!                                    ↑                              ↓
//!                                    └────── Store Responses ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`draft`]: Create-or-update bookkeeping and unsaved-change detection
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`keymap`]: Terminal key to event mapping
//! - [`modes`]: View and menu option types
//! - [`session`]: Synchronous runtime executing actions against a store
//! - [`state`]: Central application state container

pub mod actions;
pub mod draft;
pub mod handler;
pub mod keymap;
pub mod modes;
pub mod session;
pub mod state;

pub use actions::Action;
pub use draft::Draft;
pub use handler::{handle_event, Event};
pub use keymap::map_key;
pub use modes::{MenuOption, View, MENU_OPTIONS};
pub use session::{Flow, Session};
pub use state::AppState;
