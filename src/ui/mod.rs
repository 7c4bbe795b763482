//! User interface rendering layer with component-based architecture.
//!
//! Renders [`AppState`](crate::app::AppState) into a ratatui frame. State is
//! read-only here; everything displayed is derived through small view models.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_* → view models → components → ratatui Frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Per-view and shared component renderers
//! - [`theme`]: Color scheme definitions
//! - [`terminal`]: Terminal setup and teardown
//! - [`listing`]: Plain-text output for `jou show`

pub mod components;
pub mod listing;
pub mod renderer;
pub mod terminal;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{ComposeStatus, DetailInfo, ListRow};
