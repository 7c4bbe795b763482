//! Composable UI component renderers.
//!
//! Each screen renders into the body area the renderer hands it; the title
//! bar and footer are shared components.
//!
//! # Components
//!
//! - [`header`]: Title bar with an optional right-aligned note
//! - [`footer`]: Key hints and the compose status line
//! - [`menu`], [`compose`], [`list`], [`detail`], [`confirm`]: one per view

pub mod compose;
pub mod confirm;
pub mod detail;
pub mod footer;
pub mod header;
pub mod list;
pub mod menu;

pub use compose::render_compose;
pub use confirm::render_confirm;
pub use detail::render_detail;
pub use footer::{render_error, render_hints, render_status};
pub use header::render_header;
pub use list::render_list;
pub use menu::render_menu;
