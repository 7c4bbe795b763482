//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single mutable snapshot of the
//! interactive session. It is created once at startup, mutated only by
//! [`handle_event`](crate::app::handle_event) and read by the renderer.
//!
//! # State Components
//!
//! - **View**: the active screen, the only router for input
//! - **Cursors**: menu position and list position, each clamped to its list
//! - **Loaded Entries**: snapshot taken when a list view is entered
//! - **Draft**: editor buffer plus create-or-update bookkeeping
//! - **Viewing**: entry shown in the detail view and its scroll offset
//! - **Last Error**: most recent store failure, shown in the footer
//!
//! # Example
//!
//! ```rust
//! use jou::app::{AppState, View};
//! use jou::ui::Theme;
//!
//! let state = AppState::new(Theme::default(), "%-d %b, %Y");
//! assert_eq!(state.view, View::Menu);
//! assert_eq!(state.draft.target(), None);
//! ```

use super::draft::Draft;
use super::modes::{MenuOption, View, MENU_OPTIONS};
use crate::domain::Entry;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ComposeStatus, DetailInfo, ListRow};
use crate::worker::StoreFailure;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Active screen.
    pub view: View,

    /// Highlighted index into [`MENU_OPTIONS`].
    ///
    /// Reset to 0 whenever the menu is left.
    pub menu_cursor: usize,

    /// Highlighted index into `loaded_entries`.
    ///
    /// Reset to 0 on every transition into a list view and whenever a new
    /// snapshot arrives.
    pub list_cursor: usize,

    /// Entries fetched when a list view was last entered, newest first.
    pub loaded_entries: Vec<Entry>,

    /// Text being composed or edited.
    pub draft: Draft,

    /// Entry open in the detail view.
    pub viewing: Option<Entry>,

    /// First visible line of the detail body.
    pub detail_scroll: u16,

    /// Most recent store failure.
    ///
    /// Cleared only when a new save or list load starts.
    pub last_error: Option<StoreFailure>,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// chrono format string used for entry dates.
    pub date_format: String,
}

impl AppState {
    /// Creates the startup state: menu view, empty untargeted draft.
    #[must_use]
    pub fn new(theme: Theme, date_format: impl Into<String>) -> Self {
        Self {
            view: View::Menu,
            menu_cursor: 0,
            list_cursor: 0,
            loaded_entries: Vec::new(),
            draft: Draft::new(),
            viewing: None,
            detail_scroll: 0,
            last_error: None,
            theme,
            date_format: date_format.into(),
        }
    }

    /// Switches views, resetting the menu cursor when leaving the menu.
    pub fn enter_view(&mut self, view: View) {
        tracing::debug!(from = ?self.view, to = ?view, "view transition");
        if self.view == View::Menu && view != View::Menu {
            self.menu_cursor = 0;
        }
        self.view = view;
    }

    /// Menu option under the cursor.
    #[must_use]
    pub fn selected_option(&self) -> Option<MenuOption> {
        MENU_OPTIONS.get(self.menu_cursor).copied()
    }

    /// Entry under the list cursor, if the cursor is inside the snapshot.
    #[must_use]
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.loaded_entries.get(self.list_cursor)
    }

    pub fn move_menu_up(&mut self) {
        self.menu_cursor = self.menu_cursor.saturating_sub(1);
    }

    pub fn move_menu_down(&mut self) {
        self.menu_cursor = clamped_next(self.menu_cursor, MENU_OPTIONS.len());
    }

    pub fn move_list_up(&mut self) {
        self.list_cursor = self.list_cursor.saturating_sub(1);
    }

    pub fn move_list_down(&mut self) {
        self.list_cursor = clamped_next(self.list_cursor, self.loaded_entries.len());
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    /// Scrolls the detail body down, stopping at its last line.
    pub fn scroll_detail_down(&mut self) {
        let max = self
            .viewing
            .as_ref()
            .map_or(0, |entry| line_count(&entry.content).saturating_sub(1));
        if self.detail_scroll < max {
            self.detail_scroll += 1;
        }
    }

    /// Save indicator, entry id and error line for the compose footer.
    #[must_use]
    pub fn compute_compose_status(&self) -> ComposeStatus {
        let date = self.draft.persisted().map_or_else(
            || chrono::Local::now().format(&self.date_format).to_string(),
            |entry| entry.created_on(&self.date_format),
        );

        ComposeStatus {
            date,
            unsaved: self.draft.has_unsaved_changes(),
            entry_id: self.draft.target(),
            error: self.last_error.as_ref().map(ToString::to_string),
        }
    }

    /// Rows for the list views, one per loaded entry.
    #[must_use]
    pub fn compute_list_rows(&self) -> Vec<ListRow> {
        self.loaded_entries
            .iter()
            .map(|entry| ListRow {
                title: entry.created_on(&self.date_format),
                description: entry.preview().to_string(),
            })
            .collect()
    }

    /// Header and scroll position for the detail view.
    #[must_use]
    pub fn compute_detail(&self) -> Option<DetailInfo> {
        self.viewing.as_ref().map(|entry| {
            let total = line_count(&entry.content);
            let percent = if total <= 1 {
                100
            } else {
                let last = u32::from(total - 1);
                (u32::from(self.detail_scroll.min(total - 1)) * 100 / last) as u8
            };

            DetailInfo {
                date: entry.created_on(&self.date_format),
                body: entry.content.clone(),
                scroll: self.detail_scroll,
                scroll_percent: percent,
            }
        })
    }
}

const fn clamped_next(cursor: usize, len: usize) -> usize {
    if cursor + 1 < len {
        cursor + 1
    } else {
        cursor
    }
}

fn line_count(text: &str) -> u16 {
    u16::try_from(text.lines().count().max(1)).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn state() -> AppState {
        AppState::new(Theme::default(), "%Y-%m-%d")
    }

    #[test]
    fn menu_cursor_stays_within_options() {
        let mut state = state();
        state.move_menu_up();
        assert_eq!(state.menu_cursor, 0);

        for _ in 0..10 {
            state.move_menu_down();
        }
        assert_eq!(state.menu_cursor, MENU_OPTIONS.len() - 1);
    }

    #[test]
    fn list_cursor_does_not_move_on_empty_snapshot() {
        let mut state = state();
        state.move_list_down();
        assert_eq!(state.list_cursor, 0);
        assert!(state.selected_entry().is_none());
    }

    #[test]
    fn leaving_menu_resets_menu_cursor() {
        let mut state = state();
        state.menu_cursor = 2;
        state.enter_view(View::EditPick);
        assert_eq!(state.menu_cursor, 0);
    }

    #[test]
    fn detail_scroll_stops_at_last_line() {
        let mut state = state();
        state.viewing = Some(Entry::new(1, "a\nb\nc", Utc::now()));

        for _ in 0..5 {
            state.scroll_detail_down();
        }
        assert_eq!(state.detail_scroll, 2);
        assert_eq!(state.compute_detail().map(|d| d.scroll_percent), Some(100));

        state.scroll_detail_up();
        assert_eq!(state.compute_detail().map(|d| d.scroll_percent), Some(50));
    }

    #[test]
    fn compose_status_reports_error_text() {
        let mut state = state();
        state.last_error = Some(StoreFailure::new(
            crate::worker::StoreOperation::Create,
            "disk full",
        ));

        let status = state.compute_compose_status();
        assert!(status.unsaved);
        assert_eq!(status.entry_id, None);
        assert_eq!(status.error.as_deref(), Some("failed to create entry: disk full"));
    }
}
