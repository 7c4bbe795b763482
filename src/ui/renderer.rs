//! Top-level rendering coordinator.
//!
//! Splits the frame into title bar, body and footer and delegates the body to
//! the component for the active view. Rendering never mutates state.
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Title                          note  │  header
//! ├──────────────────────────────────────┤
//! │                                      │
//! │ view body                            │
//! │                                      │
//! ├──────────────────────────────────────┤
//! │ status / key hints                   │  footer
//! └──────────────────────────────────────┘
//! ```

use crate::app::{AppState, View};
use crate::ui::components;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

const MENU_HINTS: &str = " ↑/k up • ↓/j down • enter select • ctrl+c quit";
const COMPOSE_HINTS: &str = " ctrl+s save • esc unfocus • ctrl+c exit";
const COMPOSE_HINTS_WIDTH: u16 = 42;
const LIST_HINTS: &str = " ↑/k up • ↓/j down • enter open • backspace back • ctrl+c quit";
const EDIT_PICK_HINTS: &str = " ↑/k up • ↓/j down • enter edit • backspace back • ctrl+c quit";
const DETAIL_HINTS: &str = " ↑/↓ scroll • backspace back • ctrl+c quit";

/// Draws the active view.
pub fn render(state: &AppState, frame: &mut Frame) {
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let [header_area, _gap] = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(header_area);
    let theme = &state.theme;

    match state.view {
        View::Menu => {
            components::render_header(frame, header_area, state.view.title(), None, theme);
            components::render_menu(frame, body_area, state);
            render_footer(frame, footer_area, state, MENU_HINTS);
        }
        View::Compose => {
            let status = state.compute_compose_status();
            components::render_header(frame, header_area, state.view.title(), Some(&status.date), theme);
            components::render_compose(frame, body_area, state);

            let [status_area, hints_area] =
                Layout::horizontal([Constraint::Min(0), Constraint::Length(COMPOSE_HINTS_WIDTH)])
                    .areas(footer_area);
            components::render_status(frame, status_area, &status, theme);
            components::render_hints(frame, hints_area, COMPOSE_HINTS, theme);
        }
        View::List | View::EditPick => {
            components::render_header(frame, header_area, state.view.title(), None, theme);
            components::render_list(frame, body_area, state);
            let hints = if state.view == View::List {
                LIST_HINTS
            } else {
                EDIT_PICK_HINTS
            };
            render_footer(frame, footer_area, state, hints);
        }
        View::Detail => {
            let date = state.compute_detail().map(|detail| detail.date);
            components::render_header(frame, header_area, state.view.title(), date.as_deref(), theme);
            components::render_detail(frame, body_area, state);
            render_footer(frame, footer_area, state, DETAIL_HINTS);
        }
        View::ConfirmDiscard => {
            components::render_header(frame, header_area, state.view.title(), None, theme);
            components::render_confirm(frame, body_area, state);
            render_footer(frame, footer_area, state, "");
        }
    }
}

/// Key hints, replaced by the last store failure while one is recorded.
fn render_footer(frame: &mut Frame, area: Rect, state: &AppState, hints: &str) {
    match &state.last_error {
        Some(error) => components::render_error(frame, area, &error.to_string(), &state.theme),
        None => components::render_hints(frame, area, hints, &state.theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entry;
    use crate::ui::Theme;
    use crate::worker::{StoreFailure, StoreOperation};
    use chrono::Utc;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        terminal.draw(|frame| render(state, frame)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn menu_lists_options_with_cursor() {
        let mut state = AppState::new(Theme::default(), "%Y-%m-%d");
        state.menu_cursor = 1;

        let screen = draw(&state);
        assert!(screen.contains("CLJour"));
        assert!(screen.contains("   New entry"));
        assert!(screen.contains(" > Read entries"));
    }

    #[test]
    fn compose_shows_unsaved_indicator() {
        let mut state = AppState::new(Theme::default(), "%Y-%m-%d");
        state.view = View::Compose;

        assert!(draw(&state).contains("● Unsaved changes"));
    }

    #[test]
    fn list_shows_entry_preview() {
        let mut state = AppState::new(Theme::default(), "%Y-%m-%d");
        state.view = View::List;
        state.loaded_entries = vec![Entry::new(1, "walked the dog", Utc::now())];

        assert!(draw(&state).contains("walked the dog"));
    }

    #[test]
    fn store_failure_is_shown_outside_compose() {
        let mut state = AppState::new(Theme::default(), "%Y-%m-%d");
        state.last_error = Some(StoreFailure::new(StoreOperation::Create, "disk full"));

        state.view = View::ConfirmDiscard;
        assert!(draw(&state).contains("✗ Error: failed to create entry: disk full"));

        state.view = View::Menu;
        let screen = draw(&state);
        assert!(screen.contains("✗ Error: failed to create entry: disk full"));
        assert!(!screen.contains("enter select"));

        state.view = View::Detail;
        state.viewing = Some(Entry::new(1, "rain", Utc::now()));
        assert!(draw(&state).contains("✗ Error: failed to create entry: disk full"));
    }

    #[test]
    fn confirm_lists_choices() {
        let mut state = AppState::new(Theme::default(), "%Y-%m-%d");
        state.view = View::ConfirmDiscard;

        let screen = draw(&state);
        assert!(screen.contains("Unsaved changes may get lost"));
        assert!(screen.contains("Go back to editing"));
    }
}
