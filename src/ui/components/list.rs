//! Entry list screen, shared by the read and edit pickers.

use crate::app::AppState;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub fn render_list(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let rows = state.compute_list_rows();

    if rows.is_empty() {
        let empty = Paragraph::new(Span::styled(" No entries yet.", theme.muted()));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = rows
        .into_iter()
        .map(|row| {
            ListItem::new(vec![
                Line::from(Span::styled(row.title, theme.text())),
                Line::from(Span::styled(row.description, theme.muted())),
                Line::default(),
            ])
        })
        .collect();

    let list = List::new(items)
        .highlight_style(theme.selected())
        .highlight_symbol("│ ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.list_cursor));

    frame.render_stateful_widget(list, area, &mut list_state);
}
