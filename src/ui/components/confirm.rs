//! Discard confirmation screen.

use crate::app::AppState;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const CHOICES: [(&str, &str); 3] = [
    ("enter", "Discard changes and return to menu"),
    ("esc", "Go back to editing"),
    ("ctrl+c", "Quit"),
];

pub fn render_confirm(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(" Unsaved changes may get lost", theme.unsaved())),
        Line::default(),
    ];
    lines.extend(CHOICES.iter().map(|(key, action)| {
        Line::from(vec![
            Span::styled(format!(" {key:<8}"), theme.selected()),
            Span::styled(action.to_string(), theme.text()),
        ])
    }));

    frame.render_widget(Paragraph::new(lines), area);
}
