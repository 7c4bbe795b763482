//! Title bar component.

use crate::ui::theme::Theme;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Renders a one-line title bar, title on the left and an optional note
/// (such as the entry date) on the right.
pub fn render_header(frame: &mut Frame, area: Rect, title: &str, note: Option<&str>, theme: &Theme) {
    let title = Paragraph::new(Line::from(Span::styled(format!(" {title} "), theme.header())));
    frame.render_widget(title, area);

    if let Some(note) = note {
        let note = Paragraph::new(Line::from(Span::styled(note.to_string(), theme.muted())))
            .alignment(Alignment::Right);
        frame.render_widget(note, area);
    }
}
