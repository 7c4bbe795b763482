//! Footer component: key hints and the compose status line.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::ComposeStatus;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Renders dimmed key hints.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &str, theme: &Theme) {
    frame.render_widget(Paragraph::new(Span::styled(hints.to_string(), theme.muted())), area);
}

/// Renders the save indicator followed by the last error, if any.
///
/// ```text
/// ● Unsaved changes (ID: 4)  ✗ Error: failed to update entry: disk full
/// ```
pub fn render_status(frame: &mut Frame, area: Rect, status: &ComposeStatus, theme: &Theme) {
    let indicator_style = if status.unsaved {
        theme.unsaved()
    } else {
        theme.saved()
    };

    let mut spans = vec![Span::styled(status.indicator(), indicator_style)];
    if let Some(error) = &status.error {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("✗ Error: {error}"), theme.error()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders a store failure in place of the key hints.
pub fn render_error(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let line = Span::styled(format!(" ✗ Error: {message}"), theme.error());
    frame.render_widget(Paragraph::new(line), area);
}
