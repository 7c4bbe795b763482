//! Read-only entry screen with a scrollable body.

use crate::app::AppState;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_detail(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let Some(detail) = state.compute_detail() else {
        return;
    };

    let [body_area, position_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let body = Paragraph::new(detail.body)
        .style(theme.text())
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM).border_style(theme.border()))
        .wrap(Wrap { trim: false })
        .scroll((detail.scroll, 0));
    frame.render_widget(body, body_area);

    let position = Paragraph::new(Span::styled(format!("{:>3}%", detail.scroll_percent), theme.muted()))
        .alignment(Alignment::Right);
    frame.render_widget(position, position_area);
}
