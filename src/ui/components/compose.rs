//! Compose screen: the editor inside a bordered box.

use crate::app::AppState;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

pub fn render_compose(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let border = if state.draft.is_focused() {
        theme.selected()
    } else {
        theme.border()
    };

    let block = Block::default().borders(Borders::ALL).border_style(border);
    let inner = block.inner(area);

    frame.render_widget(block, area);
    frame.render_widget(state.draft.editor(), inner);
}
