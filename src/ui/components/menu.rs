//! Main menu screen.

use crate::app::{AppState, MENU_OPTIONS};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const SUBTITLE: &str = "A commandline journaling tool";

pub fn render_menu(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let [subtitle_area, options_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {SUBTITLE}"), theme.muted())),
        subtitle_area,
    );

    let lines: Vec<Line> = MENU_OPTIONS
        .iter()
        .enumerate()
        .map(|(index, option)| {
            if index == state.menu_cursor {
                Line::from(Span::styled(format!(" > {}", option.label()), theme.selected()))
            } else {
                Line::from(Span::styled(format!("   {}", option.label()), theme.text()))
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), options_area);
}
