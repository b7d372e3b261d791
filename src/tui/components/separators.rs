//! Separator components - the colon between hours and minutes.

use ratatui::{Frame, layout::Rect, style::Style, text::Line, widgets::Paragraph};

use crate::tui::theme::*;

/// Render a ':' on the middle row of `area`.
pub fn render_colon(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::styled(":", Style::new().fg(TEXT_DIM)).centered(),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
