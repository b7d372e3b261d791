//! Digit column component - one clock digit with up/down chevrons.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::tui::theme::*;

pub fn render_digit_column(frame: &mut Frame, area: Rect, value: u8, focused: bool) {
    let chevron = Style::new().fg(if focused { ACCENT_BLUE } else { TEXT_DIM });
    let digit = if focused {
        Style::new().fg(ACCENT_GOLD).bold()
    } else {
        Style::new().fg(TEXT_WHITE)
    };

    let lines = vec![
        Line::styled("▲", chevron).centered(),
        Line::styled(value.to_string(), digit).centered(),
        Line::styled("▼", chevron).centered(),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
