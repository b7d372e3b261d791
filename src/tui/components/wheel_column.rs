//! Wheel column component - three labels around the selection.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use pickwheel::picker::WheelPicker;
use pickwheel::scroll::LabelAlphas;

use crate::tui::theme::*;

/// Labels shown by one wheel column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelLabels {
    pub previous: Option<String>,
    pub current: String,
    pub next: Option<String>,
}

impl WheelLabels {
    pub fn from_wheel<T: Clone + PartialEq>(wheel: &WheelPicker<T>, label: impl Fn(&T) -> String) -> Self {
        let n = wheel.neighbours();
        Self {
            previous: n.previous.map(&label),
            current: label(n.current),
            next: n.next.map(&label),
        }
    }
}

/// Render a wheel column; neighbour labels fade with the drag offset.
pub fn render_wheel_column(
    frame: &mut Frame,
    area: Rect,
    labels: WheelLabels,
    alphas: LabelAlphas,
    focused: bool,
) {
    let border = if focused { ACCENT_BLUE } else { TEXT_DIM };
    let block = Block::new()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::new().fg(border));

    let faded = |text: Option<String>, alpha: f32| {
        Line::styled(text.unwrap_or_default(), Style::new().fg(fade(TEXT_WHITE, alpha))).centered()
    };
    let current = Line::styled(
        labels.current,
        Style::new().fg(fade(TEXT_WHITE, alphas.current)).bold(),
    )
    .centered();

    let lines = vec![
        faded(labels.previous, alphas.previous),
        current,
        faded(labels.next, alphas.next),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pickwheel::picker::SelectionMode;

    #[test]
    fn test_labels_wrap_on_cyclic_wheel() {
        let wheel = WheelPicker::new(vec![1, 2, 3, 4], &1, SelectionMode::Cyclic, 40.0).unwrap();
        let labels = WheelLabels::from_wheel(&wheel, |n| format!("{:02}", n));
        assert_eq!(labels.previous.as_deref(), Some("04"));
        assert_eq!(labels.current, "01");
        assert_eq!(labels.next.as_deref(), Some("02"));
    }

    #[test]
    fn test_labels_stop_on_bounded_wheel() {
        let wheel = WheelPicker::new(vec![1, 2, 3, 4], &1, SelectionMode::Bounded, 40.0).unwrap();
        let labels = WheelLabels::from_wheel(&wheel, |n| n.to_string());
        assert_eq!(labels.previous, None);
    }
}
