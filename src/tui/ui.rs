use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use pickwheel::digits::Digit;
use pickwheel::time::label;

use crate::app::{App, Column};
use super::components::*;
use super::interaction::{ClickRegion, InteractiveRegion};
use super::theme::*;

/// Height of a wheel column: three labels plus top and bottom rules
const WHEEL_HEIGHT: u16 = 5;

pub fn render(frame: &mut Frame, app: &mut App) {
    app.interactions.clear();
    let area = frame.area();

    // Main vertical layout: title, the four picker rows, status, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(2),            // Title + spacing
        Constraint::Length(WHEEL_HEIGHT), // Day / month / year
        Constraint::Length(WHEEL_HEIGHT), // Rolling dates
        Constraint::Length(WHEEL_HEIGHT), // 12h time
        Constraint::Length(3),            // Digit clock
        Constraint::Min(0),
        Constraint::Length(1),            // Status
        Constraint::Length(1),            // Hotkeys
    ])
    .split(area);

    render_title(frame, main_layout[0]);
    render_date_row(frame, main_layout[1], app);
    render_recent_row(frame, main_layout[2], app);
    render_time_row(frame, main_layout[3], app);
    render_clock_row(frame, main_layout[4], app);
    render_status(frame, main_layout[6], app);
    render_hotkeys(frame, main_layout[7]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled("pick", Style::new().fg(ACCENT_CORAL).bold()),
        Span::styled("wheel", Style::new().fg(ACCENT_MINT).bold()),
    ])
    .centered();
    frame.render_widget(Paragraph::new(title), area);
}

/// Columns of fixed widths, centered in `area`
fn columns(area: Rect, widths: &[u16]) -> Vec<Rect> {
    Layout::horizontal(widths.iter().map(|w| Constraint::Length(*w)))
        .flex(Flex::Center)
        .spacing(1)
        .split(area)
        .to_vec()
}

/// Draw a wheel column and register it for mouse input.
fn wheel(frame: &mut Frame, area: Rect, app: &mut App, column: Column, labels: WheelLabels) {
    let Some(picker) = app.wheel(column) else {
        return;
    };
    let alphas = picker.offset().alphas(app.config.minimum_alpha);
    render_wheel_column(frame, area, labels, alphas, app.focus == column);
    app.interactions
        .register(InteractiveRegion::column(column, ClickRegion::from(area)));
}

fn render_date_row(frame: &mut Frame, area: Rect, app: &mut App) {
    let cells = columns(area, &[6, 7, 8]);

    let days = WheelLabels::from_wheel(&app.day, |d| app.date.day_label(*d));
    let months = WheelLabels::from_wheel(&app.month, |m| app.date.month_label(*m));
    let years = WheelLabels::from_wheel(&app.year, |y| app.date.year_label(*y));

    wheel(frame, cells[0], app, Column::Day, days);
    wheel(frame, cells[1], app, Column::Month, months);
    wheel(frame, cells[2], app, Column::Year, years);
}

fn render_recent_row(frame: &mut Frame, area: Rect, app: &mut App) {
    let cells = columns(area, &[23]);
    let today = app.today;
    let labels = WheelLabels::from_wheel(&app.recent, |d| app.labels.label(*d, today));
    wheel(frame, cells[0], app, Column::Recent, labels);
}

fn render_time_row(frame: &mut Frame, area: Rect, app: &mut App) {
    let cells = columns(area, &[4, 1, 4, 4]);
    let leading_zero = app.config.leading_zero;

    let hours = WheelLabels::from_wheel(app.time.hours(), |h| label(*h, leading_zero));
    let minutes = WheelLabels::from_wheel(app.time.minutes(), |m| label(*m, true));
    let meridiem = WheelLabels::from_wheel(app.time.meridiem(), |m| m.label().to_string());

    wheel(frame, cells[0], app, Column::Hour, hours);
    // Line the colon up with the selected labels, below the top rule
    let colon = Rect {
        y: cells[1].y + 1,
        height: cells[1].height.saturating_sub(1),
        ..cells[1]
    };
    render_colon(frame, colon);
    wheel(frame, cells[2], app, Column::Minute, minutes);
    wheel(frame, cells[3], app, Column::Meridiem, meridiem);
}

fn render_clock_row(frame: &mut Frame, area: Rect, app: &mut App) {
    let cells = columns(area, &[1, 1, 1, 1, 1]);
    let slots = [
        (cells[0], Digit::HoursTens),
        (cells[1], Digit::HoursUnits),
        (cells[3], Digit::MinutesTens),
        (cells[4], Digit::MinutesUnits),
    ];

    for (cell, digit) in slots {
        let column = Column::Digit(digit);
        render_digit_column(frame, cell, app.clock.digit(digit), app.focus == column);
        app.interactions
            .register(InteractiveRegion::digit(column, ClickRegion::from(cell)));
    }
    render_colon(frame, cells[2]);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status {
        Some(status) => Line::styled(status.as_str(), Style::new().fg(ACCENT_GOLD)),
        None => Line::styled(
            format!("{} selected", app.date.value().format("%Y-%m-%d")),
            Style::new().fg(TEXT_DIM),
        ),
    };
    frame.render_widget(Paragraph::new(line.centered()), area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect) {
    let hotkeys = Line::from(vec![
        Span::styled("[drag/scroll]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" pick • ", Style::new().fg(TEXT_DIM)),
        Span::styled("[j/k]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" step • ", Style::new().fg(TEXT_DIM)),
        Span::styled("[Tab]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" focus • ", Style::new().fg(TEXT_DIM)),
        Span::styled("[0-9]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" digit • ", Style::new().fg(TEXT_DIM)),
        Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
        Span::styled("uit", Style::new().fg(TEXT_DIM)),
    ]);

    frame.render_widget(Paragraph::new(hotkeys.centered()), area);
}
