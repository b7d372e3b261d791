use chrono::{Datelike, NaiveDate, NaiveDateTime};

use pickwheel::calendar::{nearest, DateLabels, DatePicker};
use pickwheel::config::Config;
use pickwheel::digits::{AnyTime, Digit, DigitClock};
use pickwheel::error::PickwheelError;
use pickwheel::fling::ExponentialDecay;
use pickwheel::log;
use pickwheel::picker::{Picker, SelectionMode, SettleOutcome, WheelPicker};
use pickwheel::scroll::VelocityTracker;
use pickwheel::settle::{SettleEvent, SettleSender};
use pickwheel::time::{AmPmHours, AmPmPicker, FullHours};

use crate::events::Action;
use crate::tui::interaction::InteractionRegistry;

/// One focusable column on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Day,
    Month,
    Year,
    Recent,
    Hour,
    Minute,
    Meridiem,
    Digit(Digit),
}

impl Column {
    /// Focus order, left to right and top to bottom
    pub const ORDER: [Column; 11] = [
        Column::Day,
        Column::Month,
        Column::Year,
        Column::Recent,
        Column::Hour,
        Column::Minute,
        Column::Meridiem,
        Column::Digit(Digit::HoursTens),
        Column::Digit(Digit::HoursUnits),
        Column::Digit(Digit::MinutesTens),
        Column::Digit(Digit::MinutesUnits),
    ];

    pub fn next(self) -> Self {
        self.offset_by(1)
    }

    pub fn prev(self) -> Self {
        self.offset_by(Self::ORDER.len() - 1)
    }

    fn offset_by(self, by: usize) -> Self {
        let index = Self::ORDER.iter().position(|c| *c == self).unwrap_or(0);
        Self::ORDER[(index + by) % Self::ORDER.len()]
    }
}

/// A drag in progress on a wheel column
#[derive(Debug)]
struct DragState {
    column: Column,
    last_row: u16,
    tracker: VelocityTracker,
}

pub struct App {
    pub config: Config,
    pub today: NaiveDate,
    pub date: DatePicker,
    pub day: WheelPicker<u32>,
    pub month: WheelPicker<u32>,
    pub year: WheelPicker<i32>,
    pub recent: WheelPicker<NaiveDate>,
    pub labels: DateLabels,
    pub time: AmPmPicker,
    pub clock: DigitClock,
    pub focus: Column,
    /// Last committed change, shown in the footer
    pub status: Option<String>,
    pub interactions: InteractionRegistry,
    pub should_quit: bool,
    drag: Option<DragState>,
    decay: ExponentialDecay,
    settle_tx: SettleSender,
}

impl App {
    pub fn new(config: Config, now: NaiveDateTime, settle_tx: SettleSender) -> Result<Self, PickwheelError> {
        let slot = config.slot_height;
        let today = now.date();

        let date = DatePicker::new(today, config.bounds()?, config.cyclic);
        let value = date.value();
        let ranges = date.ranges();
        let modes = date.column_modes();

        let recent_dates = config.date_window().dates(today)?;
        let recent_value = nearest(today, &recent_dates).unwrap_or(today);

        let time_now = FullHours::from_naive_time(now.time());

        Ok(Self {
            day: WheelPicker::new(ranges.days.collect(), &value.day(), modes.day, slot)?,
            month: WheelPicker::new(ranges.months.collect(), &value.month(), modes.month, slot)?,
            year: WheelPicker::new(ranges.years.collect(), &value.year(), modes.year, slot)?,
            recent: WheelPicker::new(recent_dates, &recent_value, SelectionMode::from_cyclic(config.cyclic), slot)?,
            labels: config.date_labels(),
            time: AmPmPicker::new(AmPmHours::from(time_now), None, None, slot)?,
            clock: DigitClock::from_time(time_now),
            decay: config.decay(),
            date,
            today,
            focus: Column::Day,
            status: None,
            interactions: InteractionRegistry::new(),
            should_quit: false,
            drag: None,
            settle_tx,
            config,
        })
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The wheel behind `column`, if it is one
    pub fn wheel(&self, column: Column) -> Option<&dyn Picker> {
        match column {
            Column::Day => Some(&self.day),
            Column::Month => Some(&self.month),
            Column::Year => Some(&self.year),
            Column::Recent => Some(&self.recent),
            Column::Hour => Some(self.time.hours()),
            Column::Minute => Some(self.time.minutes()),
            Column::Meridiem => Some(self.time.meridiem()),
            Column::Digit(_) => None,
        }
    }

    fn wheel_mut(&mut self, column: Column) -> Option<&mut dyn Picker> {
        match column {
            Column::Day => Some(&mut self.day),
            Column::Month => Some(&mut self.month),
            Column::Year => Some(&mut self.year),
            Column::Recent => Some(&mut self.recent),
            Column::Hour => Some(self.time.hours_mut()),
            Column::Minute => Some(self.time.minutes_mut()),
            Column::Meridiem => Some(self.time.meridiem_mut()),
            Column::Digit(_) => None,
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::Focus(column) => self.focus = column,
            Action::Up => self.step(self.focus, -1),
            Action::Down => self.step(self.focus, 1),
            Action::ScrollUp(column) => {
                self.focus = column;
                self.step(column, -1);
            }
            Action::ScrollDown(column) => {
                self.focus = column;
                self.step(column, 1);
            }
            Action::SetDigit(value) => {
                if let Column::Digit(digit) = self.focus {
                    let changed = self.clock.set(digit, value, &AnyTime);
                    self.report_clock(changed);
                }
            }
            Action::DragStart { column, row } => self.begin_drag(column, row),
            Action::DragMove { row } => self.drag_to(row),
            Action::DragEnd => self.end_drag(),
            Action::None => {}
        }
    }

    /// Move a column by `positions`; negative moves up.
    fn step(&mut self, column: Column, positions: i64) {
        if let Column::Digit(digit) = column {
            let changed = if positions < 0 {
                self.clock.increment(digit, &AnyTime)
            } else {
                self.clock.decrement(digit, &AnyTime)
            };
            self.report_clock(changed);
            return;
        }

        let changed = self
            .wheel_mut(column)
            .map(|wheel| wheel.step(positions))
            .unwrap_or(false);
        if changed {
            self.on_commit(column);
        }
    }

    fn begin_drag(&mut self, column: Column, row: u16) {
        self.focus = column;
        let Some(wheel) = self.wheel_mut(column) else {
            return;
        };
        wheel.begin_drag();
        self.drag = Some(DragState {
            column,
            last_row: row,
            tracker: VelocityTracker::default(),
        });
    }

    /// One terminal row of drag moves the wheel by one slot.
    fn drag_to(&mut self, row: u16) {
        let Some(mut drag) = self.drag.take() else {
            return;
        };
        let delta = (f32::from(row) - f32::from(drag.last_row)) * self.config.slot_height;
        drag.last_row = row;
        if delta != 0.0 {
            drag.tracker.record(delta);
            if let Some(wheel) = self.wheel_mut(drag.column) {
                wheel.drag_by(delta);
            }
        }
        self.drag = Some(drag);
    }

    fn end_drag(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let velocity = drag.tracker.velocity();
        let decay = self.decay;
        let interval = self.config.frame_interval();
        let events = self.settle_tx.clone();
        if let Some(wheel) = self.wheel_mut(drag.column) {
            if let Err(e) = wheel.release_animated(velocity, &decay, interval, &events) {
                log::log(&format!("Release failed: {}", e));
            }
        }
    }

    /// Route a settle event to the wheel that owns its generation.
    pub fn handle_settle(&mut self, event: SettleEvent) {
        for column in Column::ORDER {
            let Some(wheel) = self.wheel_mut(column) else {
                continue;
            };
            match wheel.handle_settle(&event) {
                SettleOutcome::Ignored => continue,
                SettleOutcome::Committed => {
                    self.on_commit(column);
                    return;
                }
                SettleOutcome::Frame | SettleOutcome::Unchanged => return,
            }
        }
    }

    fn on_commit(&mut self, column: Column) {
        match column {
            Column::Day => {
                let changed = self.date.set_day(*self.day.value());
                self.after_date_edit(changed);
            }
            Column::Month => {
                let changed = self.date.set_month(*self.month.value());
                self.after_date_edit(changed);
            }
            Column::Year => {
                let changed = self.date.set_year(*self.year.value());
                self.after_date_edit(changed);
            }
            Column::Recent => {
                let label = self.labels.label(*self.recent.value(), self.today);
                self.status = Some(format!("Picked {}", label));
            }
            Column::Hour | Column::Minute | Column::Meridiem => match self.time.value() {
                Ok(time) => self.status = Some(format!("Time {} ({})", time, FullHours::from(time))),
                Err(e) => log::log(&format!("Invalid wheel time: {}", e)),
            },
            Column::Digit(_) => {}
        }
    }

    fn after_date_edit(&mut self, changed: Option<NaiveDate>) {
        self.status = Some(match changed {
            Some(date) => format!("Date {}", date.format("%Y-%m-%d")),
            None => format!("Kept {}", self.date.value().format("%Y-%m-%d")),
        });
        self.sync_date_wheels();
    }

    /// Rebuild the date wheels from the committed date; a rejected edit
    /// puts the moved wheel back.
    fn sync_date_wheels(&mut self) {
        let value = self.date.value();
        let ranges = self.date.ranges();
        let modes = self.date.column_modes();

        let result = self
            .day
            .set_items(ranges.days.collect(), &value.day())
            .and_then(|_| self.month.set_items(ranges.months.collect(), &value.month()))
            .and_then(|_| self.year.set_items(ranges.years.collect(), &value.year()));
        if let Err(e) = result {
            log::log(&format!("Failed to sync date wheels: {}", e));
        }

        self.day.set_mode(modes.day);
        self.month.set_mode(modes.month);
        self.year.set_mode(modes.year);
    }

    fn report_clock(&mut self, changed: Option<FullHours>) {
        if let Some(time) = changed {
            self.status = Some(format!("Clock {}", time));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pickwheel::settle;

    fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hh, mm, 0)
            .unwrap()
    }

    fn app_at(now: NaiveDateTime) -> App {
        let (tx, _rx) = settle::channel();
        App::new(Config::default(), now, tx).unwrap()
    }

    #[test]
    fn test_focus_cycles() {
        assert_eq!(Column::Day.prev(), Column::Digit(Digit::MinutesUnits));
        assert_eq!(Column::Digit(Digit::MinutesUnits).next(), Column::Day);
        assert_eq!(Column::Year.next(), Column::Recent);
    }

    #[test]
    fn test_initial_state_follows_now() {
        let app = app_at(at(2024, 2, 10, 17, 45));
        assert_eq!(app.date.value(), NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
        assert_eq!(app.day.items().len(), 29);
        assert_eq!(*app.recent.value(), app.today);
        assert_eq!(app.clock.digits(), [1, 7, 4, 5]);
        assert_eq!(app.time.value().unwrap().to_string(), "05:45 PM");
    }

    #[test]
    fn test_recent_wheel_follows_cyclic_setting() {
        let app = app_at(at(2024, 2, 10, 17, 45));
        assert_eq!(app.recent.mode(), SelectionMode::Cyclic);

        let (tx, _rx) = settle::channel();
        let config = Config::default().with_overrides(None, None, Some(false));
        let app = App::new(config, at(2024, 2, 10, 17, 45), tx).unwrap();
        assert_eq!(app.recent.mode(), SelectionMode::Bounded);
    }

    #[test]
    fn test_month_step_cascades_day_list() {
        let mut app = app_at(at(2024, 1, 31, 9, 0));
        app.focus = Column::Month;
        app.apply(Action::Down);

        assert_eq!(app.date.value(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(*app.day.value(), 29);
        assert_eq!(app.day.items().len(), 29);
    }

    #[test]
    fn test_rejected_edit_resets_wheel() {
        let (tx, _rx) = settle::channel();
        let config = Config::default().with_overrides(
            NaiveDate::from_ymd_opt(2024, 1, 1),
            NaiveDate::from_ymd_opt(2024, 3, 15),
            None,
        );
        let mut app = App::new(config, at(2024, 1, 20, 9, 0), tx).unwrap();
        app.focus = Column::Month;

        app.apply(Action::Down);
        assert_eq!(app.date.value(), NaiveDate::from_ymd_opt(2024, 2, 20).unwrap());

        // March 20 is past the maximum: the date stays and the wheel goes back
        app.apply(Action::Down);
        assert_eq!(app.date.value(), NaiveDate::from_ymd_opt(2024, 2, 20).unwrap());
        assert_eq!(*app.month.value(), 2);
        assert_eq!(app.status.as_deref(), Some("Kept 2024-02-20"));
    }

    #[test]
    fn test_digit_keys_follow_clock_rules() {
        let mut app = app_at(at(2024, 1, 1, 19, 30));
        app.focus = Column::Digit(Digit::HoursTens);
        app.apply(Action::SetDigit(2));
        assert_eq!(app.clock.digits(), [2, 3, 3, 0]);
        assert_eq!(app.status.as_deref(), Some("Clock 23:30"));

        app.apply(Action::Up);
        assert_eq!(app.clock.digits(), [0, 3, 3, 0]);
    }

    #[test]
    fn test_scroll_focuses_and_steps_wheel() {
        let mut app = app_at(at(2024, 1, 1, 11, 0));
        app.apply(Action::ScrollDown(Column::Meridiem));
        assert_eq!(app.focus, Column::Meridiem);
        assert_eq!(app.status.as_deref(), Some("Time 11:00 PM (23:00)"));
    }

    #[tokio::test]
    async fn test_drag_release_commits_through_settle_events() {
        let (tx, mut rx) = settle::channel();
        let mut app = App::new(Config::default(), at(2024, 5, 10, 9, 0), tx).unwrap();

        app.apply(Action::DragStart { column: Column::Day, row: 10 });
        // A single move sample gives zero release velocity
        app.apply(Action::DragMove { row: 8 });
        app.apply(Action::DragEnd);
        assert!(!app.is_dragging());

        while let Some(event) = rx.recv().await {
            let finished = matches!(event, SettleEvent::Finished { .. });
            app.handle_settle(event);
            if finished {
                break;
            }
        }
        assert_eq!(app.date.value(), NaiveDate::from_ymd_opt(2024, 5, 12).unwrap());
    }
}
