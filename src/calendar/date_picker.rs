//! Day / month / year picker model.
//!
//! Holds the committed date and applies column edits with the cascade the
//! three wheels need: a year change adjusts the month, the month adjusts the
//! day, and the resulting date is validated against the bounds. Days that do
//! not exist are clamped to the end of the month; dates outside the bounds
//! are rejected and the previous value stays.

use chrono::{Datelike, NaiveDate};

use crate::log;
use crate::picker::SelectionMode;

use super::range::{clamped_date, days_in_month, CalendarRanges, DateBounds};

/// Wheel behaviour for each date column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnModes {
    pub day: SelectionMode,
    pub month: SelectionMode,
    pub year: SelectionMode,
}

/// chrono format strings for the three columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormats {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl Default for DateFormats {
    fn default() -> Self {
        Self {
            day: "%-d".to_string(),
            month: "%b".to_string(),
            year: "%Y".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatePicker {
    value: NaiveDate,
    bounds: DateBounds,
    cyclic: bool,
    formats: DateFormats,
}

impl DatePicker {
    /// A value outside `bounds` is pulled to the nearest bound.
    pub fn new(value: NaiveDate, bounds: DateBounds, cyclic: bool) -> Self {
        Self {
            value: bounds.correct(value),
            bounds,
            cyclic,
            formats: DateFormats::default(),
        }
    }

    pub fn with_formats(mut self, formats: DateFormats) -> Self {
        self.formats = formats;
        self
    }

    pub fn value(&self) -> NaiveDate {
        self.value
    }

    pub fn bounds(&self) -> &DateBounds {
        &self.bounds
    }

    pub fn ranges(&self) -> CalendarRanges {
        self.bounds.resolve(self.value)
    }

    /// Columns only wrap when they have enough items to make wrapping useful.
    pub fn column_modes(&self) -> ColumnModes {
        let ranges = self.ranges();
        let mode = |len: usize, min_len: usize| SelectionMode::from_cyclic(self.cyclic && len > min_len);
        ColumnModes {
            day: mode(ranges.days.count(), 3),
            month: mode(ranges.months.count(), 3),
            year: mode(ranges.years.count(), 10),
        }
    }

    /// Date produced by picking `day`, or `None` if it leaves the bounds.
    pub fn with_day(&self, day: u32) -> Option<NaiveDate> {
        let candidate = clamped_date(self.value.year(), self.value.month(), day)?;
        self.accept(candidate)
    }

    /// Date produced by picking `month`, or `None` if it leaves the bounds.
    pub fn with_month(&self, month: u32) -> Option<NaiveDate> {
        let year = self.value.year();
        let day = self.value.day().min(days_in_month(year, month));
        let candidate = NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, month, 1))?;
        self.accept(candidate)
    }

    /// Date produced by picking `year`, or `None` if it leaves the bounds.
    pub fn with_year(&self, year: i32) -> Option<NaiveDate> {
        let min = self.bounds.min();
        let max = self.bounds.max();

        let months = self.bounds.months(year);
        let month = self.value.month().clamp(*months.start(), *months.end());

        let mut day = self.value.day().min(days_in_month(year, month));
        if year == min.year() && month == min.month() && day < min.day() {
            day = min.day();
        } else if year == max.year() && month == max.month() && day > max.day() {
            day = max.day();
        }

        let candidate = NaiveDate::from_ymd_opt(year, month, day)
            .unwrap_or(if year <= min.year() { min } else { max });
        self.accept(candidate)
    }

    /// Commit a day edit. Returns the new date when it changed.
    pub fn set_day(&mut self, day: u32) -> Option<NaiveDate> {
        let next = self.with_day(day);
        self.commit("day", next)
    }

    /// Commit a month edit. Returns the new date when it changed.
    pub fn set_month(&mut self, month: u32) -> Option<NaiveDate> {
        let next = self.with_month(month);
        self.commit("month", next)
    }

    /// Commit a year edit. Returns the new date when it changed.
    pub fn set_year(&mut self, year: i32) -> Option<NaiveDate> {
        let next = self.with_year(year);
        self.commit("year", next)
    }

    pub fn day_label(&self, day: u32) -> String {
        self.label(clamped_date(self.value.year(), self.value.month(), day), &self.formats.day)
    }

    pub fn month_label(&self, month: u32) -> String {
        self.label(NaiveDate::from_ymd_opt(self.value.year(), month, 1), &self.formats.month)
    }

    pub fn year_label(&self, year: i32) -> String {
        self.label(NaiveDate::from_ymd_opt(year, 1, 1), &self.formats.year)
    }

    fn label(&self, date: Option<NaiveDate>, format: &str) -> String {
        date.map(|d| d.format(format).to_string()).unwrap_or_default()
    }

    fn accept(&self, candidate: NaiveDate) -> Option<NaiveDate> {
        self.bounds.contains(candidate).then_some(candidate)
    }

    fn commit(&mut self, column: &str, next: Option<NaiveDate>) -> Option<NaiveDate> {
        match next {
            Some(date) if date != self.value => {
                log::log_event(&format!("date {} edit: {} -> {}", column, self.value, date));
                self.value = date;
                Some(date)
            }
            Some(_) => None,
            None => {
                log::log_event(&format!("date {} edit rejected, keeping {}", column, self.value));
                None
            }
        }
    }
}
