//! Rolling window of dates around today, for single-wheel date pickers.

use chrono::{Days, NaiveDate};

use crate::error::{PickerError, PickerResult};

/// Pure predicate deciding whether a date may be offered.
pub trait DateFilter {
    fn allows(&self, date: NaiveDate) -> bool;
}

impl<F: Fn(NaiveDate) -> bool> DateFilter for F {
    fn allows(&self, date: NaiveDate) -> bool {
        self(date)
    }
}

/// Dates from `days_backward` before today to `days_forward` after it.
pub struct DateWindow {
    days_backward: u32,
    days_forward: u32,
    filter: Option<Box<dyn DateFilter>>,
}

impl Default for DateWindow {
    fn default() -> Self {
        Self::new(7, 0)
    }
}

impl std::fmt::Debug for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateWindow")
            .field("days_backward", &self.days_backward)
            .field("days_forward", &self.days_forward)
            .field("filtered", &self.filter.is_some())
            .finish()
    }
}

impl DateWindow {
    pub fn new(days_backward: u32, days_forward: u32) -> Self {
        Self {
            days_backward,
            days_forward,
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: impl DateFilter + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Every allowed date in the window, oldest first.
    pub fn dates(&self, today: NaiveDate) -> PickerResult<Vec<NaiveDate>> {
        let first = today
            .checked_sub_days(Days::new(self.days_backward.into()))
            .unwrap_or(NaiveDate::MIN);
        let last = today
            .checked_add_days(Days::new(self.days_forward.into()))
            .unwrap_or(NaiveDate::MAX);

        let dates: Vec<NaiveDate> = first
            .iter_days()
            .take_while(|d| *d <= last)
            .filter(|d| self.filter.as_ref().is_none_or(|f| f.allows(*d)))
            .collect();

        if dates.is_empty() {
            return Err(PickerError::EmptyList);
        }
        Ok(dates)
    }
}

/// `value` if offered, otherwise the closest offered date (earliest on ties).
pub fn nearest(value: NaiveDate, dates: &[NaiveDate]) -> Option<NaiveDate> {
    if dates.contains(&value) {
        return Some(value);
    }
    dates
        .iter()
        .copied()
        .min_by_key(|d| (*d - value).num_days().abs())
}

/// Labels for the rolling date wheel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateLabels {
    pub today: String,
    pub yesterday: String,
    /// chrono format for every other date
    pub format: String,
}

impl Default for DateLabels {
    fn default() -> Self {
        Self {
            today: "Today".to_string(),
            yesterday: "Yesterday".to_string(),
            format: "%b %-d, %Y".to_string(),
        }
    }
}

impl DateLabels {
    pub fn label(&self, date: NaiveDate, today: NaiveDate) -> String {
        if date == today {
            self.today.clone()
        } else if today.pred_opt() == Some(date) {
            self.yesterday.clone()
        } else {
            date.format(&self.format).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_window_is_last_week() {
        let today = date(2024, 3, 3);
        let dates = DateWindow::default().dates(today).unwrap();
        assert_eq!(dates.len(), 8);
        assert_eq!(dates[0], date(2024, 2, 25));
        assert_eq!(*dates.last().unwrap(), today);
    }

    #[test]
    fn test_filter_skips_weekends() {
        let today = date(2024, 3, 8); // Friday
        let window = DateWindow::new(6, 2)
            .with_filter(|d: NaiveDate| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun));
        let dates = window.dates(today).unwrap();
        assert!(dates.iter().all(|d| d.weekday().num_days_from_monday() < 5));
        assert_eq!(dates.first(), Some(&date(2024, 3, 4)));
        assert_eq!(dates.last(), Some(&date(2024, 3, 8)));
    }

    #[test]
    fn test_everything_filtered_is_empty_list() {
        let window = DateWindow::new(3, 3).with_filter(|_: NaiveDate| false);
        assert_eq!(window.dates(date(2024, 1, 1)), Err(PickerError::EmptyList));
    }

    #[test]
    fn test_nearest_date() {
        let dates = [date(2024, 3, 1), date(2024, 3, 5), date(2024, 3, 9)];
        assert_eq!(nearest(date(2024, 3, 5), &dates), Some(date(2024, 3, 5)));
        assert_eq!(nearest(date(2024, 3, 6), &dates), Some(date(2024, 3, 5)));
        assert_eq!(nearest(date(2024, 3, 7), &dates), Some(date(2024, 3, 5)));
        assert_eq!(nearest(date(2025, 1, 1), &dates), Some(date(2024, 3, 9)));
        assert_eq!(nearest(date(2025, 1, 1), &[]), None);
    }

    #[test]
    fn test_labels() {
        let labels = DateLabels::default();
        let today = date(2024, 3, 8);
        assert_eq!(labels.label(today, today), "Today");
        assert_eq!(labels.label(date(2024, 3, 7), today), "Yesterday");
        assert_eq!(labels.label(date(2024, 3, 1), today), "Mar 1, 2024");
    }
}
