//! Valid year, month and day ranges for a date inside inclusive bounds.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

use crate::error::{PickerError, PickerResult};

/// Leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1-12) of `year`. Other months have no days.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Build a date, clamping an impossible day to the last day of the month.
///
/// Returns `None` only if the year or month itself is unrepresentable.
pub fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .or_else(|| NaiveDate::from_ymd_opt(year, month, day.min(days_in_month(year, month))))
}

/// Inclusive minimum and maximum selectable dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    min: NaiveDate,
    max: NaiveDate,
}

impl Default for DateBounds {
    fn default() -> Self {
        Self {
            min: Self::earliest(),
            max: Self::latest(),
        }
    }
}

impl DateBounds {
    /// Bounds with absent ends replaced by the defaults.
    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> PickerResult<Self> {
        let min = min.unwrap_or_else(Self::earliest);
        let max = max.unwrap_or_else(Self::latest);
        if min > max {
            return Err(PickerError::InvertedBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Default lower bound: 1900-01-01.
    pub fn earliest() -> NaiveDate {
        NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Default upper bound: 2100-12-31.
    pub fn latest() -> NaiveDate {
        NaiveDate::from_ymd_opt(2100, 12, 31).unwrap_or(NaiveDate::MAX)
    }

    pub fn min(&self) -> NaiveDate {
        self.min
    }

    pub fn max(&self) -> NaiveDate {
        self.max
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.min && date <= self.max
    }

    /// Pull `date` into the bounds.
    pub fn correct(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.min, self.max)
    }

    /// Valid years.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.min.year()..=self.max.year()
    }

    /// Valid months of `year`.
    pub fn months(&self, year: i32) -> RangeInclusive<u32> {
        let first = if year == self.min.year() { self.min.month() } else { 1 };
        let last = if year == self.max.year() { self.max.month() } else { 12 };
        first..=last
    }

    /// Valid days of `month` in `year`.
    pub fn days(&self, year: i32, month: u32) -> RangeInclusive<u32> {
        let length = days_in_month(year, month);
        let first = if year == self.min.year() && month == self.min.month() {
            self.min.day()
        } else {
            1
        };
        let last = if year == self.max.year() && month == self.max.month() {
            length.min(self.max.day())
        } else {
            length
        };
        first..=last
    }

    /// Ranges for `value`, corrected into the bounds first.
    pub fn resolve(&self, value: NaiveDate) -> CalendarRanges {
        let value = self.correct(value);
        CalendarRanges {
            years: self.years(),
            months: self.months(value.year()),
            days: self.days(value.year(), value.month()),
        }
    }
}

/// Year, month and day lists valid for one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRanges {
    pub years: RangeInclusive<i32>,
    pub months: RangeInclusive<u32>,
    pub days: RangeInclusive<u32>,
}

/// Ranges for `value` between optional inclusive bounds.
pub fn resolve(
    value: NaiveDate,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
) -> PickerResult<CalendarRanges> {
    Ok(DateBounds::new(min, max)?.resolve(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2100, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
    }

    #[test]
    fn test_months_outside_calendar_have_no_days() {
        assert_eq!(days_in_month(2024, 0), 0);
        assert_eq!(days_in_month(2024, 13), 0);
        assert_eq!(clamped_date(2024, 13, 1), None);
    }

    #[test]
    fn test_resolve_leap_february() {
        let ranges = resolve(
            date(2000, 2, 15),
            Some(date(2000, 1, 1)),
            Some(date(2000, 12, 31)),
        )
        .unwrap();
        assert_eq!(ranges.years, 2000..=2000);
        assert_eq!(ranges.months, 1..=12);
        assert_eq!(ranges.days, 1..=29);
    }

    #[test]
    fn test_resolve_at_boundaries() {
        let min = Some(date(2019, 3, 10));
        let max = Some(date(2021, 8, 20));

        let start = resolve(date(2019, 3, 15), min, max).unwrap();
        assert_eq!(start.years, 2019..=2021);
        assert_eq!(start.months, 3..=12);
        assert_eq!(start.days, 10..=31);

        let end = resolve(date(2021, 8, 1), min, max).unwrap();
        assert_eq!(end.months, 1..=8);
        assert_eq!(end.days, 1..=20);

        let middle = resolve(date(2020, 2, 1), min, max).unwrap();
        assert_eq!(middle.months, 1..=12);
        assert_eq!(middle.days, 1..=29);
    }

    #[test]
    fn test_resolve_corrects_value_into_bounds() {
        let ranges = resolve(date(1999, 6, 1), Some(date(2005, 5, 5)), None).unwrap();
        assert_eq!(ranges.years, 2005..=2100);
        assert_eq!(ranges.months, 5..=12);
        assert_eq!(ranges.days, 5..=31);
    }

    #[test]
    fn test_default_bounds() {
        let bounds = DateBounds::new(None, None).unwrap();
        assert_eq!(bounds.min(), date(1900, 1, 1));
        assert_eq!(bounds.max(), date(2100, 12, 31));
        assert_eq!(bounds, DateBounds::default());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = resolve(date(2000, 1, 1), Some(date(2001, 1, 1)), Some(date(2000, 1, 1)));
        assert!(matches!(err, Err(PickerError::InvertedBounds { .. })));
    }

    #[test]
    fn test_resolve_is_pure() {
        let min = Some(date(2010, 7, 4));
        let max = Some(date(2012, 2, 10));
        let a = resolve(date(2012, 2, 3), min, max).unwrap();
        let b = resolve(date(2012, 2, 3), min, max).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_clamped_date() {
        assert_eq!(clamped_date(2023, 4, 31), Some(date(2023, 4, 30)));
        assert_eq!(clamped_date(2023, 2, 30), Some(date(2023, 2, 28)));
        assert_eq!(clamped_date(2023, 13, 1), None);
    }
}
