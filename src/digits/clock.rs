//! Four-digit HH:MM clock built from wrapping digit counters.
//!
//! The hours-units digit only offers 0-3 while the hours-tens digit is 2,
//! so the composed time is always a valid 24-hour time.

use crate::error::PickerResult;
use crate::log;
use crate::time::{FullHours, Hours};

use super::counter::{DigitConstraint, DigitCounter};

/// Pure check applied to every composed time before it is reported.
pub trait TimeValidator {
    fn is_valid(&self, time: FullHours) -> bool;
}

impl<F: Fn(FullHours) -> bool> TimeValidator for F {
    fn is_valid(&self, time: FullHours) -> bool {
        self(time)
    }
}

/// Accepts every time.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyTime;

impl TimeValidator for AnyTime {
    fn is_valid(&self, _time: FullHours) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Digit {
    HoursTens,
    HoursUnits,
    MinutesTens,
    MinutesUnits,
}

impl Digit {
    pub const ALL: [Digit; 4] = [
        Digit::HoursTens,
        Digit::HoursUnits,
        Digit::MinutesTens,
        Digit::MinutesUnits,
    ];
}

/// Hours-units may only be 0-3 while hours-tens is 2.
struct HoursUnitsLimit {
    hours_tens: u8,
}

impl DigitConstraint for HoursUnitsLimit {
    fn allows(&self, value: u8) -> bool {
        self.hours_tens != 2 || value <= 3
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitClock {
    hours_tens: DigitCounter,
    hours_units: DigitCounter,
    minutes_tens: DigitCounter,
    minutes_units: DigitCounter,
}

impl DigitClock {
    pub fn from_time(time: FullHours) -> Self {
        let digit = |v: u32| (v % 10) as u8;
        let tens = |v: u32| (v / 10) as u8;
        // FullHours guarantees every digit is within its counter's range
        Self {
            hours_tens: DigitCounter::clamped(tens(time.hours()), 2),
            hours_units: DigitCounter::clamped(digit(time.hours()), 9),
            minutes_tens: DigitCounter::clamped(tens(time.minutes()), 5),
            minutes_units: DigitCounter::clamped(digit(time.minutes()), 9),
        }
    }

    /// Clock from raw digits `[h1, h2, m1, m2]`, each within its own range.
    ///
    /// The hours-units limit is not applied here; it takes effect on the
    /// next change of either hours digit.
    pub fn from_digits(digits: [u8; 4]) -> PickerResult<Self> {
        Ok(Self {
            hours_tens: DigitCounter::new(digits[0], 2)?,
            hours_units: DigitCounter::new(digits[1], 9)?,
            minutes_tens: DigitCounter::new(digits[2], 5)?,
            minutes_units: DigitCounter::new(digits[3], 9)?,
        })
    }

    pub fn digit(&self, digit: Digit) -> u8 {
        self.counter(digit).value()
    }

    pub fn digits(&self) -> [u8; 4] {
        Digit::ALL.map(|d| self.digit(d))
    }

    /// Composite time of the four digits. Hours above 23, only reachable
    /// through `from_digits`, read as 23.
    pub fn time(&self) -> FullHours {
        let hours = u32::from(self.hours_tens.value()) * 10 + u32::from(self.hours_units.value());
        let minutes =
            u32::from(self.minutes_tens.value()) * 10 + u32::from(self.minutes_units.value());
        FullHours::new(hours.min(23), minutes).unwrap_or_else(|_| FullHours::midnight())
    }

    /// Step `digit` up. Returns the new time if it changed and is valid.
    pub fn increment(&mut self, digit: Digit, validator: &dyn TimeValidator) -> Option<FullHours> {
        let limit = self.units_limit(digit);
        let next = self.counter(digit).incremented(limit.as_ref().map(|l| l as &dyn DigitConstraint));
        self.change(digit, next, validator)
    }

    /// Step `digit` down. Returns the new time if it changed and is valid.
    pub fn decrement(&mut self, digit: Digit, validator: &dyn TimeValidator) -> Option<FullHours> {
        let limit = self.units_limit(digit);
        let next = self.counter(digit).decremented(limit.as_ref().map(|l| l as &dyn DigitConstraint));
        self.change(digit, next, validator)
    }

    /// Set `digit` directly (clamped to its range).
    pub fn set(&mut self, digit: Digit, value: u8, validator: &dyn TimeValidator) -> Option<FullHours> {
        self.change(digit, Some(value), validator)
    }

    fn change(
        &mut self,
        digit: Digit,
        next: Option<u8>,
        validator: &dyn TimeValidator,
    ) -> Option<FullHours> {
        let Some(next) = next else {
            log::log_event(&format!("{:?} has no allowed value, unchanged", digit));
            return None;
        };
        let before = self.digits();
        self.counter_mut(digit).set(next);

        if digit == Digit::HoursTens && self.hours_tens.value() == 2 && self.hours_units.value() > 3 {
            self.hours_units.set(3);
        }

        if self.digits() == before {
            return None;
        }
        let time = self.time();
        if !validator.is_valid(time) {
            log::log_event(&format!("time {} rejected by validator", time));
            return None;
        }
        Some(time)
    }

    fn units_limit(&self, digit: Digit) -> Option<HoursUnitsLimit> {
        (digit == Digit::HoursUnits).then_some(HoursUnitsLimit {
            hours_tens: self.hours_tens.value(),
        })
    }

    fn counter(&self, digit: Digit) -> &DigitCounter {
        match digit {
            Digit::HoursTens => &self.hours_tens,
            Digit::HoursUnits => &self.hours_units,
            Digit::MinutesTens => &self.minutes_tens,
            Digit::MinutesUnits => &self.minutes_units,
        }
    }

    fn counter_mut(&mut self, digit: Digit) -> &mut DigitCounter {
        match digit {
            Digit::HoursTens => &mut self.hours_tens,
            Digit::HoursUnits => &mut self.hours_units,
            Digit::MinutesTens => &mut self.minutes_tens,
            Digit::MinutesUnits => &mut self.minutes_units,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hours: u32, minutes: u32) -> FullHours {
        FullHours::new(hours, minutes).unwrap()
    }

    #[test]
    fn test_digits_from_time() {
        let clock = DigitClock::from_time(at(17, 45));
        assert_eq!(clock.digits(), [1, 7, 4, 5]);
        assert_eq!(clock.time(), at(17, 45));
    }

    #[test]
    fn test_tens_two_clamps_units() {
        let mut clock = DigitClock::from_digits([2, 7, 0, 0]).unwrap();
        assert_eq!(clock.set(Digit::HoursTens, 2, &AnyTime), Some(at(23, 0)));
        assert_eq!(clock.digit(Digit::HoursUnits), 3);
    }

    #[test]
    fn test_increment_tens_into_twenty() {
        let mut clock = DigitClock::from_time(at(19, 30));
        assert_eq!(clock.increment(Digit::HoursTens, &AnyTime), Some(at(23, 30)));
    }

    #[test]
    fn test_units_limited_while_tens_is_two() {
        let mut clock = DigitClock::from_time(at(23, 0));
        assert_eq!(clock.increment(Digit::HoursUnits, &AnyTime), Some(at(20, 0)));
        assert_eq!(clock.decrement(Digit::HoursUnits, &AnyTime), Some(at(23, 0)));

        let mut clock = DigitClock::from_time(at(13, 0));
        assert_eq!(clock.increment(Digit::HoursUnits, &AnyTime), Some(at(14, 0)));
    }

    #[test]
    fn test_minutes_wrap() {
        let mut clock = DigitClock::from_time(at(8, 59));
        assert_eq!(clock.increment(Digit::MinutesUnits, &AnyTime), Some(at(8, 50)));
        assert_eq!(clock.increment(Digit::MinutesTens, &AnyTime), Some(at(8, 0)));
        assert_eq!(clock.decrement(Digit::MinutesTens, &AnyTime), Some(at(8, 50)));
    }

    #[test]
    fn test_rejected_time_keeps_digits_but_reports_nothing() {
        let mornings_only = |t: FullHours| t.hours() < 12;
        let mut clock = DigitClock::from_time(at(9, 0));

        assert_eq!(clock.increment(Digit::HoursTens, &mornings_only), None);
        assert_eq!(clock.digits(), [1, 9, 0, 0]);

        assert_eq!(clock.decrement(Digit::HoursTens, &mornings_only), Some(at(9, 0)));
    }

    #[test]
    fn test_from_digits_rejects_out_of_range() {
        assert!(DigitClock::from_digits([3, 0, 0, 0]).is_err());
        assert!(DigitClock::from_digits([0, 0, 6, 0]).is_err());
    }
}
