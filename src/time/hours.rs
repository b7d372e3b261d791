//! 24-hour and 12-hour time values.

use std::fmt;

use chrono::{NaiveTime, Timelike};

use crate::error::{PickerError, PickerResult};

/// Common accessors for time values.
pub trait Hours {
    fn hours(&self) -> u32;
    fn minutes(&self) -> u32;
}

/// Time of day on a 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FullHours {
    hours: u32,
    minutes: u32,
}

impl FullHours {
    pub fn new(hours: u32, minutes: u32) -> PickerResult<Self> {
        if hours > 23 || minutes > 59 {
            return Err(PickerError::InvalidTime { hours, minutes });
        }
        Ok(Self { hours, minutes })
    }

    pub fn midnight() -> Self {
        Self { hours: 0, minutes: 0 }
    }

    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self {
            hours: time.hour(),
            minutes: time.minute(),
        }
    }

    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hours, self.minutes, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl Hours for FullHours {
    fn hours(&self) -> u32 {
        self.hours
    }

    fn minutes(&self) -> u32 {
        self.minutes
    }
}

impl fmt::Display for FullHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

impl From<NaiveTime> for FullHours {
    fn from(time: NaiveTime) -> Self {
        Self::from_naive_time(time)
    }
}

impl From<FullHours> for NaiveTime {
    fn from(time: FullHours) -> Self {
        time.to_naive_time()
    }
}

/// Half of the day on a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    AM,
    PM,
}

impl Meridiem {
    pub fn label(self) -> &'static str {
        match self {
            Meridiem::AM => "AM",
            Meridiem::PM => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Time of day on a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AmPmHours {
    hours: u32,
    minutes: u32,
    meridiem: Meridiem,
}

impl AmPmHours {
    pub fn new(hours: u32, minutes: u32, meridiem: Meridiem) -> PickerResult<Self> {
        if !(1..=12).contains(&hours) || minutes > 59 {
            return Err(PickerError::InvalidTime { hours, minutes });
        }
        Ok(Self {
            hours,
            minutes,
            meridiem,
        })
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    pub fn with_hours(self, hours: u32) -> PickerResult<Self> {
        Self::new(hours, self.minutes, self.meridiem)
    }

    pub fn with_minutes(self, minutes: u32) -> PickerResult<Self> {
        Self::new(self.hours, minutes, self.meridiem)
    }

    pub fn with_meridiem(self, meridiem: Meridiem) -> Self {
        Self { meridiem, ..self }
    }
}

impl Hours for AmPmHours {
    fn hours(&self) -> u32 {
        self.hours
    }

    fn minutes(&self) -> u32 {
        self.minutes
    }
}

impl fmt::Display for AmPmHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02} {}", self.hours, self.minutes, self.meridiem)
    }
}

impl From<AmPmHours> for FullHours {
    fn from(time: AmPmHours) -> Self {
        let hours = match (time.meridiem, time.hours) {
            (Meridiem::AM, 12) => 0,
            (Meridiem::AM, h) => h,
            (Meridiem::PM, 12) => 12,
            (Meridiem::PM, h) => h + 12,
        };
        FullHours {
            hours,
            minutes: time.minutes,
        }
    }
}

impl From<FullHours> for AmPmHours {
    fn from(time: FullHours) -> Self {
        let meridiem = if time.hours < 12 { Meridiem::AM } else { Meridiem::PM };
        let hours = match time.hours % 12 {
            0 => 12,
            h => h,
        };
        AmPmHours {
            hours,
            minutes: time.minutes,
            meridiem,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_hours_validation() {
        assert!(FullHours::new(23, 59).is_ok());
        assert_eq!(
            FullHours::new(24, 0),
            Err(PickerError::InvalidTime { hours: 24, minutes: 0 })
        );
        assert!(FullHours::new(12, 60).is_err());
    }

    #[test]
    fn test_ampm_validation() {
        assert!(AmPmHours::new(12, 0, Meridiem::AM).is_ok());
        assert!(AmPmHours::new(0, 0, Meridiem::AM).is_err());
        assert!(AmPmHours::new(13, 0, Meridiem::PM).is_err());
    }

    #[test]
    fn test_twelve_hour_conversion() {
        let cases = [
            ((12, Meridiem::AM), 0),
            ((1, Meridiem::AM), 1),
            ((11, Meridiem::AM), 11),
            ((12, Meridiem::PM), 12),
            ((1, Meridiem::PM), 13),
            ((11, Meridiem::PM), 23),
        ];
        for ((h, m), full) in cases {
            let ampm = AmPmHours::new(h, 30, m).unwrap();
            let converted = FullHours::from(ampm);
            assert_eq!(converted.hours(), full);
            assert_eq!(AmPmHours::from(converted), ampm);
        }
    }

    #[test]
    fn test_naive_time_round_trip() {
        let time = NaiveTime::from_hms_opt(7, 45, 12).unwrap();
        let full = FullHours::from(time);
        assert_eq!(full.to_string(), "07:45");
        assert_eq!(NaiveTime::from(full), NaiveTime::from_hms_opt(7, 45, 0).unwrap());
    }

    #[test]
    fn test_display() {
        let t = AmPmHours::new(9, 5, Meridiem::PM).unwrap();
        assert_eq!(t.to_string(), "09:05 PM");
    }
}
