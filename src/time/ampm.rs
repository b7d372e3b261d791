//! Three-wheel 12-hour time picker: hours, minutes, AM/PM.

use crate::error::{PickerError, PickerResult};
use crate::picker::{SelectionMode, WheelPicker};

use super::hours::{AmPmHours, Hours, Meridiem};

/// Format `n` as a wheel label, optionally padded to two digits.
pub fn label(n: u32, leading_zero: bool) -> String {
    if leading_zero {
        format!("{:02}", n)
    } else {
        n.to_string()
    }
}

#[derive(Debug)]
pub struct AmPmPicker {
    hours: WheelPicker<u32>,
    minutes: WheelPicker<u32>,
    meridiem: WheelPicker<Meridiem>,
}

impl AmPmPicker {
    /// `hours_values` and `minutes_values` restrict the hour and minute
    /// wheels. A current hour or minute that is not offered is replaced by
    /// the closest offered one. Offered hours must lie in 1-12 and offered
    /// minutes in 0-59.
    pub fn new(
        value: AmPmHours,
        hours_values: Option<Vec<u32>>,
        minutes_values: Option<Vec<u32>>,
        slot_size: f32,
    ) -> PickerResult<Self> {
        let hours_range = hours_values.unwrap_or_else(|| (1..=12).collect());
        let minutes_range = minutes_values.unwrap_or_else(|| (0..=59).collect());
        if let Some(&hours) = hours_range.iter().find(|h| !(1..=12).contains(*h)) {
            return Err(PickerError::InvalidTime { hours, minutes: value.minutes() });
        }
        if let Some(&minutes) = minutes_range.iter().find(|m| **m > 59) {
            return Err(PickerError::InvalidTime { hours: value.hours(), minutes });
        }
        let hour = nearest_value(value.hours(), &hours_range).unwrap_or(value.hours());
        let minute = nearest_value(value.minutes(), &minutes_range).unwrap_or(value.minutes());

        Ok(Self {
            hours: WheelPicker::new(hours_range, &hour, SelectionMode::Cyclic, slot_size)?,
            minutes: WheelPicker::new(minutes_range, &minute, SelectionMode::Cyclic, slot_size)?,
            meridiem: WheelPicker::new(
                vec![Meridiem::AM, Meridiem::PM],
                &value.meridiem(),
                SelectionMode::Cyclic,
                slot_size,
            )?,
        })
    }

    /// Current time composed from the three wheels.
    pub fn value(&self) -> PickerResult<AmPmHours> {
        AmPmHours::new(*self.hours.value(), *self.minutes.value(), *self.meridiem.value())
    }

    pub fn hours(&self) -> &WheelPicker<u32> {
        &self.hours
    }

    pub fn hours_mut(&mut self) -> &mut WheelPicker<u32> {
        &mut self.hours
    }

    pub fn minutes(&self) -> &WheelPicker<u32> {
        &self.minutes
    }

    pub fn minutes_mut(&mut self) -> &mut WheelPicker<u32> {
        &mut self.minutes
    }

    pub fn meridiem(&self) -> &WheelPicker<Meridiem> {
        &self.meridiem
    }

    pub fn meridiem_mut(&mut self) -> &mut WheelPicker<Meridiem> {
        &mut self.meridiem
    }
}

/// `value` if offered, otherwise the closest offered value (first wins on ties).
fn nearest_value(value: u32, offered: &[u32]) -> Option<u32> {
    if offered.contains(&value) {
        return Some(value);
    }
    offered
        .iter()
        .copied()
        .min_by_key(|v| v.abs_diff(value))
}
