//! Time values and the 12-hour wheel picker.

pub mod ampm;
pub mod hours;

pub use ampm::{label, AmPmPicker};
pub use hours::{AmPmHours, FullHours, Hours, Meridiem};
