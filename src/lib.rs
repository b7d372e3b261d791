//! Scroll-wheel pickers for dates, times and digits.
//!
//! The crate is split into leaf models (`picker::selector`, `fling`,
//! `calendar::range`, `digits`) and the controllers that combine them
//! (`picker::wheel`, `calendar::date_picker`, `time::ampm`). Hosts forward
//! drag deltas and releases into a [`picker::WheelPicker`] and receive each
//! committed change exactly once.

pub mod calendar;
pub mod config;
pub mod digits;
pub mod error;
pub mod fling;
pub mod log;
pub mod picker;
pub mod scroll;
pub mod settle;
pub mod time;

pub use error::{PickerError, PickerResult, PickwheelError, Result};
