//! Up/down digit pickers and the four-digit clock built from them.

pub mod clock;
pub mod counter;

pub use clock::{AnyTime, Digit, DigitClock, TimeValidator};
pub use counter::{DigitConstraint, DigitCounter};
