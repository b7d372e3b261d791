//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `wheel_column` - Scroll wheel with faded neighbour labels
//! - `digit_column` - Single clock digit with chevrons
//! - `separators` - Colon between hours and minutes

mod digit_column;
mod separators;
mod wheel_column;

// Re-export all render functions for use in ui.rs
pub use digit_column::render_digit_column;
pub use separators::render_colon;
pub use wheel_column::{render_wheel_column, WheelLabels};
