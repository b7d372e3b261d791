//! Calendar arithmetic for date pickers.
//!
//! - `range` - valid year/month/day lists between inclusive bounds
//! - `date_picker` - three-column date model with cascading edits
//! - `window` - rolling window of recent dates with optional filtering

pub mod date_picker;
pub mod range;
pub mod window;

pub use date_picker::{ColumnModes, DateFormats, DatePicker};
pub use range::{days_in_month, is_leap_year, resolve, CalendarRanges, DateBounds};
pub use window::{nearest, DateFilter, DateLabels, DateWindow};
