//! Generic picker module
//!
//! Offset to index selection, the ordered choice list, and the wheel picker
//! that turns drag gestures into committed selections.

pub mod choice;
pub mod selector;
mod traits;
pub mod wheel;

pub use choice::OrderedChoiceList;
pub use selector::{index_for_slots, selected_index, SelectionMode};
pub use traits::{Picker, SettleOutcome};
pub use wheel::{Neighbours, PendingSettle, WheelPicker};
