//! Offset to index mapping for scroll pickers.
//!
//! A drag moves the list by whole slots: dragging down (positive offset)
//! reveals earlier items, dragging up reveals later ones. The selected
//! index is the current index minus the number of whole slots travelled.

use crate::error::{PickerError, PickerResult};

use super::choice::position_of;

/// How a picker behaves past either end of its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Stops at the first and last item
    #[default]
    Bounded,
    /// Wraps from the last item to the first and vice versa
    Cyclic,
}

impl SelectionMode {
    pub fn from_cyclic(cyclic: bool) -> Self {
        if cyclic { Self::Cyclic } else { Self::Bounded }
    }

    /// Resolve a possibly out-of-range index against a list of `len` items.
    pub fn resolve(self, index: i64, len: usize) -> usize {
        let len = len as i64;
        match self {
            Self::Bounded => index.clamp(0, len - 1) as usize,
            Self::Cyclic => index.rem_euclid(len) as usize,
        }
    }
}

/// Check that `slot_size` can be used as a quantization unit.
pub fn validate_slot_size(slot_size: f32) -> PickerResult<f32> {
    if slot_size.is_finite() && slot_size > 0.0 {
        Ok(slot_size)
    } else {
        Err(PickerError::InvalidSlotSize(slot_size))
    }
}

/// Number of whole slots covered by `offset`, rounding toward negative infinity.
///
/// Offsets beyond the `i64` range, infinities included, saturate to
/// `i64::MIN` / `i64::MAX`; NaN covers no slots.
pub fn offset_slots(offset: f32, slot_size: f32) -> i64 {
    // `as` saturates and maps NaN to 0
    (offset / slot_size).floor() as i64
}

/// Index selected after scrolling `list` by `offset` from `current`.
pub fn selected_index<T: PartialEq>(
    list: &[T],
    current: &T,
    offset: f32,
    slot_size: f32,
    mode: SelectionMode,
) -> PickerResult<usize> {
    let slot_size = validate_slot_size(slot_size)?;
    index_for_slots(list, current, offset_slots(offset, slot_size), mode)
}

/// Index selected after scrolling `list` by a whole number of `slots`.
pub fn index_for_slots<T: PartialEq>(
    list: &[T],
    current: &T,
    slots: i64,
    mode: SelectionMode,
) -> PickerResult<usize> {
    if list.is_empty() {
        return Err(PickerError::EmptyList);
    }
    let index = position_of(list, current)? as i64;
    Ok(mode.resolve(index.saturating_sub(slots), list.len()))
}
