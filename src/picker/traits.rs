//! Picker trait definition
//!
//! An object-safe trait over scroll pickers of any item type, so a host can
//! route gestures to a column without knowing what the column holds.

use std::time::Duration;

use crate::error::PickerResult;
use crate::fling::DecayModel;
use crate::scroll::ScrollOffset;
use crate::settle::{SettleEvent, SettleSender};

use super::selector::SelectionMode;

/// What a settle event did to a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// The event belongs to another picker or to a superseded settle
    Ignored,
    /// An intermediate frame was applied to the offset
    Frame,
    /// The settle finished and changed the selected value
    Committed,
    /// The settle finished on the value that was already selected
    Unchanged,
}

/// A generic scroll picker driven by drag gestures
///
/// Item-typed access lives on the concrete picker; this trait carries the
/// gesture plumbing, with default implementations for keyboard stepping.
///
/// # Example
///
/// ```ignore
/// fn route(columns: &mut [&mut dyn Picker], event: &SettleEvent) -> Option<usize> {
///     columns
///         .iter_mut()
///         .position(|c| c.handle_settle(event) == SettleOutcome::Committed)
/// }
/// ```
pub trait Picker {
    /// Number of items
    fn len(&self) -> usize;

    /// Index of the selected item
    fn selected_index(&self) -> usize;

    /// Bounded or cyclic behaviour
    fn mode(&self) -> SelectionMode;

    /// Current gesture offset
    fn offset(&self) -> &ScrollOffset;

    /// Start a new gesture, superseding any in-flight settle
    fn begin_drag(&mut self);

    /// Apply a raw drag delta
    fn drag_by(&mut self, delta: f32);

    /// Release the gesture and settle it on a spawned task
    fn release_animated(
        &mut self,
        velocity: f32,
        decay: &dyn DecayModel,
        frame_interval: Duration,
        events: &SettleSender,
    ) -> PickerResult<()>;

    /// Apply one settle event; returns what it did
    fn handle_settle(&mut self, event: &SettleEvent) -> SettleOutcome;

    /// Move the selection by `positions`; returns true when it changed
    fn step(&mut self, positions: i64) -> bool;

    /// Always false: pickers are never empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Select the next item; returns true when it changed
    fn select_next(&mut self) -> bool {
        self.step(1)
    }

    /// Select the previous item; returns true when it changed
    fn select_prev(&mut self) -> bool {
        self.step(-1)
    }
}
