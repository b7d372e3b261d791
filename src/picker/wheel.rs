//! Scroll wheel picker: one column of a date or time picker.
//!
//! Owns the choice list, the live gesture offset and at most one in-flight
//! settle. Every committed change is reported exactly once, as the return
//! value of the call that committed it.

use std::ops::RangeInclusive;
use std::time::Duration;

use crate::error::{PickerError, PickerResult};
use crate::fling::{DecayModel, FlingSettler, Settle};
use crate::log;
use crate::scroll::{LabelAlphas, ScrollOffset};
use crate::settle::{next_generation, SettleEvent, SettleSender, SettleTask};

use super::choice::OrderedChoiceList;
use super::selector::SelectionMode;
use super::traits::{Picker, SettleOutcome};

/// A settle computed for a released gesture, not yet applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSettle {
    pub generation: u64,
    pub settle: Settle,
}

/// The labels visible around the selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbours<'a, T> {
    pub previous: Option<&'a T>,
    pub current: &'a T,
    pub next: Option<&'a T>,
}

#[derive(Debug)]
pub struct WheelPicker<T> {
    choices: OrderedChoiceList<T>,
    mode: SelectionMode,
    offset: ScrollOffset,
    settler: FlingSettler,
    /// Ticket of the settle allowed to commit; anything else is stale
    generation: u64,
    settling: Option<SettleTask>,
    dragging: bool,
}

impl<T: Clone + PartialEq> WheelPicker<T> {
    pub fn new(items: Vec<T>, value: &T, mode: SelectionMode, slot_size: f32) -> PickerResult<Self> {
        let settler = FlingSettler::new(slot_size)?;
        Ok(Self {
            choices: OrderedChoiceList::new(items, value)?,
            mode,
            offset: ScrollOffset::new(settler.slot_size()),
            settler,
            generation: next_generation(),
            settling: None,
            dragging: false,
        })
    }

    pub fn value(&self) -> &T {
        self.choices.current()
    }

    pub fn items(&self) -> &[T] {
        self.choices.items()
    }

    pub fn slot_size(&self) -> f32 {
        self.settler.slot_size()
    }

    pub fn is_settling(&self) -> bool {
        self.settling.is_some()
    }

    /// Push a value changed by the owner. Does not count as a change report.
    pub fn set_value(&mut self, value: &T) -> PickerResult<()> {
        self.choices.select(value)
    }

    /// Replace the list, e.g. after a cascade changed the valid range.
    pub fn set_items(&mut self, items: Vec<T>, value: &T) -> PickerResult<()> {
        self.choices = OrderedChoiceList::new(items, value)?;
        Ok(())
    }

    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
    }

    /// Previous, current and next items; wraps in cyclic mode.
    pub fn neighbours(&self) -> Neighbours<'_, T> {
        let index = self.choices.current_index();
        let len = self.choices.len();
        let (previous, next) = match self.mode {
            SelectionMode::Bounded => (
                index.checked_sub(1).and_then(|i| self.choices.get(i)),
                self.choices.get(index + 1),
            ),
            SelectionMode::Cyclic if len > 1 => (
                self.choices.get((index + len - 1) % len),
                self.choices.get((index + 1) % len),
            ),
            SelectionMode::Cyclic => (None, None),
        };
        Neighbours {
            previous,
            current: self.choices.current(),
            next,
        }
    }

    pub fn alphas(&self, minimum_alpha: f32) -> LabelAlphas {
        self.offset.alphas(minimum_alpha)
    }

    /// Compute the settle for the current gesture under a fresh ticket.
    ///
    /// The caller drives the frames itself and must call [`finish`] with
    /// the returned generation.
    ///
    /// [`finish`]: WheelPicker::finish
    pub fn release(&mut self, velocity: f32, decay: &dyn DecayModel) -> PendingSettle {
        self.cancel_settle();
        self.dragging = false;
        self.generation = next_generation();
        let settle = self.settler.settle(self.offset.raw(), velocity, decay);
        log::log_gesture("release", self.offset.raw(), Some(velocity));
        PendingSettle {
            generation: self.generation,
            settle,
        }
    }

    /// Apply a frame of the settle identified by `generation`.
    pub fn apply_frame(&mut self, generation: u64, offset: f32) -> bool {
        if generation != self.generation || self.dragging {
            return false;
        }
        self.offset.snap_to(offset);
        true
    }

    /// Finish the settle identified by `generation`, landing `slots` away.
    ///
    /// Returns the new value when the selection changed. Stale generations
    /// are ignored.
    pub fn finish(&mut self, generation: u64, slots: i64) -> Option<T> {
        if generation != self.generation || self.dragging {
            return None;
        }
        self.settling = None;
        self.commit(slots)
    }

    /// Release and settle synchronously, walking every frame.
    pub fn settle_now(&mut self, velocity: f32, decay: &dyn DecayModel) -> Option<T> {
        let PendingSettle { generation, settle } = self.release(velocity, decay);
        for frame in settle.frames {
            self.apply_frame(generation, frame);
        }
        self.finish(generation, settle.slots)
    }

    /// Move the selection by `positions` items without a gesture.
    pub fn shift(&mut self, positions: i64) -> Option<T> {
        self.cancel_settle();
        self.dragging = false;
        self.generation = next_generation();
        self.commit(positions.saturating_neg())
    }

    fn commit(&mut self, slots: i64) -> Option<T> {
        let current = self.choices.current_index() as i64;
        let index = self.mode.resolve(current.saturating_sub(slots), self.choices.len());
        self.offset.reset();
        if index == self.choices.current_index() {
            return None;
        }
        self.choices.select_index(index);
        log::log_event(&format!("picker committed index {} ({} slots)", index, slots));
        Some(self.choices.current().clone())
    }

    fn cancel_settle(&mut self) {
        if let Some(task) = self.settling.take() {
            task.cancel();
        }
    }
}

impl WheelPicker<i32> {
    /// Integer range picker, cyclic or bounded.
    pub fn from_range(
        range: RangeInclusive<i32>,
        value: i32,
        cyclic: bool,
        slot_size: f32,
    ) -> PickerResult<Self> {
        let items: Vec<i32> = range.collect();
        if items.is_empty() {
            return Err(PickerError::EmptyList);
        }
        Self::new(items, &value, SelectionMode::from_cyclic(cyclic), slot_size)
    }
}

impl<T: Clone + PartialEq> Picker for WheelPicker<T> {
    fn len(&self) -> usize {
        self.choices.len()
    }

    fn selected_index(&self) -> usize {
        self.choices.current_index()
    }

    fn mode(&self) -> SelectionMode {
        self.mode
    }

    fn offset(&self) -> &ScrollOffset {
        &self.offset
    }

    fn begin_drag(&mut self) {
        self.cancel_settle();
        // Invalidate anything the cancelled task already queued
        self.generation = next_generation();
        self.dragging = true;
        log::log_gesture("begin", self.offset.raw(), None);
    }

    fn drag_by(&mut self, delta: f32) {
        if !self.dragging {
            self.begin_drag();
        }
        self.offset.apply(delta);
    }

    fn release_animated(
        &mut self,
        velocity: f32,
        decay: &dyn DecayModel,
        frame_interval: Duration,
        events: &SettleSender,
    ) -> PickerResult<()> {
        let PendingSettle { generation, settle } = self.release(velocity, decay);
        self.settling = Some(SettleTask::spawn(
            generation,
            settle,
            frame_interval,
            events.clone(),
        ));
        Ok(())
    }

    fn handle_settle(&mut self, event: &SettleEvent) -> SettleOutcome {
        match *event {
            SettleEvent::Frame { generation, offset } => {
                if self.apply_frame(generation, offset) {
                    SettleOutcome::Frame
                } else {
                    SettleOutcome::Ignored
                }
            }
            SettleEvent::Finished {
                generation, slots, ..
            } => {
                if generation != self.generation || self.dragging {
                    return SettleOutcome::Ignored;
                }
                match self.finish(generation, slots) {
                    Some(_) => SettleOutcome::Committed,
                    None => SettleOutcome::Unchanged,
                }
            }
        }
    }

    fn step(&mut self, positions: i64) -> bool {
        self.shift(positions).is_some()
    }
}

impl<T> Drop for WheelPicker<T> {
    fn drop(&mut self) {
        if let Some(task) = self.settling.take() {
            task.cancel();
        }
    }
}
