//! Single wrapping digit with an optional value constraint.

use crate::error::{PickerError, PickerResult};

/// Pure predicate restricting which values a digit may take.
pub trait DigitConstraint {
    fn allows(&self, value: u8) -> bool;
}

impl<F: Fn(u8) -> bool> DigitConstraint for F {
    fn allows(&self, value: u8) -> bool {
        self(value)
    }
}

/// A counter in `[0, max_value]` that wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitCounter {
    value: u8,
    max_value: u8,
}

impl DigitCounter {
    pub fn new(value: u8, max_value: u8) -> PickerResult<Self> {
        if value > max_value {
            return Err(PickerError::InvalidDigit {
                value,
                max: max_value,
            });
        }
        Ok(Self { value, max_value })
    }

    /// Counter with `value` pulled into range; for callers that already
    /// guarantee the range.
    pub(crate) const fn clamped(value: u8, max_value: u8) -> Self {
        let value = if value > max_value { max_value } else { value };
        Self { value, max_value }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn max_value(&self) -> u8 {
        self.max_value
    }

    /// Overwrite the value, clamped to the maximum.
    pub fn set(&mut self, value: u8) {
        self.value = value.min(self.max_value);
    }

    /// Next value upward, skipping values the constraint rejects.
    ///
    /// Returns `None` when no value within one full turn is allowed; the
    /// counter is left untouched in that case.
    pub fn incremented(&self, constraint: Option<&dyn DigitConstraint>) -> Option<u8> {
        self.advance(constraint, |v| if v >= self.max_value { 0 } else { v + 1 })
    }

    /// Next value downward, skipping values the constraint rejects.
    pub fn decremented(&self, constraint: Option<&dyn DigitConstraint>) -> Option<u8> {
        self.advance(constraint, |v| if v == 0 { self.max_value } else { v - 1 })
    }

    /// Step up and store the result. Returns true when the value changed.
    pub fn increment(&mut self, constraint: Option<&dyn DigitConstraint>) -> bool {
        let next = self.incremented(constraint);
        self.store(next)
    }

    /// Step down and store the result. Returns true when the value changed.
    pub fn decrement(&mut self, constraint: Option<&dyn DigitConstraint>) -> bool {
        let next = self.decremented(constraint);
        self.store(next)
    }

    fn advance(&self, constraint: Option<&dyn DigitConstraint>, step: impl Fn(u8) -> u8) -> Option<u8> {
        let mut next = step(self.value);
        let Some(constraint) = constraint else {
            return Some(next);
        };
        let mut attempts = 0;
        while !constraint.allows(next) {
            if attempts >= u16::from(self.max_value) + 1 {
                return None;
            }
            next = step(next);
            attempts += 1;
        }
        Some(next)
    }

    fn store(&mut self, next: Option<u8>) -> bool {
        match next {
            Some(v) if v != self.value => {
                self.value = v;
                true
            }
            _ => false,
        }
    }
}
