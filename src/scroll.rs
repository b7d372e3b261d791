//! Gesture offset tracking for scroll pickers.
//!
//! `ScrollOffset` holds the raw drag displacement of one picker and exposes
//! the per-slot reduced value used to interpolate labels between slots.
//! `VelocityTracker` accumulates timestamped drag deltas over a short
//! window and turns them into a release velocity.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut tracker = VelocityTracker::default();
//!
//! // In event loop:
//! tracker.record(delta);
//! picker.drag_by(delta);
//!
//! // On release:
//! picker.release(tracker.velocity(), &decay);
//! ```

use std::time::{Duration, Instant};

/// Lowest alpha a neighbouring label fades to.
pub const DEFAULT_MINIMUM_ALPHA: f32 = 0.3;

/// Raw drag displacement measured in the same unit as one slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOffset {
    raw: f32,
    slot_size: f32,
}

/// Opacity of the three visible labels around the selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAlphas {
    pub previous: f32,
    pub current: f32,
    pub next: f32,
}

impl ScrollOffset {
    /// `slot_size` must already be validated as positive and finite.
    pub fn new(slot_size: f32) -> Self {
        Self { raw: 0.0, slot_size }
    }

    pub fn raw(&self) -> f32 {
        self.raw
    }

    pub fn slot_size(&self) -> f32 {
        self.slot_size
    }

    /// Apply a drag delta immediately.
    pub fn apply(&mut self, delta: f32) {
        self.raw += delta;
    }

    /// Jump to an absolute offset (used for animation frames).
    pub fn snap_to(&mut self, offset: f32) {
        self.raw = offset;
    }

    pub fn reset(&mut self) {
        self.raw = 0.0;
    }

    /// Offset reduced into `(-slot_size, slot_size)`, keeping the sign.
    pub fn coerced(&self) -> f32 {
        self.raw % self.slot_size
    }

    /// Alphas for previous, current and next labels at this offset.
    ///
    /// Dragging down fades in the previous label, dragging up the next one.
    pub fn alphas(&self, minimum_alpha: f32) -> LabelAlphas {
        let fraction = self.coerced() / self.slot_size;
        LabelAlphas {
            previous: minimum_alpha.max(fraction),
            current: minimum_alpha.max(1.0 - fraction.abs()),
            next: minimum_alpha.max(-fraction),
        }
    }
}

/// Estimates release velocity from recent drag deltas.
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    /// Samples of (time, delta) inside the window
    samples: Vec<(Instant, f32)>,
    /// Window of samples considered for the estimate
    window: Duration,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

impl VelocityTracker {
    pub fn new(window: Duration) -> Self {
        Self {
            samples: Vec::new(),
            window,
        }
    }

    /// Record a drag delta observed now.
    pub fn record(&mut self, delta: f32) {
        self.record_at(Instant::now(), delta);
    }

    /// Record a drag delta observed at `at`.
    pub fn record_at(&mut self, at: Instant, delta: f32) {
        self.samples.push((at, delta));
        let window = self.window;
        self.samples
            .retain(|(when, _)| at.saturating_duration_since(*when) <= window);
    }

    /// Velocity in units per second over the retained window.
    ///
    /// A single sample, or samples sharing one instant, give zero.
    pub fn velocity(&self) -> f32 {
        let (Some(first), Some(last)) = (self.samples.first(), self.samples.last()) else {
            return 0.0;
        };
        let elapsed = last.0.saturating_duration_since(first.0).as_secs_f32();
        if elapsed <= f32::EPSILON {
            return 0.0;
        }
        // The first sample marks the start of the interval
        let distance: f32 = self.samples.iter().skip(1).map(|(_, d)| d).sum();
        distance / elapsed
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerced_keeps_raw() {
        let mut offset = ScrollOffset::new(40.0);
        offset.apply(50.0);
        offset.apply(45.0);
        assert_eq!(offset.raw(), 95.0);
        assert_eq!(offset.coerced(), 15.0);

        offset.snap_to(-95.0);
        assert_eq!(offset.coerced(), -15.0);
    }

    #[test]
    fn test_alphas_follow_drag_direction() {
        let mut offset = ScrollOffset::new(40.0);
        let rest = offset.alphas(DEFAULT_MINIMUM_ALPHA);
        assert_eq!(rest.current, 1.0);
        assert_eq!(rest.previous, DEFAULT_MINIMUM_ALPHA);
        assert_eq!(rest.next, DEFAULT_MINIMUM_ALPHA);

        offset.apply(30.0);
        let down = offset.alphas(DEFAULT_MINIMUM_ALPHA);
        assert_eq!(down.previous, 0.75);
        assert_eq!(down.current, DEFAULT_MINIMUM_ALPHA);
        assert_eq!(down.next, DEFAULT_MINIMUM_ALPHA);

        offset.snap_to(-10.0);
        let up = offset.alphas(DEFAULT_MINIMUM_ALPHA);
        assert_eq!(up.next, DEFAULT_MINIMUM_ALPHA);
        assert_eq!(up.current, 0.75);
    }

    #[test]
    fn test_velocity_over_window() {
        let mut tracker = VelocityTracker::new(Duration::from_millis(100));
        let start = Instant::now();

        tracker.record_at(start, 5.0);
        tracker.record_at(start + Duration::from_millis(25), 10.0);
        tracker.record_at(start + Duration::from_millis(50), 10.0);

        // 20 units over 50ms
        assert!((tracker.velocity() - 400.0).abs() < 0.01);
    }

    #[test]
    fn test_velocity_drops_stale_samples() {
        let mut tracker = VelocityTracker::new(Duration::from_millis(100));
        let start = Instant::now();

        tracker.record_at(start, 100.0);
        tracker.record_at(start + Duration::from_millis(500), -4.0);

        // Only one sample left in the window
        assert_eq!(tracker.velocity(), 0.0);

        tracker.reset();
        assert_eq!(tracker.velocity(), 0.0);
    }
}
