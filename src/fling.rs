//! Fling settlement: from a release velocity to a slot-aligned rest offset.
//!
//! The decay model projects where a free fling would stop. That projection
//! is then snapped inside its own slot period to the nearest of
//! `-slot`, `0` or `+slot`, so a long fling still travels a whole number of
//! slots and a short one falls back or forward to the closest slot.

use crate::error::PickerResult;
use crate::picker::selector::validate_slot_size;

/// Frames produced by the default settle animation.
pub const DEFAULT_SETTLE_FRAMES: u32 = 12;

/// External decay/animation driver.
///
/// Implementations must be pure: the same inputs always give the same
/// projection and the same frames.
pub trait DecayModel {
    /// Where a fling released at `position` with `velocity` comes to rest.
    fn project(&self, position: f32, velocity: f32) -> f32;

    /// Frames from `from` to `to`; the last frame is exactly `to`.
    fn animate(&self, from: f32, to: f32, _velocity: f32) -> SettleFrames {
        SettleFrames::ease_out(from, to, DEFAULT_SETTLE_FRAMES)
    }
}

/// Exponential velocity decay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialDecay {
    pub friction_multiplier: f32,
    pub frames: u32,
}

impl Default for ExponentialDecay {
    fn default() -> Self {
        Self {
            friction_multiplier: 20.0,
            frames: DEFAULT_SETTLE_FRAMES,
        }
    }
}

impl ExponentialDecay {
    pub fn new(friction_multiplier: f32, frames: u32) -> Self {
        Self {
            friction_multiplier,
            frames,
        }
    }

    fn friction(&self) -> f32 {
        -4.2 * self.friction_multiplier
    }
}

impl DecayModel for ExponentialDecay {
    fn project(&self, position: f32, velocity: f32) -> f32 {
        let friction = self.friction();
        if velocity == 0.0 || friction == 0.0 {
            return position;
        }
        position - velocity / friction
    }

    fn animate(&self, from: f32, to: f32, _velocity: f32) -> SettleFrames {
        SettleFrames::ease_out(from, to, self.frames)
    }
}

/// Lazy, finite sequence of offsets ending exactly at the settle point.
#[derive(Debug, Clone, PartialEq)]
pub struct SettleFrames {
    from: f32,
    to: f32,
    total: u32,
    emitted: u32,
}

impl SettleFrames {
    /// Cubic ease-out over `frames` steps. Zero frames still yields `to` once.
    pub fn ease_out(from: f32, to: f32, frames: u32) -> Self {
        Self {
            from,
            to,
            total: frames.max(1),
            emitted: 0,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }
}

impl Iterator for SettleFrames {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.emitted >= self.total {
            return None;
        }
        self.emitted += 1;
        if self.emitted == self.total {
            return Some(self.to);
        }
        let t = self.emitted as f32 / self.total as f32;
        let eased = 1.0 - (1.0 - t).powi(3);
        Some(self.from + (self.to - self.from) * eased)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.total - self.emitted) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for SettleFrames {}

/// Outcome of settling one fling.
#[derive(Debug, Clone, PartialEq)]
pub struct Settle {
    /// Offset the gesture was released at
    pub from: f32,
    /// Slot-aligned rest offset
    pub target: f32,
    /// `target` expressed in whole slots
    pub slots: i64,
    /// Intermediate frames, ending at `target`
    pub frames: SettleFrames,
}

/// Snaps flings to slot multiples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingSettler {
    slot_size: f32,
}

impl FlingSettler {
    pub fn new(slot_size: f32) -> PickerResult<Self> {
        Ok(Self {
            slot_size: validate_slot_size(slot_size)?,
        })
    }

    pub fn slot_size(&self) -> f32 {
        self.slot_size
    }

    /// Settle a fling released at `current_offset` with `velocity`.
    pub fn settle(&self, current_offset: f32, velocity: f32, decay: &dyn DecayModel) -> Settle {
        let projected = decay.project(current_offset, velocity);
        let slots = self.snap_slots(projected);
        let target = slots as f32 * self.slot_size;
        Settle {
            from: current_offset,
            target,
            slots,
            frames: decay.animate(current_offset, target, velocity),
        }
    }

    /// Whole slots from zero to the slot `target` snaps to.
    ///
    /// Saturates at the `i64` range. Infinite targets land on `i64::MIN` /
    /// `i64::MAX` and NaN lands on 0.
    pub fn snap_slots(&self, target: f32) -> i64 {
        if !target.is_finite() {
            return target as i64;
        }
        let slot = self.slot_size;
        let coerced = target % slot;
        let anchors = [(-1i64, -slot), (0, 0.0), (1, slot)];
        let mut nearest = anchors[0];
        for anchor in &anchors[1..] {
            if (anchor.1 - coerced).abs() < (nearest.1 - coerced).abs() {
                nearest = *anchor;
            }
        }
        let base = (target / slot).trunc() as i64;
        base.saturating_add(nearest.0)
    }

    /// Offset `target` snaps to.
    pub fn snap(&self, target: f32) -> f32 {
        self.snap_slots(target) as f32 * self.slot_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Decay model that never moves: the fling stops where it is released.
    struct Still;

    impl DecayModel for Still {
        fn project(&self, position: f32, _velocity: f32) -> f32 {
            position
        }
    }

    #[test]
    fn test_zero_velocity_snaps_within_slot() {
        let settler = FlingSettler::new(40.0).unwrap();
        let decay = ExponentialDecay::default();

        assert_eq!(settler.settle(15.0, 0.0, &decay).target, 0.0);
        assert_eq!(settler.settle(25.0, 0.0, &decay).target, 40.0);
        assert_eq!(settler.settle(-25.0, 0.0, &decay).target, -40.0);
        assert_eq!(settler.settle(-5.0, 0.0, &decay).target, 0.0);
    }

    #[test]
    fn test_snap_keeps_whole_slots_of_long_flings() {
        let settler = FlingSettler::new(40.0).unwrap();
        // 65 = one slot + 25, snaps forward to two slots
        assert_eq!(settler.snap_slots(65.0), 2);
        // 130 = three slots + 10, stays at three
        assert_eq!(settler.snap(130.0), 120.0);
        assert_eq!(settler.snap_slots(-130.0), -3);
        assert_eq!(settler.snap_slots(-150.0), -4);
    }

    #[test]
    fn test_snap_saturates_at_extreme_targets() {
        let settler = FlingSettler::new(40.0).unwrap();
        assert_eq!(settler.snap_slots(-f32::MAX), i64::MIN);
        assert_eq!(settler.snap_slots(f32::MAX), i64::MAX);
        assert_eq!(settler.snap_slots(f32::NEG_INFINITY), i64::MIN);
        assert_eq!(settler.snap_slots(f32::INFINITY), i64::MAX);
        assert_eq!(settler.snap_slots(f32::NAN), 0);
    }

    #[test]
    fn test_exponential_projection() {
        let decay = ExponentialDecay::new(20.0, 4);
        // friction is -84: 840 units/s carries the fling 10 units further
        assert!((decay.project(5.0, 840.0) - 15.0).abs() < 1e-4);
        assert!((decay.project(5.0, -840.0) + 5.0).abs() < 1e-4);
        assert_eq!(decay.project(5.0, 0.0), 5.0);
    }

    #[test]
    fn test_fling_travels_multiple_slots() {
        let settler = FlingSettler::new(40.0).unwrap();
        let decay = ExponentialDecay::new(20.0, 4);

        // 10 + 8400/84 = 110: two slots + 30, lands on three slots
        let settle = settler.settle(10.0, 8400.0, &decay);
        assert_eq!(settle.slots, 3);
        assert_eq!(settle.target, 120.0);
    }

    #[test]
    fn test_frames_are_finite_and_end_at_target() {
        let settler = FlingSettler::new(40.0).unwrap();
        let settle = settler.settle(25.0, 0.0, &ExponentialDecay::new(20.0, 5));

        let frames: Vec<f32> = settle.frames.clone().collect();
        assert_eq!(frames.len(), 5);
        assert_eq!(*frames.last().unwrap(), 40.0);
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));

        // Restartable per call: a fresh settle yields the same sequence
        let again: Vec<f32> = settler
            .settle(25.0, 0.0, &ExponentialDecay::new(20.0, 5))
            .frames
            .collect();
        assert_eq!(frames, again);
    }

    #[test]
    fn test_default_animation_used_by_custom_model() {
        let settler = FlingSettler::new(10.0).unwrap();
        let settle = settler.settle(-4.0, 123.0, &Still);
        assert_eq!(settle.target, 0.0);
        assert_eq!(settle.frames.len(), DEFAULT_SETTLE_FRAMES as usize);
    }

    #[test]
    fn test_single_frame_when_zero_frames() {
        let frames: Vec<f32> = SettleFrames::ease_out(3.0, 9.0, 0).collect();
        assert_eq!(frames, vec![9.0]);
    }
}
