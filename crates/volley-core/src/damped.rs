//! Frame-rate independent exponential smoothing.
//!
//! Every smoothed scalar in the scene is a [`DampedChannel`]. A channel is
//! pulled toward its target by `1 - e^(-lambda * dt)` of the remaining gap per
//! advance, so splitting the same elapsed time across more ticks lands on the
//! same value. Channels never clamp `dt` themselves; the frame driver bounds it
//! with [`clamp_dt`] before fanning it out.

use crate::EntityTransform;
use glam::Vec3;

/// Fraction of the remaining gap closed after `dt` seconds at rate `lambda`.
#[inline]
pub fn damping_alpha(lambda: f32, dt: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 || !lambda.is_finite() || lambda <= 0.0 {
        return 0.0;
    }
    1.0 - (-lambda * dt).exp()
}

#[inline]
pub fn damp(current: f32, target: f32, lambda: f32, dt: f32) -> f32 {
    current + (target - current) * damping_alpha(lambda, dt)
}

/// Bound a raw frame delta to `[0, max_dt]`; non-finite deltas become zero.
#[inline]
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        return 0.0;
    }
    dt.min(max_dt)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DampedChannel {
    current: f32,
    target: f32,
    lambda: f32,
}

impl DampedChannel {
    pub fn new(initial: f32, lambda: f32) -> Self {
        Self {
            current: initial,
            target: initial,
            lambda,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Move toward `target` for `dt` seconds and return the new value.
    pub fn advance(&mut self, target: f32, dt: f32) -> f32 {
        self.target = target;
        self.current = damp(self.current, target, self.lambda, dt);
        self.current
    }

    /// Bypass smoothing: jump straight to `target`.
    pub fn snap(&mut self, target: f32) -> f32 {
        self.target = target;
        self.current = target;
        self.current
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DampedVec3 {
    pub x: DampedChannel,
    pub y: DampedChannel,
    pub z: DampedChannel,
}

impl DampedVec3 {
    pub fn new(initial: Vec3, lambda: f32) -> Self {
        Self {
            x: DampedChannel::new(initial.x, lambda),
            y: DampedChannel::new(initial.y, lambda),
            z: DampedChannel::new(initial.z, lambda),
        }
    }

    pub fn current(&self) -> Vec3 {
        Vec3::new(self.x.current(), self.y.current(), self.z.current())
    }

    pub fn advance(&mut self, target: Vec3, dt: f32) -> Vec3 {
        self.x.advance(target.x, dt);
        self.y.advance(target.y, dt);
        self.z.advance(target.z, dt);
        self.current()
    }
}

/// Per-entity bank of nine channels (position, rotation, scale).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntityChannels {
    pub position: DampedVec3,
    pub rotation: DampedVec3,
    pub scale: DampedVec3,
}

impl EntityChannels {
    pub const CHANNELS: usize = 9;

    pub fn new(initial: EntityTransform, lambda: f32) -> Self {
        Self {
            position: DampedVec3::new(initial.position, lambda),
            rotation: DampedVec3::new(initial.rotation, lambda),
            scale: DampedVec3::new(initial.scale, lambda),
        }
    }

    /// Advance all nine channels. With `pin_y` the vertical position is
    /// assigned directly instead of smoothed.
    pub fn advance(&mut self, target: &EntityTransform, dt: f32, pin_y: bool) -> EntityTransform {
        self.position.x.advance(target.position.x, dt);
        if pin_y {
            self.position.y.snap(target.position.y);
        } else {
            self.position.y.advance(target.position.y, dt);
        }
        self.position.z.advance(target.position.z, dt);
        self.rotation.advance(target.rotation, dt);
        self.scale.advance(target.scale, dt);
        self.current()
    }

    pub fn current(&self) -> EntityTransform {
        EntityTransform {
            position: self.position.current(),
            rotation: self.rotation.current(),
            scale: self.scale.current(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_FRAME_DT;

    #[test]
    fn zero_or_bad_dt_does_not_move() {
        let mut c = DampedChannel::new(1.0, 10.0);
        assert_eq!(c.advance(5.0, 0.0), 1.0);
        assert_eq!(c.advance(5.0, -0.2), 1.0);
        assert_eq!(c.advance(5.0, f32::NAN), 1.0);
        assert_eq!(c.target(), 5.0);
    }

    #[test]
    fn snap_assigns_target_exactly() {
        let mut c = DampedChannel::new(0.0, 10.0);
        assert_eq!(c.snap(3.25), 3.25);
        assert_eq!(c.current(), 3.25);
    }

    #[test]
    fn clamp_dt_bounds_resume_spikes() {
        assert_eq!(clamp_dt(5.0, MAX_FRAME_DT), MAX_FRAME_DT);
        assert_eq!(clamp_dt(f32::INFINITY, MAX_FRAME_DT), 0.0);
        assert_eq!(clamp_dt(-1.0, MAX_FRAME_DT), 0.0);
        assert_eq!(clamp_dt(0.01, MAX_FRAME_DT), 0.01);
    }

    #[test]
    fn pinned_y_skips_smoothing_only_for_y() {
        let mut ch = EntityChannels::new(EntityTransform::default(), 10.0);
        let target = EntityTransform {
            position: Vec3::new(2.0, 2.0, 2.0),
            ..EntityTransform::default()
        };
        let out = ch.advance(&target, 0.016, true);
        assert_eq!(out.position.y, 2.0);
        assert!(out.position.x < 2.0);
        assert!(out.position.z < 2.0);
    }
}
