//! Small angle/direction helpers shared by the movement and camera code.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Project a direction onto the horizontal plane and normalize.
///
/// Returns `Vec3::ZERO` when the input is vertical or zero, so callers can
/// accumulate the result without a NaN check.
#[must_use]
pub fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z).normalize_or_zero()
}

/// Yaw (radians) of a horizontal direction, using the -Z-forward convention:
/// yaw 0 faces -Z, positive yaw turns toward -X.
#[must_use]
pub fn yaw_from_direction(dir: Vec3) -> f32 {
    (-dir.x).atan2(-dir.z)
}

/// Unit forward vector for a yaw angle. Inverse of [`yaw_from_direction`].
#[must_use]
pub fn forward_from_yaw(yaw: f32) -> Vec3 {
    Vec3::new(-yaw.sin(), 0.0, -yaw.cos())
}

/// Interpolate between two angles along the shortest arc.
///
/// `t` is the per-tick fraction of the remaining distance, matching the
/// fixed-rate smoothing used throughout the frame step. The result stays on
/// the same winding as `from`, so repeated calls never snap across ±π.
#[must_use]
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    let mut delta = (to - from) % TAU;
    if delta > PI {
        delta -= TAU;
    } else if delta < -PI {
        delta += TAU;
    }
    from + delta * t
}
