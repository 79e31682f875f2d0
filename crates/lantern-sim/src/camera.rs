//! Camera mode and the minimal camera state the frame step reads and writes.

use glam::Vec3;

use crate::math::yaw_from_direction;

/// Which movement and camera-follow policy is active.
///
/// Set by UI/keys outside the core; the frame step only reads it. Switching
/// modes changes policy on the next tick and nothing else; player state is
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Camera locked to the player's head; look direction steered by the
    /// external pointer-lock helper.
    FirstPerson,
    /// Camera orbits a smoothed follow point behind the player.
    #[default]
    ThirdPerson,
}

impl CameraMode {
    /// Human-readable label for the status line and debug API.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstPerson => "First-Person",
            Self::ThirdPerson => "Third-Person",
        }
    }
}

/// Camera transform as the core sees it.
///
/// In first person, `position` and `forward` are written by the external
/// pointer-lock controls between ticks (the step only pins `position` to the
/// player's head while moving). In third person the step owns `position`,
/// `forward`, and `orbit_target`; the external orbit widget may adjust
/// `forward` between ticks and the step re-aims it at the orbit target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    /// Camera position in world space.
    pub position: Vec3,
    /// Unit look direction.
    pub forward: Vec3,
    /// Smoothed orbit/look-at point (third person only).
    pub orbit_target: Vec3,
}

impl CameraRig {
    /// Rig looking from `position` toward `target`.
    #[must_use]
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            forward: (target - position).normalize_or_zero(),
            orbit_target: target,
        }
    }

    /// Yaw of the current look direction.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        yaw_from_direction(self.forward)
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        // Camera starts at (0, 2, 3) watching the spawn point.
        Self::looking_at(Vec3::new(0.0, 2.0, 3.0), Vec3::new(0.0, 0.0, 5.0))
    }
}
