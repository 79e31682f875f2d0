//! Lamp blend tracking and the light parameters derived from it.
//!
//! The lamp has a requested on/off target set by input, and a blend scalar
//! that eases toward the target a fixed fraction per tick. The blend drives
//! every visible effect: the emissive shader uniforms on the lamp mesh and
//! the intensity of the lamp's point light.

use glam::Vec3;

/// Fraction of the remaining distance the blend covers each tick.
///
/// Per-tick, not per-second: convergence speed tracks the display refresh
/// rate. See the frame-rate test in `step`.
pub const LAMP_BLEND_RATE: f32 = 0.15;

/// Warm yellow tint of the lamp glow at full blend.
pub const LAMP_EMISSIVE_TINT: Vec3 = Vec3::new(1.0, 0.9, 0.3);

/// Emissive intensity at full blend.
pub const LAMP_EMISSIVE_MAX: f32 = 2.0;

/// On/off target plus the eased blend scalar.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LampState {
    /// Whether the user wants the lamp on. Set by the L key or the debug API.
    pub requested: bool,
    /// Eased value in [0, 1] tracking `requested`. Never jumps.
    pub blend: f32,
}

impl LampState {
    /// Flip the requested state. The blend catches up over following ticks.
    pub fn toggle(&mut self) {
        self.requested = !self.requested;
    }

    /// Advance the blend one tick toward the requested target.
    pub fn tick(&mut self) {
        let target = if self.requested { 1.0 } else { 0.0 };
        self.blend += (target - self.blend) * LAMP_BLEND_RATE;
    }
}

/// Light parameters recomputed in full every tick. No state of their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightParams {
    /// Emissive RGB for the lamp mesh shader.
    pub emissive: Vec3,
    /// Emissive intensity for the lamp mesh shader.
    pub emissive_intensity: f32,
    /// Intensity for the lamp's point light, `None` while the light has not
    /// been resolved (asset still loading, or binding absent).
    pub point_intensity: Option<f32>,
}

/// Derive the lamp's light parameters from the current blend.
///
/// `original_intensity` is the point light's authored intensity, captured
/// once when the environment loads. While absent the point-light effect is
/// inert; the emissive parameters are still produced so the mesh glow works
/// independently of the light.
#[must_use]
pub fn derive_light_params(blend: f32, original_intensity: Option<f32>) -> LightParams {
    LightParams {
        emissive: LAMP_EMISSIVE_TINT * blend,
        emissive_intensity: LAMP_EMISSIVE_MAX * blend,
        point_intensity: original_intensity.map(|i| i * blend),
    }
}
