//! Seam between the frame loop and a renderer backend.
//!
//! The frame loop produces one [`FrameSubmission`] per redraw with
//! everything a backend needs to draw the scene: camera pose, player
//! transform, lamp-driven light parameters, and any animation cross-fade
//! that fired this frame.

use glam::Vec3;
use lantern_sim::{CameraRig, ClipTransition, LightParams};
use tracing::debug;

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct FrameSubmission {
    /// Camera pose for this frame.
    pub camera: CameraRig,
    /// Player root position.
    pub player_position: Vec3,
    /// Player facing, radians about +Y.
    pub player_yaw: f32,
    /// Lamp-driven emissive and point-light parameters.
    pub lights: LightParams,
    /// Whether the player displaced this frame.
    pub moving: bool,
    /// Animation cross-fade to start, when the locomotion state changed.
    pub transition: Option<ClipTransition>,
    /// Uniform scale for the character model.
    pub character_scale: f32,
}

/// A renderer backend the frame loop can drive.
pub trait RenderBridge {
    /// Consume one frame's worth of scene state.
    fn submit(&mut self, frame: &FrameSubmission);

    /// Output size changed; update aspect ratio and surfaces.
    fn resize(&mut self, width: u32, height: u32);
}

/// Digest sink used when no renderer backend is attached.
///
/// Logs a compact frame digest at a steady cadence so headless runs still
/// show the simulation advancing.
#[derive(Debug, Default)]
pub struct LogBridge {
    frames: u64,
}

/// Frames between digest lines.
const DIGEST_INTERVAL: u64 = 120;

impl RenderBridge for LogBridge {
    fn submit(&mut self, frame: &FrameSubmission) {
        self.frames += 1;
        if self.frames % DIGEST_INTERVAL == 0 {
            debug!(
                pos = ?frame.player_position,
                yaw = frame.player_yaw,
                cam = ?frame.camera.position,
                emissive = frame.lights.emissive_intensity,
                moving = frame.moving,
                "frame digest"
            );
        }
        if let Some(transition) = &frame.transition {
            debug!(
                from = ?transition.from,
                to = ?transition.to,
                fade = transition.fade_seconds,
                "clip cross-fade"
            );
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        debug!(width, height, "render output resized");
    }
}
