//! Frame-update core for the Lantern viewer.
//!
//! Everything the viewer mutates per display refresh lives here: player
//! position and yaw, lamp blend and derived light parameters, third-person
//! camera follow, and the idle/walk locomotion state machine. The renderer,
//! window, and asset pipeline are external; this crate is plain math over an
//! explicit update context and is fully testable headless.

pub mod animation;
pub mod camera;
pub mod lamp;
pub mod math;
pub mod player;
pub mod step;

pub use animation::{ClipTransition, LocomotionClip, LocomotionState, CROSS_FADE_SECONDS};
pub use camera::{CameraMode, CameraRig};
pub use lamp::{derive_light_params, LampState, LightParams, LAMP_BLEND_RATE};
pub use math::{forward_from_yaw, horizontal, lerp_angle, yaw_from_direction};
pub use player::{MoveIntent, PlayerState};
pub use step::{frame_update, FrameInput, FrameOutput, SimState, Tuning};
