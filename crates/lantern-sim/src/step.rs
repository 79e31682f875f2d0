//! The per-tick frame update: locomotion, camera follow, lamp blend.
//!
//! One explicit update context in, one update out. All smoothing factors
//! are fixed fractions per tick, not scaled by dt; only the walk
//! displacement is time-based.

use glam::Vec3;

use crate::animation::{ClipTransition, LocomotionState};
use crate::camera::{CameraMode, CameraRig};
use crate::lamp::{derive_light_params, LampState, LightParams};
use crate::math::{horizontal, lerp_angle, yaw_from_direction};
use crate::player::{MoveIntent, PlayerState};

/// Movement and camera-follow constants, normally filled from config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Walk speed in units per second.
    pub walk_speed: f32,
    /// First-person camera height above the player origin.
    pub eye_height: f32,
    /// Third-person camera distance behind the player.
    pub follow_distance: f32,
    /// Third-person camera height above the player origin.
    pub follow_height: f32,
    /// Per-tick fraction the third-person camera position moves toward its
    /// desired spot.
    pub camera_follow_rate: f32,
    /// Per-tick fraction the orbit target moves toward the player.
    pub orbit_target_rate: f32,
    /// Per-tick fraction the player yaw tracks the camera yaw (first person).
    pub yaw_rate_first_person: f32,
    /// Per-tick fraction the player yaw tracks the movement direction
    /// (third person).
    pub yaw_rate_third_person: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            eye_height: 1.6,
            follow_distance: 3.0,
            follow_height: 1.5,
            camera_follow_rate: 0.15,
            orbit_target_rate: 0.2,
            yaw_rate_first_person: 0.3,
            yaw_rate_third_person: 0.2,
        }
    }
}

/// Everything the step consumes that changes between ticks.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    /// Seconds since the previous tick. Non-finite or non-positive values
    /// are treated as zero (no displacement) rather than stalling or
    /// reversing motion.
    pub dt: f32,
    /// Held movement keys.
    pub move_intent: MoveIntent,
    /// Active camera policy.
    pub mode: CameraMode,
}

/// Mutable state carried across ticks. No ambient globals: the hosting loop
/// owns exactly one of these.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimState {
    pub player: PlayerState,
    pub camera: CameraRig,
    pub lamp: LampState,
    pub locomotion: LocomotionState,
}

/// Per-tick results handed to the renderer and animation mixer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    /// Lamp-derived material and light parameters.
    pub lights: LightParams,
    /// Whether the accumulated movement vector was non-zero this tick.
    pub moved: bool,
    /// Clip change for the external mixer, if the locomotion state flipped.
    pub transition: Option<ClipTransition>,
}

/// Advance the simulation one tick.
///
/// `lamp_original_intensity` is the resolved point light's authored
/// intensity, `None` until the environment asset publishes (the point-light
/// effect is inert until then).
pub fn frame_update(
    state: &mut SimState,
    input: &FrameInput,
    tuning: &Tuning,
    lamp_original_intensity: Option<f32>,
) -> FrameOutput {
    let dt = if input.dt.is_finite() && input.dt > 0.0 {
        input.dt
    } else {
        0.0
    };

    // Lamp blend is tick-based, so it advances even on a zero-dt tick.
    state.lamp.tick();
    let lights = derive_light_params(state.lamp.blend, lamp_original_intensity);

    let moved = match input.mode {
        CameraMode::FirstPerson => first_person_move(state, input.move_intent, dt, tuning),
        CameraMode::ThirdPerson => third_person_move(state, input.move_intent, dt, tuning),
    };

    let transition = state.locomotion.update(moved);

    FrameOutput {
        lights,
        moved,
        transition,
    }
}

/// First person: camera-relative WASD, camera pinned to the player's head,
/// player yaw eased toward the camera's yaw. Look steering itself belongs to
/// the external pointer-lock helper.
fn first_person_move(state: &mut SimState, intent: MoveIntent, dt: f32, tuning: &Tuning) -> bool {
    let fwd = horizontal(state.camera.forward);
    let right = fwd.cross(Vec3::Y).normalize_or_zero();

    let mut dir = Vec3::ZERO;
    if intent.forward {
        dir += fwd;
    }
    if intent.back {
        dir -= fwd;
    }
    if intent.left {
        dir -= right;
    }
    if intent.right {
        dir += right;
    }

    let moving = dir.length_squared() > 0.0;
    if moving {
        state.player.position += dir.normalize() * tuning.walk_speed * dt;
        state.camera.position = state.player.position + Vec3::new(0.0, tuning.eye_height, 0.0);
        state.player.yaw = lerp_angle(
            state.player.yaw,
            state.camera.yaw(),
            tuning.yaw_rate_first_person,
        );
    }
    moving
}

/// Third person: camera-relative WASD with the opposite-handed right vector
/// (up × forward), the player turning toward the movement direction, and the
/// camera easing to a point behind the player while the orbit target trails
/// the player's torso.
fn third_person_move(state: &mut SimState, intent: MoveIntent, dt: f32, tuning: &Tuning) -> bool {
    let fwd = horizontal(state.camera.forward);
    let right = Vec3::Y.cross(fwd).normalize_or_zero();

    let mut dir = Vec3::ZERO;
    if intent.forward {
        dir += fwd;
    }
    if intent.back {
        dir -= fwd;
    }
    // Signs flipped relative to first person because `right` is the opposite
    // handedness; on-screen strafing matches between modes.
    if intent.left {
        dir += right;
    }
    if intent.right {
        dir -= right;
    }

    let moving = dir.length_squared() > 0.0;
    if moving {
        let dir = dir.normalize();
        state.player.position += dir * tuning.walk_speed * dt;
        let target_yaw = yaw_from_direction(dir);
        state.player.yaw = lerp_angle(
            state.player.yaw,
            target_yaw,
            tuning.yaw_rate_third_person,
        );
    }

    // Camera follow runs every tick, moving or not.
    let torso = state.player.position + Vec3::new(0.0, tuning.follow_height, 0.0);
    state.camera.orbit_target = state
        .camera
        .orbit_target
        .lerp(torso, tuning.orbit_target_rate);

    let desired = state.player.position - state.player.forward() * tuning.follow_distance
        + Vec3::new(0.0, tuning.follow_height, 0.0);
    state.camera.position = state.camera.position.lerp(desired, tuning.camera_follow_rate);

    let to_target = state.camera.orbit_target - state.camera.position;
    if to_target.length_squared() > 1e-6 {
        state.camera.forward = to_target.normalize();
    }

    moving
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lamp::LAMP_BLEND_RATE;

    fn tps_input(dt: f32, intent: MoveIntent) -> FrameInput {
        FrameInput {
            dt,
            move_intent: intent,
            mode: CameraMode::ThirdPerson,
        }
    }

    /// Camera sitting behind the default spawn, looking down -Z.
    fn camera_behind_spawn() -> CameraRig {
        CameraRig::looking_at(Vec3::new(0.0, 1.5, 8.0), Vec3::new(0.0, 1.5, 0.0))
    }

    #[test]
    fn test_zero_input_tick_is_inert_except_blend_decay() {
        let mut state = SimState {
            lamp: LampState {
                requested: false,
                blend: 0.8,
            },
            ..Default::default()
        };
        let before = state.player;
        let out = frame_update(
            &mut state,
            &tps_input(1.0 / 60.0, MoveIntent::default()),
            &Tuning::default(),
            None,
        );
        assert_eq!(state.player.position, before.position);
        assert!(!out.moved);
        assert!(state.lamp.blend < 0.8, "blend must decay toward 0");
    }

    #[test]
    fn test_forward_moves_walk_speed_along_camera_forward() {
        let mut state = SimState {
            camera: camera_behind_spawn(),
            ..Default::default()
        };
        let start = state.player.position;
        let out = frame_update(
            &mut state,
            &tps_input(
                1.0,
                MoveIntent {
                    forward: true,
                    ..Default::default()
                },
            ),
            &Tuning::default(),
            None,
        );
        assert!(out.moved);
        let delta = state.player.position - start;
        assert!((delta.length() - 5.0).abs() < 1e-4, "delta {delta:?}");
        assert!(delta.z < -4.9, "must move along -Z, got {delta:?}");
    }

    #[test]
    fn test_scenario_dt_tenth_forward_from_spawn() {
        // dt=0.1, third person, forward held, start (0,0,5), camera looking
        // toward -Z: ends near (0, 0, 4.5).
        let mut state = SimState {
            camera: camera_behind_spawn(),
            ..Default::default()
        };
        frame_update(
            &mut state,
            &tps_input(
                0.1,
                MoveIntent {
                    forward: true,
                    ..Default::default()
                },
            ),
            &Tuning::default(),
            None,
        );
        let pos = state.player.position;
        assert!(pos.x.abs() < 1e-4);
        assert!((pos.z - 4.5).abs() < 1e-4, "z = {}", pos.z);
    }

    #[test]
    fn test_diagonal_input_does_not_exceed_walk_speed() {
        let mut state = SimState {
            camera: camera_behind_spawn(),
            ..Default::default()
        };
        let start = state.player.position;
        frame_update(
            &mut state,
            &tps_input(
                1.0,
                MoveIntent {
                    forward: true,
                    right: true,
                    ..Default::default()
                },
            ),
            &Tuning::default(),
            None,
        );
        let speed = (state.player.position - start).length();
        assert!(speed <= 5.0 + 1e-4, "diagonal speed {speed} exceeds walk speed");
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut state = SimState {
            camera: camera_behind_spawn(),
            ..Default::default()
        };
        let start = state.player.position;
        let out = frame_update(
            &mut state,
            &tps_input(
                1.0,
                MoveIntent {
                    forward: true,
                    back: true,
                    ..Default::default()
                },
            ),
            &Tuning::default(),
            None,
        );
        assert!(!out.moved);
        assert_eq!(state.player.position, start);
    }

    #[test]
    fn test_strafe_matches_between_modes() {
        // With the camera looking -Z, the A key must move the player toward
        // -X in both modes despite the swapped right-vector handedness.
        let intent = MoveIntent {
            left: true,
            ..Default::default()
        };
        let tuning = Tuning::default();

        let mut tps = SimState {
            camera: camera_behind_spawn(),
            ..Default::default()
        };
        frame_update(&mut tps, &tps_input(1.0, intent), &tuning, None);
        assert!(tps.player.position.x < -4.9, "tps x {}", tps.player.position.x);

        let mut fps = SimState {
            camera: camera_behind_spawn(),
            ..Default::default()
        };
        frame_update(
            &mut fps,
            &FrameInput {
                dt: 1.0,
                move_intent: intent,
                mode: CameraMode::FirstPerson,
            },
            &tuning,
            None,
        );
        assert!(fps.player.position.x < -4.9, "fps x {}", fps.player.position.x);
    }

    #[test]
    fn test_mode_switch_preserves_player_state() {
        let mut state = SimState {
            camera: camera_behind_spawn(),
            ..Default::default()
        };
        frame_update(
            &mut state,
            &tps_input(
                0.5,
                MoveIntent {
                    forward: true,
                    ..Default::default()
                },
            ),
            &Tuning::default(),
            None,
        );
        let player = state.player;

        // Switch policy, no keys held: player untouched.
        frame_update(
            &mut state,
            &FrameInput {
                dt: 0.5,
                move_intent: MoveIntent::default(),
                mode: CameraMode::FirstPerson,
            },
            &Tuning::default(),
            None,
        );
        assert_eq!(state.player.position, player.position);
        assert_eq!(state.player.yaw, player.yaw);
    }

    #[test]
    fn test_first_person_pins_camera_to_head_while_moving() {
        let eye = Tuning::default().eye_height;
        let mut state = SimState {
            camera: CameraRig::looking_at(Vec3::new(0.0, eye, 5.0), Vec3::new(0.0, eye, -5.0)),
            ..Default::default()
        };
        frame_update(
            &mut state,
            &FrameInput {
                dt: 0.1,
                move_intent: MoveIntent {
                    forward: true,
                    ..Default::default()
                },
                mode: CameraMode::FirstPerson,
            },
            &Tuning::default(),
            None,
        );
        let head = state.player.position + Vec3::new(0.0, eye, 0.0);
        assert!((state.camera.position - head).length() < 1e-5);
    }

    #[test]
    fn test_first_person_yaw_tracks_camera_yaw() {
        // Camera looking along -X (yaw = pi/2 in the -Z-forward convention).
        let mut state = SimState {
            camera: CameraRig::looking_at(Vec3::new(5.0, 1.6, 0.0), Vec3::new(-5.0, 1.6, 0.0)),
            ..Default::default()
        };
        let cam_yaw = state.camera.yaw();
        frame_update(
            &mut state,
            &FrameInput {
                dt: 0.1,
                move_intent: MoveIntent {
                    forward: true,
                    ..Default::default()
                },
                mode: CameraMode::FirstPerson,
            },
            &Tuning::default(),
            None,
        );
        // One tick covers 0.3 of the gap.
        assert!((state.player.yaw - cam_yaw * 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_third_person_player_turns_toward_movement() {
        let mut state = SimState {
            camera: camera_behind_spawn(),
            ..Default::default()
        };
        // Strafe right: movement along +X, target yaw = atan2(-1, 0) = -pi/2.
        // One tick eases 0.2 of the way there. (Held strafe then orbits as
        // the camera swings around, so only the first tick has a fixed
        // target.)
        frame_update(
            &mut state,
            &tps_input(
                0.016,
                MoveIntent {
                    right: true,
                    ..Default::default()
                },
            ),
            &Tuning::default(),
            None,
        );
        let expected = -std::f32::consts::FRAC_PI_2 * 0.2;
        assert!(
            (state.player.yaw - expected).abs() < 1e-4,
            "yaw {} expected {expected}",
            state.player.yaw
        );
    }

    #[test]
    fn test_third_person_camera_converges_behind_player() {
        let mut state = SimState {
            camera: CameraRig::looking_at(Vec3::new(4.0, 3.0, 9.0), Vec3::new(0.0, 1.5, 0.0)),
            ..Default::default()
        };
        let tuning = Tuning::default();
        // Let the follow settle with no input.
        for _ in 0..300 {
            frame_update(&mut state, &tps_input(0.016, MoveIntent::default()), &tuning, None);
        }
        let expected = state.player.position - state.player.forward() * tuning.follow_distance
            + Vec3::new(0.0, tuning.follow_height, 0.0);
        assert!(
            (state.camera.position - expected).length() < 0.01,
            "camera {:?} expected {:?}",
            state.camera.position,
            expected
        );
        // And the camera watches the player's torso.
        let torso = state.player.position + Vec3::new(0.0, tuning.follow_height, 0.0);
        assert!((state.camera.orbit_target - torso).length() < 0.01);
    }

    #[test]
    fn test_garbage_dt_produces_no_displacement() {
        for dt in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let mut state = SimState {
                camera: camera_behind_spawn(),
                ..Default::default()
            };
            let start = state.player.position;
            frame_update(
                &mut state,
                &tps_input(
                    dt,
                    MoveIntent {
                        forward: true,
                        ..Default::default()
                    },
                ),
                &Tuning::default(),
                None,
            );
            assert_eq!(
                state.player.position, start,
                "dt {dt} must not displace the player"
            );
            assert!(state.player.position.is_finite());
        }
    }

    #[test]
    fn test_blend_advances_per_tick_not_per_second() {
        // One tick with dt=1.0 moves the blend exactly as far as one tick
        // with dt=1/60. Ten ticks at any dt move it further than one tick.
        let tuning = Tuning::default();

        let mut slow = SimState::default();
        slow.lamp.requested = true;
        frame_update(&mut slow, &tps_input(1.0, MoveIntent::default()), &tuning, None);

        let mut fast = SimState::default();
        fast.lamp.requested = true;
        frame_update(
            &mut fast,
            &tps_input(1.0 / 60.0, MoveIntent::default()),
            &tuning,
            None,
        );
        assert!((slow.lamp.blend - fast.lamp.blend).abs() < 1e-6);
        assert!((slow.lamp.blend - LAMP_BLEND_RATE).abs() < 1e-6);

        for _ in 0..9 {
            frame_update(
                &mut fast,
                &tps_input(1.0 / 60.0, MoveIntent::default()),
                &tuning,
                None,
            );
        }
        assert!(fast.lamp.blend > slow.lamp.blend);
    }

    #[test]
    fn test_walk_transition_fires_on_first_moving_tick_only() {
        let mut state = SimState {
            camera: camera_behind_spawn(),
            ..Default::default()
        };
        let intent = MoveIntent {
            forward: true,
            ..Default::default()
        };
        let first = frame_update(
            &mut state,
            &tps_input(0.016, intent),
            &Tuning::default(),
            None,
        );
        assert!(first.transition.is_some());
        let second = frame_update(
            &mut state,
            &tps_input(0.016, intent),
            &Tuning::default(),
            None,
        );
        assert!(second.transition.is_none());
        let stop = frame_update(
            &mut state,
            &tps_input(0.016, MoveIntent::default()),
            &Tuning::default(),
            None,
        );
        assert!(stop.transition.is_some());
    }

    #[test]
    fn test_point_intensity_scales_resolved_light() {
        let mut state = SimState::default();
        state.lamp.requested = true;
        let out = frame_update(
            &mut state,
            &tps_input(0.016, MoveIntent::default()),
            &Tuning::default(),
            Some(60.0),
        );
        let expected = 60.0 * state.lamp.blend;
        assert!((out.lights.point_intensity.unwrap() - expected).abs() < 1e-4);
    }
}
