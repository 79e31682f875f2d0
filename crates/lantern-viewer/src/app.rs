//! Window creation, event handling, and the per-frame update loop.
//!
//! [`ViewerApp`] implements winit's [`ApplicationHandler`]: the window and
//! background asset loads start on `resumed`, and each `RedrawRequested`
//! advances the simulation one frame and hands the result to the render
//! bridge.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use lantern_config::Config;
use lantern_debug::{DebugServer, DebugState, LightReport, ShadowReport, create_debug_server};
use lantern_input::{KeyBindings, KeyboardState, ViewerAction, sample_move_intent};
use lantern_scene::{SceneLoader, WorldScene};
use lantern_sim::{
    CameraMode, CameraRig, FrameInput, FrameOutput, PlayerState, SimState, Tuning, frame_update,
};
use tracing::{info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::render::{FrameSubmission, LogBridge, RenderBridge};

/// Returns [`WindowAttributes`] based on the given configuration.
pub fn window_attributes_from_config(config: &Config) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.window.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window.width as f64,
            config.window.height as f64,
        ))
}

/// Build the simulation tuning from the loaded config.
fn tuning_from_config(config: &Config) -> Tuning {
    Tuning {
        walk_speed: config.player.walk_speed,
        eye_height: config.player.eye_height,
        follow_distance: config.camera.follow_distance,
        follow_height: config.camera.follow_height,
        camera_follow_rate: config.camera.follow_rate,
        orbit_target_rate: config.camera.orbit_target_rate,
        yaw_rate_first_person: config.camera.yaw_rate_first_person,
        yaw_rate_third_person: config.camera.yaw_rate_third_person,
    }
}

/// Application state driving the event loop.
pub struct ViewerApp {
    window: Option<Arc<Window>>,
    config: Config,
    tuning: Tuning,
    bindings: KeyBindings,
    keyboard: KeyboardState,
    mode: CameraMode,
    sim: SimState,
    world: WorldScene,
    loader: Option<SceneLoader>,
    bridge: Box<dyn RenderBridge>,
    debug_server: Option<DebugServer>,
    debug_state: Arc<Mutex<DebugState>>,
    start_time: Instant,
    last_frame_time: Instant,
    frame_count: u64,
    window_size: (u32, u32),
}

impl ViewerApp {
    /// Build the app from a loaded config. No window exists yet.
    pub fn new(config: Config) -> Self {
        let spawn = glam::Vec3::from_array(config.player.spawn);
        let sim = SimState {
            player: PlayerState::new(spawn),
            camera: CameraRig::looking_at(glam::Vec3::new(0.0, 2.0, 3.0), spawn),
            ..SimState::default()
        };
        let tuning = tuning_from_config(&config);
        let debug_state = Arc::new(Mutex::new(DebugState::default()));
        let debug_server = create_debug_server(debug_port(&config));
        let now = Instant::now();
        let window_size = (config.window.width, config.window.height);

        Self {
            window: None,
            config,
            tuning,
            bindings: KeyBindings::default(),
            keyboard: KeyboardState::new(),
            mode: CameraMode::default(),
            sim,
            world: WorldScene::default(),
            loader: None,
            bridge: Box::new(LogBridge::default()),
            debug_server,
            debug_state,
            start_time: now,
            last_frame_time: now,
            frame_count: 0,
            window_size,
        }
    }

    fn set_mode(&mut self, mode: CameraMode) {
        if self.mode != mode {
            self.mode = mode;
            info!(mode = mode.label(), "camera mode switched");
        }
    }

    /// Advance the simulation one frame and hand the result to the bridge.
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        // Fold in any asset loads that finished since the last frame.
        if let Some(loader) = &mut self.loader {
            for outcome in loader.poll() {
                self.world.apply(outcome, &self.config.scene.bindings);
            }
            if loader.is_idle() {
                self.loader = None;
            }
        }

        // Requests posted through the debug API.
        let mut toggle_from_debug = false;
        if let Ok(mut state) = self.debug_state.lock() {
            if state.lamp_toggle_requested {
                state.lamp_toggle_requested = false;
                toggle_from_debug = true;
            }
            if state.quit_requested {
                info!("Quit requested via debug API");
                event_loop.exit();
                return;
            }
        }

        if self.bindings.just_activated(ViewerAction::Quit, &self.keyboard) {
            info!("Quit requested");
            event_loop.exit();
            return;
        }
        if self.bindings.just_activated(ViewerAction::ToggleLamp, &self.keyboard)
            || toggle_from_debug
        {
            self.sim.lamp.toggle();
            info!(on = self.sim.lamp.requested, "lamp toggled");
        }
        if self.bindings.just_activated(ViewerAction::FirstPerson, &self.keyboard) {
            self.set_mode(CameraMode::FirstPerson);
        }
        if self.bindings.just_activated(ViewerAction::ThirdPerson, &self.keyboard) {
            self.set_mode(CameraMode::ThirdPerson);
        }

        let input = FrameInput {
            dt,
            move_intent: sample_move_intent(&self.bindings, &self.keyboard),
            mode: self.mode,
        };
        let output = frame_update(
            &mut self.sim,
            &input,
            &self.tuning,
            self.world.lamp_original_intensity(),
        );

        if let Some(transition) = &output.transition {
            info!(from = ?transition.from, to = ?transition.to, "locomotion changed");
        }

        self.bridge.submit(&FrameSubmission {
            camera: self.sim.camera,
            player_position: self.sim.player.position,
            player_yaw: self.sim.player.yaw,
            lights: output.lights,
            moving: output.moved,
            transition: output.transition,
            character_scale: self.config.scene.character_scale,
        });

        self.frame_count += 1;
        self.update_debug_state(&output, now, dt);
        self.keyboard.end_frame();

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn update_debug_state(&mut self, output: &FrameOutput, now: Instant, dt: f32) {
        let frame_time_ms = f64::from(dt) * 1000.0;
        if let Ok(mut state) = self.debug_state.lock() {
            state.frame_count = self.frame_count;
            state.frame_time_ms = frame_time_ms;
            state.fps = if frame_time_ms > 0.0 {
                1000.0 / frame_time_ms
            } else {
                0.0
            };
            state.window_width = self.window_size.0;
            state.window_height = self.window_size.1;
            state.uptime_seconds = now.duration_since(self.start_time).as_secs_f64();
            state.camera_mode = self.mode.label().to_string();
            state.player_position = self.sim.player.position.to_array();
            state.lamp_blend = self.sim.lamp.blend;
            state.lamp_requested = self.sim.lamp.requested;
            state.lights = light_reports(&self.world, output.lights.point_intensity);
        }
    }
}

/// Compose the per-light debug report from the loaded environment.
///
/// The lamp light reports its live blended intensity; every other light
/// reports the intensity it was assigned at load.
fn light_reports(world: &WorldScene, lamp_point_intensity: Option<f32>) -> Vec<LightReport> {
    let Some((summary, setup)) = &world.environment else {
        return Vec::new();
    };
    summary
        .lights
        .iter()
        .zip(&setup.light_settings)
        .map(|(info, setting)| {
            let is_lamp = setup
                .lamp
                .light
                .as_ref()
                .is_some_and(|l| info.name.as_deref() == Some(l.name.as_str()));
            let intensity = if is_lamp {
                lamp_point_intensity.unwrap_or(0.0)
            } else {
                setting.intensity
            };
            LightReport {
                name: info.name.clone().unwrap_or_default(),
                kind: info.kind.label().to_string(),
                intensity,
                visible: intensity > 0.0,
                shadow: ShadowReport {
                    near: info.shadow.near,
                    far: info.shadow.far,
                    ortho_extent: info.shadow.ortho_extent,
                },
            }
        })
        .collect()
}

fn debug_port(config: &Config) -> u16 {
    if std::env::var("LANTERN_DEBUG_PORT").is_ok() {
        lantern_debug::get_debug_port()
    } else {
        config.debug.debug_port
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = window_attributes_from_config(&self.config);
            let window = event_loop
                .create_window(attrs)
                .expect("Failed to create window");
            let window = Arc::new(window);

            let inner_size = window.inner_size();
            self.window_size = (inner_size.width, inner_size.height);
            info!(
                "Window created: {}x{}",
                inner_size.width, inner_size.height
            );

            self.loader = Some(SceneLoader::spawn(
                self.config.scene.environment.clone().into(),
                self.config.scene.character.clone().into(),
            ));

            window.request_redraw();
            self.window = Some(window);

            // Start debug server in debug builds
            #[cfg(debug_assertions)]
            if let Some(ref mut debug_server) = self.debug_server {
                if let Err(e) = debug_server.start(self.debug_state.clone()) {
                    warn!("Failed to start debug server: {e}");
                } else {
                    info!("Debug API started on port {}", debug_server.actual_port());
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                self.window_size = (new_size.width, new_size.height);
                self.bridge.resize(new_size.width, new_size.height);
                info!("Window resized to {}x{}", new_size.width, new_size.height);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.keyboard.process_event(&event);
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
            }
            _ => {}
        }
    }
}

/// Creates an event loop and runs the viewer with the given config.
///
/// This function blocks until the window is closed.
pub fn run(config: Config) {
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let mut app = ViewerApp::new(config);
    event_loop.run_app(&mut app).expect("Event loop failed");
}
