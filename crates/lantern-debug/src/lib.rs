//! Debug API for the Lantern viewer.
//!
//! Provides an HTTP server that exposes the viewer's live state (camera
//! mode, player position, lamp blend, lights) and accepts a few commands.
//! Only compiled in debug builds.

#[cfg(debug_assertions)]
pub mod server;

#[cfg(debug_assertions)]
pub use server::{DebugServer, DebugServerError};


/// One light as reported over the debug API.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct LightReport {
    pub name: String,
    pub kind: String,
    pub intensity: f32,
    /// False while the light is fully dark.
    pub visible: bool,
    pub shadow: ShadowReport,
}

/// Shadow projection parameters for one light.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ShadowReport {
    pub near: f32,
    pub far: f32,
    /// Orthographic half-extent. Directional lights only.
    pub ortho_extent: Option<f32>,
}

/// State shared between the frame loop and the debug server.
/// Updated every frame by the viewer. Read by the debug server on request.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct DebugState {
    pub frame_count: u64,
    pub frame_time_ms: f64,
    pub fps: f64,
    pub window_width: u32,
    pub window_height: u32,
    pub uptime_seconds: f64,
    /// Camera mode label, e.g. "Third-Person".
    pub camera_mode: String,
    pub player_position: [f32; 3],
    /// Current lamp blend factor in `[0, 1]`.
    pub lamp_blend: f32,
    /// Whether the lamp is requested on.
    pub lamp_requested: bool,
    pub lights: Vec<LightReport>,
    pub quit_requested: bool,
    /// Set to `true` by the debug server to request a lamp toggle.
    /// Consumed by the frame loop.
    #[serde(skip)]
    pub lamp_toggle_requested: bool,
}

/// Creates a new debug server in debug builds, returns None in release builds.
pub fn create_debug_server(port: u16) -> Option<DebugServer> {
    #[cfg(debug_assertions)]
    {
        Some(DebugServer::new(port))
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = port;
        None
    }
}

/// Gets the debug port from environment variable or returns the default.
pub fn get_debug_port() -> u16 {
    std::env::var("LANTERN_DEBUG_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(9999)
}
