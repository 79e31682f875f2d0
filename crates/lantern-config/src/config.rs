//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level viewer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowConfig,
    /// Player locomotion settings.
    pub player: PlayerConfig,
    /// Camera-follow settings.
    pub camera: CameraConfig,
    /// Scene assets and named-element bindings.
    pub scene: SceneConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
}

/// Player locomotion configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Walk speed in units per second.
    pub walk_speed: f32,
    /// First-person eye height above the player origin.
    pub eye_height: f32,
    /// Spawn position.
    pub spawn: [f32; 3],
}

/// Camera projection and third-person follow configuration.
///
/// The smoothing rates are fractions per tick, matching the simulation
/// core's fixed-rate easing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
    /// Third-person camera distance behind the player.
    pub follow_distance: f32,
    /// Third-person camera height above the player origin.
    pub follow_height: f32,
    /// Per-tick camera position follow rate.
    pub follow_rate: f32,
    /// Per-tick orbit target follow rate.
    pub orbit_target_rate: f32,
    /// Per-tick player yaw rate in first person.
    pub yaw_rate_first_person: f32,
    /// Per-tick player yaw rate in third person.
    pub yaw_rate_third_person: f32,
}

/// Asset paths and scene-element bindings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Path to the environment GLTF/GLB file.
    pub environment: String,
    /// Path to the rigged character GLTF/GLB file.
    pub character: String,
    /// Uniform scale applied to the character at load.
    pub character_scale: f32,
    /// Semantic role to node-name bindings, validated once at load.
    pub bindings: SceneBindingsConfig,
}

/// Named scene elements the viewer depends on, by role.
///
/// Resolution happens once after load; an absent name degrades to an inert
/// effect with a warning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneBindingsConfig {
    /// Node name of the lamp's glow mesh.
    pub lamp_mesh: String,
    /// Node name of the lamp's point light.
    pub lamp_light: String,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Port for the debug HTTP API (debug builds only).
    pub debug_port: u16,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Lantern Viewer".to_string(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            eye_height: 1.6,
            spawn: [0.0, 0.0, 5.0],
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 2000.0,
            follow_distance: 3.0,
            follow_height: 1.5,
            follow_rate: 0.15,
            orbit_target_rate: 0.2,
            yaw_rate_first_person: 0.3,
            yaw_rate_third_person: 0.2,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            environment: "assets/model2.glb".to_string(),
            character: "assets/red_animator_vs_animation.glb".to_string(),
            character_scale: 3.0,
            bindings: SceneBindingsConfig::default(),
        }
    }
}

impl Default for SceneBindingsConfig {
    fn default() -> Self {
        Self {
            lamp_mesh: "Plane001_3".to_string(),
            lamp_light: "Point".to_string(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            debug_port: 9999,
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            tracing::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            tracing::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            tracing::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(!ron_str.is_empty());
        assert!(ron_str.contains("width: 1280"));
        assert!(ron_str.contains("Plane001_3"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        // Config missing the `camera` section entirely.
        let ron_str = "(window: (), player: (), scene: (), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.camera, CameraConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let ron_str = "(future_setting: true)";
        let result: Result<Config, _> = ron::from_str(ron_str);
        assert!(result.is_ok());
    }

    #[test]
    fn test_default_bindings_match_authored_scene() {
        let bindings = SceneBindingsConfig::default();
        assert_eq!(bindings.lamp_mesh, "Plane001_3");
        assert_eq!(bindings.lamp_light, "Point");
    }

    #[test]
    fn test_default_rates_match_viewer_constants() {
        let camera = CameraConfig::default();
        assert!((camera.follow_rate - 0.15).abs() < f32::EPSILON);
        assert!((camera.orbit_target_rate - 0.2).abs() < f32::EPSILON);
        assert!((camera.yaw_rate_first_person - 0.3).abs() < f32::EPSILON);
        let player = PlayerConfig::default();
        assert!((player.walk_speed - 5.0).abs() < f32::EPSILON);
        assert!((player.eye_height - 1.6).abs() < f32::EPSILON);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.window.width = 1920;
        config.scene.environment = "scenes/other.glb".to_string();

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.scene.bindings.lamp_light = "Point.001".to_string();
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_some());
        assert_eq!(result.unwrap().scene.bindings.lamp_light, "Point.001");
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<Config, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }
}
