//! Resolution of configured scene bindings against a loaded environment.
//!
//! The lamp mesh and lamp light are looked up by name when the environment
//! finishes loading. A missing binding is logged and the corresponding
//! effect is skipped, never treated as fatal.

use lantern_config::SceneBindingsConfig;
use tracing::warn;

use crate::summary::{LightInfo, SceneSummary};

/// The lamp light as found in the asset, with its authored intensity.
#[derive(Clone, Debug, PartialEq)]
pub struct LampLight {
    /// Name of the light node.
    pub name: String,
    /// Intensity as exported. The live intensity starts at zero and blends
    /// toward this value when the lamp is on.
    pub original_intensity: f32,
}

/// Outcome of matching the configured binding names against the environment.
#[derive(Clone, Debug, Default)]
pub struct ResolvedLamp {
    /// Name of the emissive lamp mesh node, when present in the asset.
    pub mesh_node: Option<String>,
    /// The lamp's point light, when present in the asset.
    pub light: Option<LampLight>,
}

/// Initial intensity assigned to one light at load time.
#[derive(Clone, Debug, PartialEq)]
pub struct LightSetting {
    /// Light name, if any. Unnamed lights are still dimmed.
    pub name: Option<String>,
    /// Intensity the light starts at.
    pub intensity: f32,
}

/// Everything derived from the environment at load time.
#[derive(Clone, Debug, Default)]
pub struct EnvironmentSetup {
    /// Resolved lamp bindings.
    pub lamp: ResolvedLamp,
    /// Starting intensity for every light in the asset, in declaration order.
    pub light_settings: Vec<LightSetting>,
}

/// Exported scenes are authored far too bright for the viewer, so every
/// light except the lamp is dimmed to this fraction of its intensity.
pub const AMBIENT_DIM_FACTOR: f32 = 0.3;

/// Match the configured binding names and derive initial light intensities.
///
/// The lamp light starts dark with its authored intensity recorded, so the
/// lamp blend has a target to scale toward. Every other light is dimmed by
/// [`AMBIENT_DIM_FACTOR`].
#[must_use]
pub fn prepare_environment(
    summary: &SceneSummary,
    bindings: &SceneBindingsConfig,
) -> EnvironmentSetup {
    let mesh_node = if summary.has_node(&bindings.lamp_mesh) {
        Some(bindings.lamp_mesh.clone())
    } else {
        warn!(
            name = %bindings.lamp_mesh,
            "lamp mesh not found in environment, emissive toggle disabled"
        );
        None
    };

    let light = match summary.light_by_name(&bindings.lamp_light) {
        Some(info) => Some(LampLight {
            name: bindings.lamp_light.clone(),
            original_intensity: info.intensity,
        }),
        None => {
            warn!(
                name = %bindings.lamp_light,
                "lamp light not found in environment, light toggle disabled"
            );
            None
        }
    };

    let light_settings = summary
        .lights
        .iter()
        .map(|info| LightSetting {
            name: info.name.clone(),
            intensity: initial_intensity(info, light.as_ref()),
        })
        .collect();

    EnvironmentSetup {
        lamp: ResolvedLamp { mesh_node, light },
        light_settings,
    }
}

fn initial_intensity(info: &LightInfo, lamp: Option<&LampLight>) -> f32 {
    let is_lamp = lamp.is_some_and(|l| info.name.as_deref() == Some(l.name.as_str()));
    if is_lamp {
        0.0
    } else {
        info.intensity * AMBIENT_DIM_FACTOR
    }
}
