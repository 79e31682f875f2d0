//! Aggregate world state assembled from background load outcomes.

use lantern_config::SceneBindingsConfig;
use tracing::warn;

use crate::bindings::{EnvironmentSetup, prepare_environment};
use crate::character::CharacterSlot;
use crate::loader::{AssetKind, LoadOutcome};
use crate::summary::SceneSummary;

/// The scene as the frame loop sees it: possibly still partial while loads
/// are in flight.
#[derive(Debug, Default)]
pub struct WorldScene {
    /// Environment summary and derived setup, once loaded.
    pub environment: Option<(SceneSummary, EnvironmentSetup)>,
    /// Placeholder or the loaded character.
    pub character: CharacterSlot,
}

impl WorldScene {
    /// Fold one load outcome into the world.
    ///
    /// Errors leave the corresponding slot as it was; the missing asset is
    /// simply never shown.
    pub fn apply(&mut self, outcome: LoadOutcome, bindings: &SceneBindingsConfig) {
        match (outcome.kind, outcome.result) {
            (AssetKind::Environment, Ok(summary)) => {
                let setup = prepare_environment(&summary, bindings);
                self.environment = Some((summary, setup));
            }
            (AssetKind::Character, Ok(summary)) => {
                self.character = CharacterSlot::from_summary(outcome.path, &summary);
            }
            (kind, Err(err)) => {
                warn!(asset = kind.label(), %err, "continuing without asset");
            }
        }
    }

    /// Authored intensity of the lamp light, once the environment is in and
    /// the binding resolved.
    #[must_use]
    pub fn lamp_original_intensity(&self) -> Option<f32> {
        self.environment
            .as_ref()
            .and_then(|(_, setup)| setup.lamp.light.as_ref())
            .map(|l| l.original_intensity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SceneError;
    use crate::summary::{LightInfo, LightKind, ShadowCamera};
    use std::path::PathBuf;

    fn env_summary() -> SceneSummary {
        SceneSummary {
            node_names: vec!["Plane001_3".to_owned()],
            mesh_count: 1,
            lights: vec![LightInfo {
                name: Some("Point".to_owned()),
                kind: LightKind::Point,
                intensity: 54.35,
                shadow: ShadowCamera::for_kind(LightKind::Point),
            }],
            clip_names: Vec::new(),
        }
    }

    #[test]
    fn test_environment_outcome_resolves_lamp() {
        let mut world = WorldScene::default();
        world.apply(
            LoadOutcome {
                kind: AssetKind::Environment,
                path: PathBuf::from("env.glb"),
                result: Ok(env_summary()),
            },
            &SceneBindingsConfig::default(),
        );

        let original = world.lamp_original_intensity().unwrap();
        assert!((original - 54.35).abs() < 1e-6);
    }

    #[test]
    fn test_character_outcome_replaces_placeholder() {
        let mut world = WorldScene::default();
        assert!(!world.character.is_loaded());

        let summary = SceneSummary {
            clip_names: vec!["Idle".to_owned(), "Walk".to_owned()],
            ..SceneSummary::default()
        };
        world.apply(
            LoadOutcome {
                kind: AssetKind::Character,
                path: PathBuf::from("chr.glb"),
                result: Ok(summary),
            },
            &SceneBindingsConfig::default(),
        );

        assert!(world.character.is_loaded());
    }

    #[test]
    fn test_failed_load_leaves_world_partial() {
        let mut world = WorldScene::default();
        world.apply(
            LoadOutcome {
                kind: AssetKind::Environment,
                path: PathBuf::from("missing.glb"),
                result: Err(SceneError::NoAnimationClips {
                    path: PathBuf::from("missing.glb"),
                }),
            },
            &SceneBindingsConfig::default(),
        );

        assert!(world.environment.is_none());
        assert!(world.lamp_original_intensity().is_none());
    }
}
