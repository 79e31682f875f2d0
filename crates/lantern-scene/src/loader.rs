//! Background asset loading.
//!
//! Each asset is parsed on its own worker thread and the distilled
//! [`SceneSummary`] is delivered over a bounded channel. The frame loop
//! drains outcomes once per frame; a failed load is terminal for that
//! asset and the viewer carries on without it.

use std::path::{Path, PathBuf};

use crossbeam_channel::{Receiver, Sender, bounded};
use tracing::{debug, error, info};

use crate::error::SceneError;
use crate::summary::SceneSummary;

/// Which of the two scene assets an outcome belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    /// The static environment model.
    Environment,
    /// The rigged player character.
    Character,
}

impl AssetKind {
    /// Lowercase label for logs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Environment => "environment",
            Self::Character => "character",
        }
    }
}

/// Result of one background load, success or failure.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Which asset this is.
    pub kind: AssetKind,
    /// Path the load was attempted from.
    pub path: PathBuf,
    /// The distilled summary, or the terminal error.
    pub result: Result<SceneSummary, SceneError>,
}

/// Parse a glTF or GLB file and distill it. Runs on worker threads.
pub fn load_summary(path: &Path) -> Result<SceneSummary, SceneError> {
    let gltf = gltf::Gltf::open(path).map_err(|source| SceneError::Load {
        path: path.to_owned(),
        source,
    })?;
    Ok(SceneSummary::from_document(&gltf.document))
}

/// Hands out load outcomes as the worker threads finish.
pub struct SceneLoader {
    receiver: Receiver<LoadOutcome>,
    pending: usize,
}

impl SceneLoader {
    /// Kick off background loads for the environment and character assets.
    pub fn spawn(environment: PathBuf, character: PathBuf) -> Self {
        let (sender, receiver) = bounded::<LoadOutcome>(2);

        spawn_worker(AssetKind::Environment, environment, sender.clone());
        spawn_worker(AssetKind::Character, character, sender);

        Self {
            receiver,
            pending: 2,
        }
    }

    /// Drain every outcome that has arrived since the last poll.
    ///
    /// Call once per frame on the main thread.
    pub fn poll(&mut self) -> Vec<LoadOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(outcome) = self.receiver.try_recv() {
            self.pending = self.pending.saturating_sub(1);
            outcomes.push(outcome);
        }
        outcomes
    }

    /// True once both loads have reported back.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending == 0
    }
}

fn spawn_worker(kind: AssetKind, path: PathBuf, sender: Sender<LoadOutcome>) {
    std::thread::Builder::new()
        .name(format!("asset-load-{}", kind.label()))
        .spawn(move || {
            debug!(asset = kind.label(), path = %path.display(), "loading asset");
            let result = load_summary(&path);
            match &result {
                Ok(summary) => info!(
                    asset = kind.label(),
                    meshes = summary.mesh_count,
                    lights = summary.lights.len(),
                    clips = summary.clip_names.len(),
                    "asset loaded"
                ),
                Err(err) => error!(asset = kind.label(), %err, "asset load failed"),
            }
            let _ = sender.send(LoadOutcome { kind, path, result });
        })
        .expect("Failed to spawn asset loader thread");
}
