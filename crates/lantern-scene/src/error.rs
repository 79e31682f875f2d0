//! Error types for scene loading and inspection.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or inspecting scene assets.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The asset file could not be opened or parsed as glTF.
    #[error("failed to load glTF asset {path}: {source}")]
    Load {
        /// Path of the asset that failed.
        path: PathBuf,
        /// Underlying glTF error.
        #[source]
        source: gltf::Error,
    },

    /// The character asset carries no animation clips at all.
    #[error("character asset {path} has no animation clips")]
    NoAnimationClips {
        /// Path of the character asset.
        path: PathBuf,
    },
}
