//! Scene asset loading and inspection for the lantern viewer.
//!
//! Assets are glTF/GLB files parsed off the main thread. What loading
//! produces is not a render graph but a [`SceneSummary`] plus derived
//! setup: resolved lamp bindings, initial light intensities, and the
//! character's locomotion clips.

pub mod bindings;
pub mod character;
pub mod error;
pub mod loader;
pub mod summary;
pub mod world;

pub use bindings::{
    AMBIENT_DIM_FACTOR, EnvironmentSetup, LampLight, LightSetting, ResolvedLamp,
    prepare_environment,
};
pub use character::{CharacterSlot, ClipSelection, select_locomotion_clips};
pub use error::SceneError;
pub use loader::{AssetKind, LoadOutcome, SceneLoader, load_summary};
pub use summary::{LightInfo, LightKind, SceneSummary, ShadowCamera};
pub use world::WorldScene;
