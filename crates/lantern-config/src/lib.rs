//! Configuration system for the Lantern viewer.
//!
//! Runtime-configurable settings persisted to disk as RON, with CLI
//! overrides via clap, hot-reload detection, and forward/backward compatible
//! serialization. The scene section carries the semantic-role-to-node-name
//! bindings that replace hard-coded scene lookups.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CameraConfig, Config, DebugConfig, PlayerConfig, SceneBindingsConfig, SceneConfig,
    WindowConfig,
};
pub use error::ConfigError;
