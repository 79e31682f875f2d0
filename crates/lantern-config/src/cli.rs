//! Command-line argument parsing for the Lantern viewer.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Lantern viewer command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "lantern", about = "Lantern — GLTF scene viewer")]
pub struct CliArgs {
    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Path to the environment model.
    #[arg(long)]
    pub environment: Option<String>,

    /// Path to the character model.
    #[arg(long)]
    pub character: Option<String>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Port for the debug HTTP API.
    #[arg(long)]
    pub debug_port: Option<u16>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(ref path) = args.environment {
            self.scene.environment = path.clone();
        }
        if let Some(ref path) = args.character {
            self.scene.character = path.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(port) = args.debug_port {
            self.debug.debug_port = port;
        }
    }
}
