//! Lantern — a GLTF scene viewer entry point.
//!
//! Opens a window, loads the environment and character models in the
//! background, runs the debug API in debug builds, and drives the
//! first/third-person walk simulation every frame.
//!
//! Run with: `cargo run -p lantern-viewer`

mod app;
mod render;

use clap::Parser;
use lantern_config::{CliArgs, Config};
use tracing::info;

fn main() {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(|| dirs::config_dir().map(|d| d.join("lantern")));

    let mut config = match &config_dir {
        Some(dir) => Config::load_or_create(dir).unwrap_or_else(|e| {
            eprintln!("Config error: {e}. Using defaults.");
            Config::default()
        }),
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    // Initialize structured logging.
    lantern_log::init_logging(None, cfg!(debug_assertions), Some(&config));

    info!("Lantern viewer");
    info!(
        "Window: {}x{} | Title: {}",
        config.window.width, config.window.height, config.window.title
    );
    info!(
        environment = %config.scene.environment,
        character = %config.scene.character,
        "Scene assets"
    );

    // Opens the window, kicks off background asset loads, starts the debug
    // API in debug builds, and blocks in the frame loop until exit.
    app::run(config);
}
