//! Structured logging for the Lantern viewer.
//!
//! Console output with uptime timestamps and module paths via the `tracing`
//! ecosystem, plus JSON file logging in debug builds for post-mortem
//! analysis. The log/status surface the asset loader and lamp toggle report
//! to is this subscriber.

use lantern_config::Config;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter: info everywhere, quiet the windowing and parser crates.
const DEFAULT_FILTER: &str = "info,winit=warn,gltf=warn";

/// Initialize the tracing subscriber.
///
/// - Console output with timestamps, module paths, and severity levels.
/// - JSON file logging in debug builds when `log_dir` is given.
/// - `RUST_LOG` overrides everything; otherwise the config's
///   `debug.log_level` is used when set.
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => DEFAULT_FILTER.to_string(),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(true) // loader thread shows up by name
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join("lantern.log"))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// Create an `EnvFilter` with the default filter string.
///
/// Useful for tests and for consistent default behavior.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
