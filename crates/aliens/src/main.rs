//! `aliens [CONFIG]`: play one game with the autopilot at the controls

use aliens::config::{EngineConfig, GameConfig, DEFAULT_CONFIG_PATH};
use aliens::setup;
use aliens::GameError;
use cast_engine::config::{Config, ConfigError};
use cast_engine::foundation::logging;
use std::path::Path;

fn main() -> Result<(), GameError> {
    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let loaded = GameConfig::load_or_default(&path);

    logging::init(&log_filter(&loaded));

    let config = loaded.map_err(|e| {
        log::error!("Could not load configuration from {}: {}", path, e);
        e
    })?;
    if Path::new(&path).exists() {
        log::info!("Configuration loaded from {}", path);
    } else {
        log::info!("No configuration at {}, using defaults", path);
    }

    log::info!("Starting Aliens");

    let report = setup::run(&config).map_err(|e| {
        log::error!("Game aborted: {}", e);
        e
    })?;

    match report.outcome {
        Some(outcome) => log::info!("{:?} in {} frames", outcome, report.frames),
        None => log::info!("Stopped after {} frames", report.frames),
    }
    Ok(())
}

/// Log filter for start-up: the configured one, or the default when loading failed
fn log_filter(loaded: &Result<GameConfig, ConfigError>) -> String {
    loaded.as_ref().map_or_else(
        |_| EngineConfig::default().log_level,
        |config| config.engine.log_level.clone(),
    )
}
