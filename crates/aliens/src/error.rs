//! Game-level errors

use cast_engine::{audio::AudioError, config::ConfigError, DirectorError};
use thiserror::Error;

/// Anything that stops the game from starting or running
#[derive(Error, Debug)]
pub enum GameError {
    /// Config file unreadable or malformed
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Config parsed but makes no sense
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Sound assets failed to load
    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    /// The game loop aborted
    #[error("Game loop error: {0}")]
    Director(#[from] DirectorError),
}
