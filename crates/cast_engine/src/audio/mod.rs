//! Audio system
//!
//! Game code only sees [`SoundPlayer`]: hand it a loaded [`AudioAsset`] and
//! forget about it. Which device (if any) makes the noise is decided once at
//! start-up.

pub mod asset;
pub mod backend;

pub use asset::{AudioAsset, AudioFormat};

use std::path::PathBuf;
use thiserror::Error;

/// Audio errors
#[derive(Error, Debug)]
pub enum AudioError {
    /// Backend used before `initialize`
    #[error("audio backend not initialized")]
    BackendNotInitialized,

    /// No output device or stream could be opened
    #[error("audio backend initialization failed: {0}")]
    BackendInitFailed(String),

    /// Decoding or sink creation failed
    #[error("playback failed: {0}")]
    PlaybackFailed(String),

    /// A sound file could not be loaded at start-up
    #[error("failed to load sound '{}': {reason}", path.display())]
    LoadFailed {
        /// File that failed
        path: PathBuf,
        /// Why it failed
        reason: String,
    },
}

/// Fire-and-forget sound playback
pub trait SoundPlayer {
    /// Start playing `sound`; failures are the player's problem, not the caller's
    fn play(&mut self, sound: &AudioAsset);
}

/// Player used when audio is disabled or no device is available
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&mut self, sound: &AudioAsset) {
        log::debug!("(silent) sound '{}'", sound.name());
    }
}
