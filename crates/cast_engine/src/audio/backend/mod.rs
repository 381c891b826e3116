//! Audio backend implementations
//!
//! Platform-independent abstraction over audio playback libraries, plus the
//! adapter that turns any backend into a fire-and-forget [`SoundPlayer`].

#[cfg(feature = "rodio")]
pub mod rodio_backend;

use super::{AudioAsset, AudioError, SoundPlayer};

/// Sound handle for tracking active sounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundHandle(pub u32);

/// Audio backend trait for platform abstraction
///
/// Single-threaded: the backend lives on the game loop thread.
pub trait AudioBackend {
    /// Initialize the audio backend
    fn initialize(&mut self, config: &AudioBackendConfig) -> Result<(), AudioError>;

    /// Shutdown the audio backend
    fn shutdown(&mut self);

    /// Check if backend is initialized
    fn is_initialized(&self) -> bool;

    /// Drop bookkeeping for sounds that finished playing
    fn update(&mut self);

    /// Stop all playing sounds
    fn stop_all(&mut self);

    /// Play encoded sound bytes
    fn play_sound(&mut self, data: &[u8]) -> Result<SoundHandle, AudioError>;
}

/// Configuration for audio backend
#[derive(Debug, Clone)]
pub struct AudioBackendConfig {
    /// Volume applied to every sound (1.0 = unchanged)
    pub volume: f32,
}

impl Default for AudioBackendConfig {
    fn default() -> Self {
        Self { volume: 1.0 }
    }
}

/// Create the default audio backend for the platform
#[cfg(feature = "rodio")]
pub fn create_backend(config: &AudioBackendConfig) -> Result<Box<dyn AudioBackend>, AudioError> {
    let mut backend = Box::new(rodio_backend::RodioBackend::new());
    backend.initialize(config)?;
    Ok(backend)
}

/// Create the default audio backend for the platform
#[cfg(not(feature = "rodio"))]
pub fn create_backend(_config: &AudioBackendConfig) -> Result<Box<dyn AudioBackend>, AudioError> {
    Err(AudioError::BackendInitFailed(
        "built without an audio backend (enable the `rodio` feature)".to_string(),
    ))
}

/// [`SoundPlayer`] over an [`AudioBackend`]
///
/// Playback errors are logged and dropped.
pub struct BackendPlayer {
    backend: Box<dyn AudioBackend>,
}

impl BackendPlayer {
    /// Wrap an initialized backend
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self { backend }
    }
}

impl SoundPlayer for BackendPlayer {
    fn play(&mut self, sound: &AudioAsset) {
        self.backend.update();
        match self.backend.play_sound(sound.data()) {
            Ok(handle) => log::debug!("Playing sound '{}' as {:?}", sound.name(), handle),
            Err(err) => log::warn!("Could not play sound '{}': {}", sound.name(), err),
        }
    }
}

impl Drop for BackendPlayer {
    fn drop(&mut self) {
        self.backend.shutdown();
    }
}
