//! Rodio audio backend implementation
//!
//! Uses the Rodio library for cross-platform audio playback. Each playing
//! sound owns a sink; dropping a sink silences it, so sinks are kept until
//! [`AudioBackend::update`] sees they ran dry.

use super::{AudioBackend, AudioBackendConfig, SoundHandle};
use crate::audio::AudioError;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::collections::HashMap;
use std::io::Cursor;

/// Rodio-based audio backend
pub struct RodioBackend {
    /// Audio output stream (must be kept alive)
    output_stream: Option<OutputStream>,
    /// Output stream handle for creating sinks
    stream_handle: Option<OutputStreamHandle>,
    /// Active sound sinks
    active_sounds: HashMap<SoundHandle, Sink>,
    next_id: u32,
    volume: f32,
}

impl RodioBackend {
    /// Create a new Rodio backend
    pub fn new() -> Self {
        Self {
            output_stream: None,
            stream_handle: None,
            active_sounds: HashMap::new(),
            next_id: 0,
            volume: 1.0,
        }
    }

    fn next_handle(&mut self) -> SoundHandle {
        let handle = SoundHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        handle
    }
}

impl AudioBackend for RodioBackend {
    fn initialize(&mut self, config: &AudioBackendConfig) -> Result<(), AudioError> {
        if self.is_initialized() {
            return Ok(());
        }

        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| AudioError::BackendInitFailed(format!("Failed to create audio output: {e}")))?;

        self.output_stream = Some(stream);
        self.stream_handle = Some(stream_handle);
        self.volume = config.volume;

        log::info!("Rodio audio backend initialized");
        Ok(())
    }

    fn shutdown(&mut self) {
        if !self.is_initialized() {
            return;
        }

        self.stop_all();
        self.stream_handle = None;
        self.output_stream = None;

        log::info!("Rodio audio backend shutdown");
    }

    fn is_initialized(&self) -> bool {
        self.stream_handle.is_some()
    }

    fn update(&mut self) {
        self.active_sounds.retain(|_handle, sink| !sink.empty());
    }

    fn stop_all(&mut self) {
        for (_handle, sink) in self.active_sounds.drain() {
            sink.stop();
        }
    }

    fn play_sound(&mut self, data: &[u8]) -> Result<SoundHandle, AudioError> {
        let stream_handle = self.stream_handle.as_ref().ok_or(AudioError::BackendNotInitialized)?;

        let sink = Sink::try_new(stream_handle)
            .map_err(|e| AudioError::PlaybackFailed(format!("Failed to create sink: {e}")))?;
        let source = Decoder::new(Cursor::new(data.to_vec()))
            .map_err(|e| AudioError::PlaybackFailed(format!("Failed to decode audio: {e}")))?;

        sink.set_volume(self.volume);
        sink.append(source);

        let handle = self.next_handle();
        self.active_sounds.insert(handle, sink);
        Ok(handle)
    }
}

impl Default for RodioBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RodioBackend {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playback_without_initialization() {
        let mut backend = RodioBackend::new();
        let result = backend.play_sound(&[0u8; 100]);
        assert!(matches!(result, Err(AudioError::BackendNotInitialized)));
    }

    #[test]
    fn test_handle_generation() {
        let mut backend = RodioBackend::new();
        assert_ne!(backend.next_handle(), backend.next_handle());
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut backend = RodioBackend::new();
        let config = AudioBackendConfig::default();

        // May fail in CI/test environments without audio device
        if backend.initialize(&config).is_ok() {
            assert!(backend.initialize(&config).is_ok());
            backend.shutdown();
            assert!(!backend.is_initialized());
        }
    }
}
