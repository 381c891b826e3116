//! Audio asset types for loading and managing audio data
//!
//! Sounds are loaded once at start-up and kept as encoded bytes; the
//! backend decodes on every play.

use super::AudioError;
use std::path::Path;

/// Encoded sound file, ready to hand to a [`super::SoundPlayer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioAsset {
    name: String,
    data: Vec<u8>,
    format: AudioFormat,
}

/// Audio formats recognised by their magic bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    /// WAV uncompressed
    Wav,
    /// OGG Vorbis compressed
    Ogg,
    /// MP3 compressed
    Mp3,
    /// FLAC lossless
    Flac,
}

impl AudioFormat {
    /// Detect the format from the file's magic bytes
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        match bytes.get(0..4)? {
            b"RIFF" => Some(Self::Wav),
            b"OggS" => Some(Self::Ogg),
            b"fLaC" => Some(Self::Flac),
            [0xFF, 0xFB | 0xFA, _, _] | [b'I', b'D', b'3', _] => Some(Self::Mp3),
            _ => None,
        }
    }

    /// Whether the playback backend can decode this format
    ///
    /// Only WAV decoding is built into the audio backend.
    pub const fn is_playable(self) -> bool {
        matches!(self, Self::Wav)
    }
}

impl AudioAsset {
    /// Wrap already-read sound bytes
    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>) -> Result<Self, String> {
        if data.is_empty() {
            return Err("empty audio file".to_string());
        }
        let format = AudioFormat::detect(&data).ok_or_else(|| "unknown audio format".to_string())?;
        if !format.is_playable() {
            return Err(format!("{format:?} sounds cannot be played, use WAV"));
        }
        Ok(Self {
            name: name.into(),
            data,
            format,
        })
    }

    /// Read and check a sound file
    ///
    /// The asset is named after the file stem.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AudioError> {
        let path = path.as_ref();
        let load_failed = |reason: String| AudioError::LoadFailed {
            path: path.to_path_buf(),
            reason,
        };

        let data = std::fs::read(path).map_err(|e| load_failed(e.to_string()))?;
        let name = path
            .file_stem()
            .map_or_else(|| path.display().to_string(), |stem| stem.to_string_lossy().into_owned());
        let asset = Self::from_bytes(name, data).map_err(load_failed)?;

        log::info!("Loaded sound '{}' ({:?}, {} bytes)", asset.name, asset.format, asset.data.len());
        Ok(asset)
    }

    /// Asset name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw encoded bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Detected format
    pub const fn format(&self) -> AudioFormat {
        self.format
    }
}
