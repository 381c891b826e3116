//! End-of-game sound cues

use crate::config::AudioConfig;
use cast_engine::audio::{
    backend::{self, AudioBackendConfig, BackendPlayer},
    AudioAsset, AudioError, SilentPlayer, SoundPlayer,
};

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Every alien was shot
    Won,
    /// An alien reached the bottom line
    Lost,
}

/// Sounds played when the game ends
///
/// Loaded once at start-up; a missing or broken file is an error there and
/// never a silent failure later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSounds {
    lose: Option<AudioAsset>,
    win: Option<AudioAsset>,
}

impl GameSounds {
    /// Sounds from already-loaded assets
    pub const fn new(lose: AudioAsset, win: AudioAsset) -> Self {
        Self {
            lose: Some(lose),
            win: Some(win),
        }
    }

    /// No sounds at all
    pub const fn none() -> Self {
        Self { lose: None, win: None }
    }

    /// Load both cues, or nothing when audio is disabled
    pub fn load(audio: &AudioConfig) -> Result<Self, AudioError> {
        if !audio.enabled {
            log::info!("Audio disabled, skipping sound loading");
            return Ok(Self::none());
        }
        Ok(Self::new(
            AudioAsset::load(&audio.lose_sound)?,
            AudioAsset::load(&audio.win_sound)?,
        ))
    }

    /// The cue for `outcome`, if one was loaded
    pub const fn for_outcome(&self, outcome: Outcome) -> Option<&AudioAsset> {
        match outcome {
            Outcome::Won => self.win.as_ref(),
            Outcome::Lost => self.lose.as_ref(),
        }
    }
}

/// Pick the sound player for this run
///
/// An unavailable audio device degrades to silence with a warning; only
/// asset loading is fatal.
pub fn sound_player(audio: &AudioConfig) -> Box<dyn SoundPlayer> {
    if !audio.enabled {
        return Box::new(SilentPlayer);
    }

    let config = AudioBackendConfig { volume: audio.volume };
    match backend::create_backend(&config) {
        Ok(backend) => Box::new(BackendPlayer::new(backend)),
        Err(err) => {
            log::warn!("No audio output, continuing silently: {}", err);
            Box::new(SilentPlayer)
        }
    }
}
