//! Test doubles shared by unit and game-loop tests

use crate::sounds::GameSounds;
use cast_engine::audio::{AudioAsset, SoundPlayer};
use cast_engine::input::InputManager;
use std::cell::RefCell;
use std::rc::Rc;

/// Remembers the name of every sound it was asked to play
#[derive(Debug, Clone, Default)]
pub struct RecordingPlayer {
    played: Rc<RefCell<Vec<String>>>,
}

impl RecordingPlayer {
    pub fn played(&self) -> Vec<String> {
        self.played.borrow().clone()
    }
}

impl SoundPlayer for RecordingPlayer {
    fn play(&mut self, sound: &AudioAsset) {
        self.played.borrow_mut().push(sound.name().to_string());
    }
}

/// Lose/win cues named "lose" and "win"
pub fn sounds() -> GameSounds {
    let wav = |name: &str| AudioAsset::from_bytes(name, b"RIFF\0\0\0\0WAVE".to_vec()).unwrap();
    GameSounds::new(wav("lose"), wav("win"))
}

/// Input with nothing pressed
pub fn frame_input() -> InputManager {
    InputManager::new()
}
