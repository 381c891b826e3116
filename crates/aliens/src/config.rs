//! Game configuration
//!
//! Every section falls back to its defaults, so a config file only needs the
//! values it changes.

use cast_engine::config::Config;
use cast_engine::DirectorConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default config file looked up by the binary
pub const DEFAULT_CONFIG_PATH: &str = "aliens.toml";

/// Game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield geometry
    pub screen: ScreenConfig,

    /// Gameplay pacing
    pub gameplay: GameplayConfig,

    /// Audio settings
    pub audio: AudioConfig,

    /// Frame loop and logging
    pub engine: EngineConfig,
}

impl Config for GameConfig {}

/// Playfield geometry, in pixels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Playfield width
    pub max_x: i32,

    /// Playfield height
    pub max_y: i32,

    /// Grid cell size; every actor moves in whole cells
    pub cell_size: i32,

    /// Bullets at or above this line are despawned
    pub top: i32,

    /// An alien at or below this line ends the game
    pub bottom: i32,
}

/// Gameplay pacing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Rows of aliens at start
    pub alien_rows: u32,

    /// Aliens per row
    pub aliens_per_row: u32,

    /// Aliens step down one cell every this many frames
    pub alien_step_frames: u64,

    /// Minimum frames between two shots
    pub fire_cooldown_frames: u64,

    /// Frames the end-of-game banner stays up before the game exits
    pub linger_frames: u64,

    /// Seed for alien placement
    pub seed: u64,
}

/// Audio configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Audio enabled
    pub enabled: bool,

    /// Volume (0.0 - 1.0)
    pub volume: f32,

    /// Played when an alien reaches the bottom
    pub lose_sound: PathBuf,

    /// Played when the last alien is shot
    pub win_sound: PathBuf,
}

/// Frame loop and logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Target frames per second (0 = unthrottled)
    pub frame_rate: u32,

    /// Stop after this many frames (0 = no limit)
    pub max_frames: u64,

    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            max_x: 900,
            max_y: 600,
            cell_size: 15,
            top: 0,
            bottom: 585,
        }
    }
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            alien_rows: 3,
            aliens_per_row: 8,
            alien_step_frames: 12,
            fire_cooldown_frames: 4,
            linger_frames: 30,
            seed: 7,
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 0.8,
            lose_sound: ["resources", "sounds", "lose_sound.wav"].iter().collect(),
            win_sound: ["resources", "sounds", "win_sound.wav"].iter().collect(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            frame_rate: 12,
            max_frames: 5000,
            log_level: "info".to_string(),
        }
    }
}

impl ScreenConfig {
    /// Centre of the playfield
    pub const fn center(&self) -> (i32, i32) {
        (self.max_x / 2, self.max_y / 2)
    }

    /// Number of whole cells across the playfield (0 for a zero cell size)
    pub const fn columns(&self) -> i32 {
        match self.max_x.checked_div(self.cell_size) {
            Some(columns) => columns,
            None => 0,
        }
    }
}

impl EngineConfig {
    /// Director settings for this config
    pub fn director(&self) -> DirectorConfig {
        DirectorConfig {
            frame_rate: self.frame_rate,
            max_frames: (self.max_frames > 0).then_some(self.max_frames),
        }
    }
}

impl GameConfig {
    /// Check values that would make the game meaningless
    pub fn validate(&self) -> Result<(), String> {
        let screen = &self.screen;
        if screen.max_x <= 0 || screen.max_y <= 0 {
            return Err(format!("screen must be positive, got {}x{}", screen.max_x, screen.max_y));
        }
        if screen.cell_size <= 0 {
            return Err(format!("cell_size must be positive, got {}", screen.cell_size));
        }
        if screen.top < 0 || screen.bottom > screen.max_y {
            return Err(format!(
                "top ({}) and bottom ({}) must lie within 0..={}",
                screen.top, screen.bottom, screen.max_y
            ));
        }
        if screen.bottom <= screen.top {
            return Err(format!("bottom ({}) must be below top ({})", screen.bottom, screen.top));
        }

        let gameplay = &self.gameplay;
        if gameplay.alien_rows == 0 || gameplay.aliens_per_row == 0 {
            return Err("at least one alien is required".to_string());
        }
        if i64::from(gameplay.aliens_per_row) > i64::from(screen.columns()) {
            return Err(format!(
                "{} aliens per row do not fit in {} columns",
                gameplay.aliens_per_row,
                screen.columns()
            ));
        }
        if gameplay.alien_step_frames == 0 {
            return Err("alien_step_frames must be at least 1".to_string());
        }
        if !(0.0..=1.0).contains(&self.audio.volume) {
            return Err(format!("volume must be within 0.0..=1.0, got {}", self.audio.volume));
        }
        Ok(())
    }
}
