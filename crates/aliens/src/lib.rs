//! # Aliens
//!
//! A small alien-invasion arcade game: the player's ship fires upwards at
//! rows of aliens marching down the screen. Shoot them all to win; let one
//! reach the bottom line and the game is lost.
//!
//! The game is a [`cast_engine::Cast`] of actor groups (see [`groups`]) and
//! a [`cast_engine::script::Script`] of actions run once per frame:
//!
//! | Phase  | Action                                    |
//! |--------|-------------------------------------------|
//! | Input  | [`actions::ControlPlayerAction`]          |
//! | Update | [`actions::MoveActorsAction`]             |
//! | Update | [`actions::HandleCollisionsAction`]       |
//! | Output | [`actions::AnnounceMessagesAction`]       |

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod actions;
pub mod autopilot;
pub mod config;
pub mod error;
pub mod setup;
pub mod sounds;

#[cfg(test)]
mod tests;

pub use error::GameError;

/// Cast group names
pub mod groups {
    /// The player's ship (a single actor)
    pub const PLAYERS: &str = "players";
    /// Bullets in flight
    pub const BULLETS: &str = "bullets";
    /// Aliens still alive
    pub const ALIENS: &str = "aliens";
    /// Banner messages
    pub const MESSAGES: &str = "messages";

    /// Every group the game's actions expect
    pub const ALL: [&str; 4] = [PLAYERS, BULLETS, ALIENS, MESSAGES];
}
