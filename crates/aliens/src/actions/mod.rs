//! Per-frame game actions

mod announce_messages;
mod control_player;
mod handle_collisions;
mod move_actors;

pub use announce_messages::AnnounceMessagesAction;
pub use control_player::{Command, ControlPlayerAction, KeyboardPilot, Pilot};
pub use handle_collisions::{
    CollisionBounds, GameState, GameStateHandle, HandleCollisionsAction, LOSE_MESSAGE, WIN_MESSAGE,
};
pub use move_actors::MoveActorsAction;
