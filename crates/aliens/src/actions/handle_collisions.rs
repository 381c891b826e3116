//! Bullet/alien collisions and the end of the game
//!
//! Once per frame every live alien is checked, in cast order:
//!
//! 1. an alien on or below the bottom line loses the game on the spot;
//! 2. otherwise each live bullet is compared with it: a bullet on exactly
//!    the alien's cell destroys both, and a bullet on or above the top line
//!    is despawned whether or not it hit anything;
//! 3. when no alien is left after its bullets were checked, the game is won.
//!
//! Removals are marked during the pass and applied after it, so an actor
//! removed this frame is never looked at again this frame and no live actor
//! is skipped because a neighbour went away.

use crate::config::ScreenConfig;
use crate::groups::{ALIENS, BULLETS, MESSAGES};
use crate::sounds::{GameSounds, Outcome};
use cast_engine::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

/// Banner shown when an alien reaches the bottom
pub const LOSE_MESSAGE: &str = "Game Over! *** You Lost!!!";
/// Banner shown when the last alien is shot
pub const WIN_MESSAGE: &str = "Game Over! *** You Win!!!";

/// Collision state machine: `Playing` moves to `GameOver` exactly once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Aliens and bullets are still being resolved
    Playing,
    /// Terminal; collisions are no longer resolved
    GameOver(Outcome),
}

impl GameState {
    /// The outcome, once the game is over
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Playing => None,
            Self::GameOver(outcome) => Some(outcome),
        }
    }
}

/// Lines and banner position used by the collision pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionBounds {
    /// Bullets at or above this y are despawned
    pub top: i32,
    /// Aliens at or below this y lose the game
    pub bottom: i32,
    /// Where the end-of-game banner goes
    pub banner: Point,
}

impl From<&ScreenConfig> for CollisionBounds {
    fn from(screen: &ScreenConfig) -> Self {
        let (x, y) = screen.center();
        Self {
            top: screen.top,
            bottom: screen.bottom,
            banner: Point::new(x, y),
        }
    }
}

/// Result of one collision pass over unchanged alien and bullet lists
#[derive(Debug, Clone, PartialEq, Eq)]
struct Resolution {
    dead_aliens: Vec<bool>,
    spent_bullets: Vec<bool>,
    outcome: Option<Outcome>,
}

/// Resolves hits, despawns bullets and detects the end of the game
pub struct HandleCollisionsAction {
    state: Rc<Cell<GameState>>,
    bounds: CollisionBounds,
    sounds: GameSounds,
    player: Box<dyn SoundPlayer>,
}

impl HandleCollisionsAction {
    /// Create the action in the `Playing` state
    pub fn new(bounds: CollisionBounds, sounds: GameSounds, player: Box<dyn SoundPlayer>) -> Self {
        Self {
            state: Rc::new(Cell::new(GameState::Playing)),
            bounds,
            sounds,
            player,
        }
    }

    /// Current state
    pub fn state(&self) -> GameState {
        self.state.get()
    }

    /// Read-only view of the state that outlives boxing the action into a script
    pub fn state_handle(&self) -> GameStateHandle {
        GameStateHandle(Rc::clone(&self.state))
    }

    fn resolve(&self, aliens: &[Actor], bullets: &[Actor]) -> Resolution {
        let mut resolution = Resolution {
            dead_aliens: vec![false; aliens.len()],
            spent_bullets: vec![false; bullets.len()],
            outcome: None,
        };
        let mut live_aliens = aliens.len();

        for (a, alien) in aliens.iter().enumerate() {
            let target = alien.position();
            if target.y() >= self.bounds.bottom {
                log::debug!("Alien at {} crossed the bottom line", target);
                resolution.outcome = Some(Outcome::Lost);
                return resolution;
            }

            for (b, bullet) in bullets.iter().enumerate() {
                if resolution.spent_bullets[b] {
                    continue;
                }
                let shot = bullet.position();
                if !resolution.dead_aliens[a] && shot == target {
                    log::debug!("Bullet hit alien at {}", target);
                    resolution.dead_aliens[a] = true;
                    resolution.spent_bullets[b] = true;
                    live_aliens -= 1;
                }
                if shot.y() <= self.bounds.top {
                    resolution.spent_bullets[b] = true;
                }
            }

            if live_aliens == 0 {
                resolution.outcome = Some(Outcome::Won);
                return resolution;
            }
        }

        resolution
    }

    fn finish(&mut self, cast: &mut Cast, outcome: Outcome) {
        self.state.set(GameState::GameOver(outcome));

        let text = match outcome {
            Outcome::Won => WIN_MESSAGE,
            Outcome::Lost => LOSE_MESSAGE,
        };
        log::info!("{}", text);
        cast.add_actor(MESSAGES, Actor::message(text, self.bounds.banner));

        if let Some(sound) = self.sounds.for_outcome(outcome) {
            self.player.play(sound);
        }
    }
}

impl Action for HandleCollisionsAction {
    fn name(&self) -> &str {
        "handle-collisions"
    }

    fn execute(&mut self, cast: &mut Cast, _frame: &mut FrameContext<'_>) -> Result<(), ActionError> {
        if self.state().outcome().is_some() {
            return Ok(());
        }

        let resolution = self.resolve(cast.actors(ALIENS)?, cast.actors(BULLETS)?);

        match resolution.outcome {
            Some(Outcome::Lost) => {
                cast.clear_group(ALIENS)?;
                remove_marked(cast.actors_mut(BULLETS)?, &resolution.spent_bullets);
            }
            Some(Outcome::Won) => {
                cast.clear_group(ALIENS)?;
                cast.clear_group(BULLETS)?;
            }
            None => {
                remove_marked(cast.actors_mut(ALIENS)?, &resolution.dead_aliens);
                remove_marked(cast.actors_mut(BULLETS)?, &resolution.spent_bullets);
            }
        }

        if let Some(outcome) = resolution.outcome {
            self.finish(cast, outcome);
        }
        Ok(())
    }
}

/// Shared read-only view of a [`HandleCollisionsAction`]'s state
#[derive(Debug, Clone)]
pub struct GameStateHandle(Rc<Cell<GameState>>);

impl GameStateHandle {
    /// Current state
    pub fn get(&self) -> GameState {
        self.0.get()
    }
}

fn remove_marked(actors: &mut Vec<Actor>, marks: &[bool]) {
    let mut index = 0;
    actors.retain(|_| {
        let keep = !marks.get(index).copied().unwrap_or(false);
        index += 1;
        keep
    });
}
