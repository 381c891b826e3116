//! Computer pilot for running the game without a keyboard

use crate::actions::{Command, Pilot};
use crate::groups::{ALIENS, PLAYERS};
use cast_engine::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chases the lowest alien and fires when lined up under it
///
/// Lowest means closest to the bottom line; ties go to the alien nearest the
/// ship. Now and then it hesitates for a frame so runs are not identical.
pub struct AutoPilot {
    rng: StdRng,
    hesitation: f64,
}

impl AutoPilot {
    /// Create a pilot; `hesitation` is the chance of idling on any frame
    pub fn new(seed: u64, hesitation: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            hesitation: hesitation.clamp(0.0, 1.0),
        }
    }

    fn target(ship: Point, aliens: &[Actor]) -> Option<Point> {
        aliens
            .iter()
            .map(Actor::position)
            .max_by_key(|alien| (alien.y(), -(alien.x() - ship.x()).abs()))
    }
}

impl Pilot for AutoPilot {
    fn steer(&mut self, cast: &Cast, _input: &InputManager) -> Command {
        let Some(ship) = cast.first_actor(PLAYERS).map(Actor::position) else {
            return Command::default();
        };
        let aliens = cast.actors(ALIENS).unwrap_or_default();
        let Some(target) = Self::target(ship, aliens) else {
            return Command::default();
        };
        if self.rng.gen_bool(self.hesitation) {
            return Command::default();
        }

        let dx = (target.x() - ship.x()).signum();
        Command { dx, fire: dx == 0 }
    }
}
