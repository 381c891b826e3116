//! Velocity-driven movement

use crate::config::ScreenConfig;
use cast_engine::prelude::*;

/// Moves every actor of the registered groups by its velocity
///
/// Each group steps on its own frame interval, so aliens can march slower
/// than bullets fly. Positions wrap around the playfield.
pub struct MoveActorsAction {
    max_x: i32,
    max_y: i32,
    groups: Vec<(&'static str, u64)>,
}

impl MoveActorsAction {
    /// Create an action that moves nothing yet
    pub fn new(screen: &ScreenConfig) -> Self {
        Self {
            max_x: screen.max_x,
            max_y: screen.max_y,
            groups: Vec::new(),
        }
    }

    /// Move `group` every `interval` frames (an interval of 0 counts as 1)
    #[must_use]
    pub fn every(mut self, group: &'static str, interval: u64) -> Self {
        self.groups.push((group, interval.max(1)));
        self
    }
}

impl Action for MoveActorsAction {
    fn name(&self) -> &str {
        "move-actors"
    }

    fn execute(&mut self, cast: &mut Cast, frame: &mut FrameContext<'_>) -> Result<(), ActionError> {
        for &(group, interval) in &self.groups {
            if frame.frame % interval != 0 {
                continue;
            }
            for actor in cast.actors_mut(group)? {
                actor.move_next(self.max_x, self.max_y);
            }
        }
        Ok(())
    }
}
