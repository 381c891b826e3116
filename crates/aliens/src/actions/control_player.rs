//! Player ship control

use crate::config::ScreenConfig;
use crate::groups::{BULLETS, PLAYERS};
use cast_engine::prelude::*;

/// What the pilot wants the ship to do this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Command {
    /// Horizontal direction in cells: -1, 0 or 1
    pub dx: i32,
    /// Fire a bullet
    pub fire: bool,
}

/// Decides the ship's next move
pub trait Pilot {
    /// Produce this frame's command
    fn steer(&mut self, cast: &Cast, input: &InputManager) -> Command;
}

/// Arrow keys or A/D to move, Space to fire
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyboardPilot;

impl Pilot for KeyboardPilot {
    fn steer(&mut self, _cast: &Cast, input: &InputManager) -> Command {
        let left = input.any_down(&[KeyCode::Left, KeyCode::A]);
        let right = input.any_down(&[KeyCode::Right, KeyCode::D]);
        Command {
            dx: i32::from(right) - i32::from(left),
            fire: input.is_key_down(KeyCode::Space),
        }
    }
}

/// Moves the player one cell at a time and fires bullets upwards
pub struct ControlPlayerAction {
    pilot: Box<dyn Pilot>,
    cell_size: i32,
    max_x: i32,
    max_y: i32,
    cooldown_frames: u64,
    last_shot: Option<u64>,
}

impl ControlPlayerAction {
    /// Create a controller driven by `pilot`
    pub fn new(screen: &ScreenConfig, cooldown_frames: u64, pilot: Box<dyn Pilot>) -> Self {
        Self {
            pilot,
            cell_size: screen.cell_size,
            max_x: screen.max_x,
            max_y: screen.max_y,
            cooldown_frames,
            last_shot: None,
        }
    }

    fn can_fire(&self, frame: u64) -> bool {
        self.last_shot
            .map_or(true, |last| frame.saturating_sub(last) >= self.cooldown_frames)
    }
}

impl Action for ControlPlayerAction {
    fn name(&self) -> &str {
        "control-player"
    }

    fn execute(&mut self, cast: &mut Cast, frame: &mut FrameContext<'_>) -> Result<(), ActionError> {
        let command = self.pilot.steer(cast, frame.input);

        let Some(player) = cast.actors_mut(PLAYERS)?.first_mut() else {
            return Ok(());
        };
        let step = Point::new(command.dx * self.cell_size, 0);
        player.set_position((player.position() + step).wrap(self.max_x, self.max_y));
        let muzzle = player.position() + Point::new(0, -self.cell_size);

        if command.fire && self.can_fire(frame.frame) {
            let bullet = Actor::at(muzzle).with_velocity(Point::new(0, -self.cell_size));
            cast.actors_mut(BULLETS)?.push(bullet);
            self.last_shot = Some(frame.frame);
            log::trace!("Fired from {} on frame {}", muzzle, frame.frame);
        }
        Ok(())
    }
}
