//! Actor implementation

use crate::foundation::math::Point;

/// A positioned, optionally labelled thing on the playfield
///
/// Players, bullets, aliens and banner messages are all plain actors; what
/// an actor *is* comes from the cast group that owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Actor {
    position: Point,
    velocity: Point,
    text: String,
}

impl Actor {
    /// Create an actor at the origin with no text and no velocity
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an actor at `position`
    pub fn at(position: Point) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Create a banner message actor
    pub fn message(text: impl Into<String>, position: Point) -> Self {
        Self {
            position,
            velocity: Point::ZERO,
            text: text.into(),
        }
    }

    /// Builder-style velocity
    #[must_use]
    pub const fn with_velocity(mut self, velocity: Point) -> Self {
        self.velocity = velocity;
        self
    }

    /// Builder-style text
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Current position
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Move the actor to `position`
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Current velocity per step
    pub const fn velocity(&self) -> Point {
        self.velocity
    }

    /// Change the velocity
    pub fn set_velocity(&mut self, velocity: Point) {
        self.velocity = velocity;
    }

    /// Display text, empty when the actor has none
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the display text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Advance one step by the velocity, wrapping around the playfield
    pub fn move_next(&mut self, max_x: i32, max_y: i32) {
        self.position = (self.position + self.velocity).wrap(max_x, max_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_next_applies_velocity() {
        let mut actor = Actor::at(Point::new(30, 30)).with_velocity(Point::new(0, 15));
        actor.move_next(900, 600);
        assert_eq!(actor.position(), Point::new(30, 45));
    }

    #[test]
    fn test_move_next_wraps_off_the_top() {
        let mut bullet = Actor::at(Point::new(30, 0)).with_velocity(Point::new(0, -15));
        bullet.move_next(900, 600);
        assert_eq!(bullet.position(), Point::new(30, 585));
    }

    #[test]
    fn test_message_carries_text() {
        let banner = Actor::message("hello", Point::new(450, 300));
        assert_eq!(banner.text(), "hello");
        assert_eq!(banner.velocity(), Point::ZERO);
    }
}
