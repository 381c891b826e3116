//! Math utilities and types
//!
//! The playfield is an integer grid, so positions and velocities share one
//! small value type.

use std::ops::Add;

/// A point or offset on the integer playfield
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// The origin, also used as "no velocity"
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate
    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    /// Vertical coordinate (grows downwards)
    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Wrap the point into `[0, max_x) x [0, max_y)`
    ///
    /// Non-positive bounds leave the matching axis untouched.
    #[must_use]
    pub fn wrap(self, max_x: i32, max_y: i32) -> Self {
        let x = if max_x > 0 { self.x.rem_euclid(max_x) } else { self.x };
        let y = if max_y > 0 { self.y.rem_euclid(max_y) } else { self.y };
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_exact() {
        assert_eq!(Point::new(10, 10), Point::new(10, 10));
        assert_ne!(Point::new(10, 10), Point::new(10, 11));
        assert_ne!(Point::new(10, 10), Point::new(11, 10));
    }

    #[test]
    fn test_add_is_component_wise() {
        let p = Point::new(3, -2) + Point::new(1, 1);
        assert_eq!(p, Point::new(4, -1));
        assert_eq!(Point::new(450, 585) + Point::new(0, -15), Point::new(450, 570));
    }

    #[test]
    fn test_wrap_negative_coordinates() {
        assert_eq!(Point::new(-15, 615).wrap(900, 600), Point::new(885, 15));
        assert_eq!(Point::new(900, 0).wrap(900, 600), Point::new(0, 0));
    }

    #[test]
    fn test_wrap_ignores_degenerate_bounds() {
        assert_eq!(Point::new(-5, 7).wrap(0, 0), Point::new(-5, 7));
    }
}
