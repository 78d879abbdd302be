#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point on the page in CSS pixels, relative to the canvas origin.
///
/// Positions are free-form: negative or off-canvas coordinates are valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point displaced by `delta`.
    #[must_use]
    pub fn offset(self, delta: Delta) -> Self {
        Self { x: self.x + delta.dx, y: self.y + delta.dy }
    }
}

/// A width/height pair in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Pointer displacement accumulated over the course of a drag or resize
/// gesture, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

impl Delta {
    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// The displacement that carries `from` onto `to`.
    #[must_use]
    pub fn between(from: Point, to: Point) -> Self {
        Self { dx: to.x - from.x, dy: to.y - from.y }
    }

    /// The inverse displacement.
    #[must_use]
    pub fn inverted(self) -> Self {
        Self { dx: -self.dx, dy: -self.dy }
    }
}
