//! Planar primitives shared by the scorer, the gesture controller, and the renderer.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Vector from `self` to `other`.
    #[must_use]
    pub fn to(self, other: Point) -> Point {
        Point::new(other.x - self.x, other.y - self.y)
    }

    /// Length of this point read as a vector from the origin.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[must_use]
    pub fn dot(self, other: Point) -> f64 {
        self.x.mul_add(other.x, self.y * other.y)
    }
}

/// A best-fit circle.
///
/// `radius` is always finite and non-negative; degenerate fits never produce
/// a `FittedCircle`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FittedCircle {
    pub center: Point,
    pub radius: f64,
}

impl FittedCircle {
    /// Absolute distance from `p` to the circle's outline.
    #[must_use]
    pub fn radial_deviation(&self, p: Point) -> f64 {
        (p.distance_to(self.center) - self.radius).abs()
    }
}
