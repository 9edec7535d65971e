//! Coordinate types for the scene model.
//!
//! All scene geometry is integer-valued. Every node stores its position in
//! its parent's frame, so the main operation here is moving a point between
//! frames. Stored positions are `i32`; query points are widened to `i64`.

use serde::{Deserialize, Serialize};

/// A point (or offset) in a 2D integer coordinate frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin of a frame.
    pub const fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Returns this point translated by `(dx, dy)`, clamped to the `i32` range.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// A query point expressed in some node's local frame.
///
/// Subtracting a group origin from an `i32` point can leave the `i32` range,
/// and a child reaching past `i32::MAX` can still contain such a point, so
/// hit-testing carries coordinates in `i64` from the top-level frame down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FramePoint {
    pub x: i64,
    pub y: i64,
}

impl FramePoint {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Expresses this point in the frame whose origin sits at `origin`.
    pub fn relative_to(self, origin: Point) -> Self {
        Self {
            x: self.x.saturating_sub(i64::from(origin.x)),
            y: self.y.saturating_sub(i64::from(origin.y)),
        }
    }

    /// Squared Euclidean distance to `other`, saturating at `u64::MAX`.
    pub fn distance_squared(self, other: Point) -> u64 {
        let square = |d: u64| d.checked_mul(d).unwrap_or(u64::MAX);
        let dx = self.x.abs_diff(i64::from(other.x));
        let dy = self.y.abs_diff(i64::from(other.y));
        square(dx).saturating_add(square(dy))
    }
}

impl From<Point> for FramePoint {
    fn from(p: Point) -> Self {
        Self::new(i64::from(p.x), i64::from(p.y))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
