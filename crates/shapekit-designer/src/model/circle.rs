use std::fmt;

use shapekit_core::{FramePoint, Point, ShapeError};

use super::{DrawStyle, SceneShape};

/// A circle given by its center and a positive radius.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
    center: Point,
    radius: i32,
}

impl Circle {
    /// Creates a circle, rejecting a non-positive radius.
    pub fn new(x: i32, y: i32, radius: i32) -> Result<Self, ShapeError> {
        if radius <= 0 {
            return Err(ShapeError::NonPositiveDimension {
                shape: "Circle",
                dimension: "radius",
                value: radius,
            });
        }
        Ok(Self {
            center: Point::new(x, y),
            radius,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub(crate) fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "Circle {} R={}", self.center, self.radius)
    }
}

impl SceneShape for Circle {
    fn draw_styled(
        &self,
        out: &mut dyn fmt::Write,
        depth: usize,
        style: &DrawStyle,
    ) -> fmt::Result {
        style.write_indent(out, depth)?;
        self.describe(out)?;
        out.write_char('\n')
    }

    fn contains_local(&self, p: FramePoint) -> bool {
        let r = u64::from(self.radius.unsigned_abs());
        p.distance_squared(self.center) <= r * r
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.center = self.center.offset(dx, dy);
    }

    fn position(&self) -> Point {
        self.center
    }
}
