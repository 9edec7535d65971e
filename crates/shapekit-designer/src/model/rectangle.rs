use std::fmt;

use shapekit_core::{FramePoint, Point, ShapeError};

use super::{DrawStyle, SceneShape};

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rectangle {
    top_left: Point,
    width: i32,
    height: i32,
}

impl Rectangle {
    /// Creates a rectangle, rejecting a non-positive width or height.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self, ShapeError> {
        if width <= 0 {
            return Err(ShapeError::NonPositiveDimension {
                shape: "Rectangle",
                dimension: "width",
                value: width,
            });
        }
        if height <= 0 {
            return Err(ShapeError::NonPositiveDimension {
                shape: "Rectangle",
                dimension: "height",
                value: height,
            });
        }
        Ok(Self {
            top_left: Point::new(x, y),
            width,
            height,
        })
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub(crate) fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "Rectangle {} {}*{}", self.top_left, self.width, self.height)
    }
}

impl SceneShape for Rectangle {
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

    // Closed on both ends of both axes.
    fn contains_local(&self, p: FramePoint) -> bool {
        let (px, py) = (p.x, p.y);
        let (x, y) = (i64::from(self.top_left.x), i64::from(self.top_left.y));
        px >= x
            && px <= x + i64::from(self.width)
            && py >= y
            && py <= y + i64::from(self.height)
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.top_left = self.top_left.offset(dx, dy);
    }

    fn position(&self) -> Point {
        self.top_left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_sides() {
        assert_eq!(
            Rectangle::new(0, 0, 0, 5).unwrap_err().dimension(),
            "width"
        );
        assert_eq!(
            Rectangle::new(0, 0, 5, -1).unwrap_err().dimension(),
            "height"
        );
        assert!(Rectangle::new(-3, -3, 1, 1).is_ok());
    }

    #[test]
    fn test_contains_point_closed_interval() {
        let r = Rectangle::new(5, 7, 5, 6).unwrap();
        assert!(r.contains_point(Point::new(5, 7)));
        assert!(r.contains_point(Point::new(10, 13)));
        assert!(r.contains_point(Point::new(7, 10)));
        assert!(!r.contains_point(Point::new(4, 10)));
        assert!(!r.contains_point(Point::new(11, 10)));
        assert!(!r.contains_point(Point::new(7, 6)));
        assert!(!r.contains_point(Point::new(7, 14)));
    }

    #[test]
    fn test_contains_point_near_i32_max() {
        let r = Rectangle::new(i32::MAX - 1, 0, i32::MAX, 1).unwrap();
        assert!(r.contains_point(Point::new(i32::MAX, 1)));
    }

    #[test]
    fn test_contains_point_beyond_i32_range() {
        let r = Rectangle::new(i32::MAX - 5, 0, 10, 10).unwrap();
        assert!(r.contains_local(FramePoint::new(i64::from(i32::MAX) + 5, 0)));
        assert!(!r.contains_local(FramePoint::new(i64::from(i32::MAX) + 6, 0)));
        assert!(!r.contains_local(FramePoint::new(i64::from(i32::MIN) - 1, 0)));
    }

    #[test]
    fn test_translate_saturates_at_i32_bounds() {
        let mut r = Rectangle::new(i32::MIN, i32::MAX, 1, 1).unwrap();
        r.translate(-1, 1);
        assert_eq!(r.top_left(), Point::new(i32::MIN, i32::MAX));
        assert_eq!(r.width(), 1);
    }

    #[test]
    fn test_draw() {
        let r = Rectangle::new(3, 4, 2, 3).unwrap();
        let mut out = String::new();
        r.draw(&mut out, 1).unwrap();
        assert_eq!(out, "+Rectangle (3, 4) 2*3\n");
    }

    #[test]
    fn test_translate() {
        let mut r = Rectangle::new(0, 0, 2, 2).unwrap();
        r.translate(3, -3);
        assert_eq!(r.top_left(), Point::new(3, -3));
        assert!(r.contains_point(Point::new(5, -1)));
        assert!(!r.contains_point(Point::new(1, 1)));
    }
}
