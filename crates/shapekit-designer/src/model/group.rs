use std::fmt;

use shapekit_core::{FramePoint, Point};

use super::{DrawStyle, Node, SceneShape};

/// A composite node.
///
/// Children are stored in insertion order and positioned relative to the
/// group's `origin`. The last child added sits on top: it is drawn last and
/// hit-tested first. A group owns its children outright, so it can never
/// contain itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Group {
    origin: Point,
    children: Vec<Node>,
}

impl Group {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            origin: Point::new(x, y),
            children: Vec::new(),
        }
    }

    /// Appends a child on top of the existing ones.
    pub fn add(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Builder form of [`Group::add`].
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.add(child);
        self
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Finds the topmost child under `p` (given in the parent's frame).
    ///
    /// Returns the child together with `p` expressed in this group's frame.
    pub(crate) fn topmost_hit(&self, p: FramePoint) -> Option<(&Node, FramePoint)> {
        let local = p.relative_to(self.origin);
        self.children
            .iter()
            .rev()
            .find(|child| child.contains_local(local))
            .map(|child| (child, local))
    }

    pub(crate) fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "Group {}", self.origin)
    }
}

impl SceneShape for Group {
    fn draw_styled(
        &self,
        out: &mut dyn fmt::Write,
        depth: usize,
        style: &DrawStyle,
    ) -> fmt::Result {
        style.write_indent(out, depth)?;
        self.describe(out)?;
        out.write_char('\n')?;
        for child in &self.children {
            child.draw_styled(out, depth + 1, style)?;
        }
        Ok(())
    }

    // An empty group covers no points.
    fn contains_local(&self, p: FramePoint) -> bool {
        self.topmost_hit(p).is_some()
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.origin = self.origin.offset(dx, dy);
    }

    fn position(&self) -> Point {
        self.origin
    }
}
