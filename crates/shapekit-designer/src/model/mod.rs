use std::fmt;

use shapekit_core::{FramePoint, Point};

mod circle;
mod group;
mod rectangle;

pub use circle::Circle;
pub use group::Group;
pub use rectangle::Rectangle;

/// Text style used when drawing nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawStyle {
    /// Character repeated once per nesting level in front of each line.
    pub indent_marker: char,
    /// Line written by a scene with no top-level objects.
    pub empty_marker: String,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            indent_marker: '+',
            empty_marker: "[Empty]".to_string(),
        }
    }
}

impl DrawStyle {
    pub(crate) fn write_indent(&self, out: &mut dyn fmt::Write, depth: usize) -> fmt::Result {
        for _ in 0..depth {
            out.write_char(self.indent_marker)?;
        }
        Ok(())
    }
}

/// Capabilities shared by every node in the scene graph.
///
/// Deep copies come from `Clone`: children are owned by value, so cloning a
/// group copies its whole subtree.
pub trait SceneShape {
    /// Writes this node (and, for groups, its subtree) using `style`.
    fn draw_styled(&self, out: &mut dyn fmt::Write, depth: usize, style: &DrawStyle)
        -> fmt::Result;

    /// Tests whether `p`, given in the parent's frame, hits this node.
    fn contains_point(&self, p: Point) -> bool {
        self.contains_local(FramePoint::from(p))
    }

    /// [`SceneShape::contains_point`] for a point already widened into the
    /// parent's frame, possibly outside the `i32` range.
    fn contains_local(&self, p: FramePoint) -> bool;

    /// Moves the node by `(dx, dy)` in its parent's frame.
    fn translate(&mut self, dx: i32, dy: i32);

    /// Position in the parent's frame.
    fn position(&self) -> Point;

    /// Writes this node with the default style.
    fn draw(&self, out: &mut dyn fmt::Write, depth: usize) -> fmt::Result {
        self.draw_styled(out, depth, &DrawStyle::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Circle,
    Rectangle,
    Group,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Circle => write!(f, "Circle"),
            NodeKind::Rectangle => write!(f, "Rectangle"),
            NodeKind::Group => write!(f, "Group"),
        }
    }
}

/// Anything a scene or group can hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Circle(Circle),
    Rectangle(Rectangle),
    Group(Group),
}

impl SceneShape for Node {
    fn draw_styled(
        &self,
        out: &mut dyn fmt::Write,
        depth: usize,
        style: &DrawStyle,
    ) -> fmt::Result {
        match self {
            Node::Circle(s) => s.draw_styled(out, depth, style),
            Node::Rectangle(s) => s.draw_styled(out, depth, style),
            Node::Group(s) => s.draw_styled(out, depth, style),
        }
    }

    fn contains_local(&self, p: FramePoint) -> bool {
        match self {
            Node::Circle(s) => s.contains_local(p),
            Node::Rectangle(s) => s.contains_local(p),
            Node::Group(s) => s.contains_local(p),
        }
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        match self {
            Node::Circle(s) => s.translate(dx, dy),
            Node::Rectangle(s) => s.translate(dx, dy),
            Node::Group(s) => s.translate(dx, dy),
        }
    }

    fn position(&self) -> Point {
        match self {
            Node::Circle(s) => s.position(),
            Node::Rectangle(s) => s.position(),
            Node::Group(s) => s.position(),
        }
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Circle(_) => NodeKind::Circle,
            Node::Rectangle(_) => NodeKind::Rectangle,
            Node::Group(_) => NodeKind::Group,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Node::Group(g) => Some(g),
            Node::Circle(_) | Node::Rectangle(_) => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut Group> {
        match self {
            Node::Group(g) => Some(g),
            Node::Circle(_) | Node::Rectangle(_) => None,
        }
    }

    /// Returns the innermost node under `p` (given in this node's parent frame).
    ///
    /// A shape answers itself. A group scans its children topmost first and
    /// descends into the first one that contains the point; when no child
    /// does, the group itself is the answer. Callers normally check
    /// `contains_point` first, which guarantees a group never takes that
    /// fallback on the way down.
    pub fn find_deepest(&self, p: Point) -> &Node {
        self.find_deepest_local(FramePoint::from(p))
    }

    fn find_deepest_local(&self, p: FramePoint) -> &Node {
        match self {
            Node::Group(group) => match group.topmost_hit(p) {
                Some((child, local)) => child.find_deepest_local(local),
                None => self,
            },
            Node::Circle(_) | Node::Rectangle(_) => self,
        }
    }

    /// Draws this node and its subtree into a new string.
    pub fn render(&self, style: &DrawStyle) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.draw_styled(&mut out, 0, style);
        out
    }
}

/// The node's own descriptor line, without indentation or children.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Circle(s) => s.describe(f),
            Node::Rectangle(s) => s.describe(f),
            Node::Group(s) => s.describe(f),
        }
    }
}

impl From<Circle> for Node {
    fn from(c: Circle) -> Self {
        Node::Circle(c)
    }
}

impl From<Rectangle> for Node {
    fn from(r: Rectangle) -> Self {
        Node::Rectangle(r)
    }
}

impl From<Group> for Node {
    fn from(g: Group) -> Self {
        Node::Group(g)
    }
}
