//! Scene facade.
//!
//! Owns the top-level objects and the command history. Every mutation goes
//! through the history so it can be undone; draw and hit-test queries walk
//! the object graph read-only.

use std::fmt;

use shapekit_core::{Point, ShapeError};

use crate::commands::SceneCommand;
use crate::history::CommandHistory;
use crate::model::{Circle, DrawStyle, Group, Node, Rectangle, SceneShape};

/// The editable scene.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<Node>,
    history: CommandHistory,
    style: DrawStyle,
}

impl Scene {
    /// Creates an empty scene with unbounded history and the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scene whose history keeps at most `limit` undo steps.
    pub fn with_history_limit(limit: Option<usize>) -> Self {
        Self {
            history: CommandHistory::with_limit(limit),
            ..Self::default()
        }
    }

    /// Replaces the draw style.
    pub fn with_style(mut self, style: DrawStyle) -> Self {
        self.style = style;
        self
    }

    /// Builds the starter scene: a circle, a two-level nested group and a
    /// rectangle on top, all added as undoable edits.
    pub fn demo() -> Result<Self, ShapeError> {
        let mut scene = Self::new();
        scene.populate_demo()?;
        Ok(scene)
    }

    /// Adds the starter objects to this scene.
    pub fn populate_demo(&mut self) -> Result<(), ShapeError> {
        let inner = Group::new(4, 6).with_child(Circle::new(0, 1, 3)?);
        let outer = Group::new(2, 2)
            .with_child(Rectangle::new(3, 4, 2, 3)?)
            .with_child(Circle::new(1, 5, 2)?)
            .with_child(inner);

        self.add_object(Circle::new(10, 10, 5)?);
        self.add_object(outer);
        self.add_object(Rectangle::new(5, 7, 5, 6)?);
        Ok(())
    }

    /// Appends `node` on top of the scene as an undoable edit.
    pub fn add_object(&mut self, node: impl Into<Node>) {
        let cmd = SceneCommand::add_object(node);
        tracing::info!(command = cmd.name(), "adding object");
        self.history.record_and_apply(&mut self.objects, cmd);
    }

    /// Reverts the last edit. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.objects)
    }

    /// Replays the last undone edit. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.objects)
    }

    /// Writes every top-level object in insertion order, or the empty marker.
    pub fn draw(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        if self.objects.is_empty() {
            return writeln!(out, "{}", self.style.empty_marker);
        }
        for node in &self.objects {
            node.draw_styled(out, 0, &self.style)?;
        }
        Ok(())
    }

    /// Draws the scene into a new string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.draw(&mut out);
        out
    }

    /// Returns the innermost node under `point`, preferring the topmost
    /// top-level object, or `None` when nothing is there.
    pub fn find_element_at(&self, point: Point) -> Option<&Node> {
        let found = self
            .objects
            .iter()
            .rev()
            .find(|node| node.contains_point(point))
            .map(|node| node.find_deepest(point));

        tracing::debug!(%point, found = ?found.map(Node::kind), "hit-test");
        found
    }

    pub fn objects(&self) -> &[Node] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn style(&self) -> &DrawStyle {
        &self.style
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}
