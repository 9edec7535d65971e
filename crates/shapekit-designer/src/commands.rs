//! Reversible edits applied to the scene's top-level object sequence.

use crate::model::{Node, NodeKind};

/// A reversible edit.
///
/// Commands are a closed set; each variant knows how to apply itself to the
/// target sequence and how to reverse that.
#[derive(Debug, Clone)]
pub enum SceneCommand {
    AddObject(AddObject),
}

/// Appends one node to the end of the target sequence.
///
/// The command owns the node whenever it is not in the scene: `Some` before
/// the first apply and after an undo, `None` while the node sits at the end
/// of the target.
#[derive(Debug, Clone)]
pub struct AddObject {
    kind: NodeKind,
    node: Option<Node>,
}

impl AddObject {
    pub fn new(node: impl Into<Node>) -> Self {
        let node = node.into();
        Self {
            kind: node.kind(),
            node: Some(node),
        }
    }

    /// Kind of the node this command appends.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// True while the node is held by the command rather than the scene.
    pub fn is_pending(&self) -> bool {
        self.node.is_some()
    }

    fn apply(&mut self, target: &mut Vec<Node>) {
        match self.node.take() {
            Some(node) => target.push(node),
            None => tracing::warn!("{} applied twice; ignoring", self.name()),
        }
    }

    // Appends and their undos nest like a stack, so the last element is
    // always the one this command appended.
    fn undo(&mut self, target: &mut Vec<Node>) {
        match target.pop() {
            Some(node) => {
                debug_assert_eq!(node.kind(), self.kind);
                self.node = Some(node);
            }
            None => tracing::warn!("{} undone against an empty scene", self.name()),
        }
    }

    fn name(&self) -> &'static str {
        match self.kind {
            NodeKind::Circle => "Add Circle",
            NodeKind::Rectangle => "Add Rectangle",
            NodeKind::Group => "Add Group",
        }
    }
}

impl SceneCommand {
    pub fn add_object(node: impl Into<Node>) -> Self {
        SceneCommand::AddObject(AddObject::new(node))
    }

    pub fn apply(&mut self, target: &mut Vec<Node>) {
        match self {
            SceneCommand::AddObject(cmd) => cmd.apply(target),
        }
    }

    pub fn undo(&mut self, target: &mut Vec<Node>) {
        match self {
            SceneCommand::AddObject(cmd) => cmd.undo(target),
        }
    }

    /// Returns the name of the command for display.
    pub fn name(&self) -> &'static str {
        match self {
            SceneCommand::AddObject(cmd) => cmd.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Circle, Group, Rectangle};

    #[test]
    fn test_add_object_apply_and_undo() {
        let mut target: Vec<Node> = vec![Rectangle::new(0, 0, 1, 1).unwrap().into()];
        let mut cmd = SceneCommand::add_object(Circle::new(1, 1, 1).unwrap());
        assert_eq!(cmd.name(), "Add Circle");

        cmd.apply(&mut target);
        assert_eq!(target.len(), 2);
        assert_eq!(target[1].kind(), NodeKind::Circle);

        cmd.undo(&mut target);
        assert_eq!(target.len(), 1);
        assert_eq!(target[0].kind(), NodeKind::Rectangle);

        // Re-applying restores the very same node.
        cmd.apply(&mut target);
        assert_eq!(target[1].to_string(), "Circle (1, 1) R=1");
    }

    #[test]
    fn test_add_object_ownership_moves() {
        let mut target = Vec::new();
        let mut cmd = AddObject::new(Group::new(0, 0));
        assert!(cmd.is_pending());
        assert_eq!(cmd.kind(), NodeKind::Group);

        cmd.apply(&mut target);
        assert!(!cmd.is_pending());

        cmd.undo(&mut target);
        assert!(cmd.is_pending());
        assert!(target.is_empty());
    }

    #[test]
    fn test_names() {
        assert_eq!(
            SceneCommand::add_object(Rectangle::new(0, 0, 1, 1).unwrap()).name(),
            "Add Rectangle"
        );
        assert_eq!(
            SceneCommand::add_object(Group::new(0, 0)).name(),
            "Add Group"
        );
    }
}
