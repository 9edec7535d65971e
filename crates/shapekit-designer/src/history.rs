//! Undo/Redo history for scene edits

use crate::commands::SceneCommand;
use crate::model::Node;

/// Manages undo/redo stacks for scene commands.
///
/// History is linear: recording a new command discards everything that was
/// undone before it.
#[derive(Debug, Default)]
pub struct CommandHistory {
    undo_stack: Vec<SceneCommand>,
    redo_stack: Vec<SceneCommand>,
    limit: Option<usize>,
}

impl CommandHistory {
    /// Create an unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history that keeps at most `limit` undoable commands
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Apply `cmd` to `target` and make it the most recent undoable command.
    pub fn record_and_apply(&mut self, target: &mut Vec<Node>, mut cmd: SceneCommand) {
        cmd.apply(target);
        tracing::debug!(command = cmd.name(), "recorded");

        self.undo_stack.push(cmd);
        self.redo_stack.clear();

        if let Some(limit) = self.limit {
            while self.undo_stack.len() > limit {
                let dropped = self.undo_stack.remove(0);
                tracing::debug!(command = dropped.name(), "history limit reached, dropping oldest");
            }
        }
    }

    /// Undo the most recent command. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self, target: &mut Vec<Node>) -> bool {
        match self.undo_stack.pop() {
            Some(mut cmd) => {
                cmd.undo(target);
                tracing::debug!(command = cmd.name(), "undone");
                self.redo_stack.push(cmd);
                true
            }
            None => {
                tracing::debug!("nothing to undo");
                false
            }
        }
    }

    /// Redo the most recently undone command. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self, target: &mut Vec<Node>) -> bool {
        match self.redo_stack.pop() {
            Some(mut cmd) => {
                cmd.apply(target);
                tracing::debug!(command = cmd.name(), "redone");
                self.undo_stack.push(cmd);
                true
            }
            None => {
                tracing::debug!("nothing to redo");
                false
            }
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Name of the command the next undo would reverse
    pub fn peek_undo_name(&self) -> Option<&'static str> {
        self.undo_stack.last().map(SceneCommand::name)
    }

    /// Name of the command the next redo would replay
    pub fn peek_redo_name(&self) -> Option<&'static str> {
        self.redo_stack.last().map(SceneCommand::name)
    }

    /// Forget all history. The target sequence is left as it is.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Circle, Rectangle};

    fn circle(x: i32) -> SceneCommand {
        SceneCommand::add_object(Circle::new(x, 0, 1).unwrap())
    }

    #[test]
    fn test_empty_history_is_noop() {
        let mut history = CommandHistory::new();
        let mut target = Vec::new();
        assert!(!history.undo(&mut target));
        assert!(!history.redo(&mut target));
        assert!(target.is_empty());
    }

    #[test]
    fn test_undo_redo_moves_between_stacks() {
        let mut history = CommandHistory::new();
        let mut target = Vec::new();

        history.record_and_apply(&mut target, circle(1));
        history.record_and_apply(&mut target, circle(2));
        assert_eq!(history.undo_count(), 2);
        assert_eq!(target.len(), 2);

        assert!(history.undo(&mut target));
        assert_eq!(target.len(), 1);
        assert_eq!(history.undo_count(), 1);
        assert_eq!(history.redo_count(), 1);

        assert!(history.redo(&mut target));
        assert_eq!(target.len(), 2);
        assert_eq!(target[1].to_string(), "Circle (2, 0) R=1");
        assert!(!history.can_redo());
    }

    #[test]
    fn test_new_command_clears_redo() {
        let mut history = CommandHistory::new();
        let mut target = Vec::new();

        history.record_and_apply(&mut target, circle(1));
        history.record_and_apply(&mut target, circle(2));
        history.undo(&mut target);
        history.record_and_apply(
            &mut target,
            SceneCommand::add_object(Rectangle::new(0, 0, 1, 1).unwrap()),
        );

        assert!(!history.can_redo());
        assert!(!history.redo(&mut target));
        let names: Vec<String> = target.iter().map(|n| n.to_string()).collect();
        assert_eq!(names, vec!["Circle (1, 0) R=1", "Rectangle (0, 0) 1*1"]);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = CommandHistory::with_limit(Some(2));
        let mut target = Vec::new();
        for x in 0..4 {
            history.record_and_apply(&mut target, circle(x));
        }
        assert_eq!(history.limit(), Some(2));
        assert_eq!(history.undo_count(), 2);
        assert_eq!(target.len(), 4);

        assert!(history.undo(&mut target));
        assert!(history.undo(&mut target));
        assert!(!history.undo(&mut target));
        assert_eq!(target.len(), 2);
    }

    #[test]
    fn test_peek_names_and_clear() {
        let mut history = CommandHistory::new();
        let mut target = Vec::new();
        assert_eq!(history.peek_undo_name(), None);

        history.record_and_apply(&mut target, circle(0));
        assert_eq!(history.peek_undo_name(), Some("Add Circle"));

        history.undo(&mut target);
        assert_eq!(history.peek_redo_name(), Some("Add Circle"));

        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
