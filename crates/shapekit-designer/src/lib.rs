//! # ShapeKit Designer
//!
//! This crate provides the scene model of the ShapeKit editor: a small set of
//! 2D shapes that can be composed into nested groups, hit-tested by point, and
//! edited through a reversible command history.
//!
//! ## Core Components
//!
//! ### Design Elements
//! - **Shapes**: Circles and rectangles with integer geometry
//! - **Groups**: Ordered, exclusively owned children positioned relative to the group
//! - **Nodes**: The closed set of things a scene or group can hold
//!
//! ### Editing
//! - **Commands**: Reversible edits applied to the top-level object sequence
//! - **History/Undo-Redo**: Linear undo and redo stacks
//! - **Scene**: Facade that routes edits through the history and answers queries
//!
//! ## Architecture
//!
//! ```text
//! Scene (facade)
//!   ├── objects: Vec<Node>
//!   │     └── Node = Circle | Rectangle | Group(Vec<Node>)
//!   └── CommandHistory
//!         ├── undo stack
//!         └── redo stack
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shapekit_designer::{Circle, Group, Point, Scene};
//!
//! let mut scene = Scene::new();
//! let mut group = Group::new(4, 6);
//! group.add(Circle::new(0, 1, 3)?);
//! scene.add_object(group);
//!
//! let hit = scene.find_element_at(Point::new(4, 4));
//! assert_eq!(hit.map(|n| n.to_string()), Some("Circle (0, 1) R=3".to_string()));
//!
//! scene.undo();
//! assert!(scene.is_empty());
//! # Ok::<(), shapekit_designer::ShapeError>(())
//! ```

pub mod commands;
pub mod history;
pub mod model;
pub mod scene;

pub use commands::{AddObject, SceneCommand};
pub use history::CommandHistory;
pub use model::{Circle, DrawStyle, Group, Node, NodeKind, Rectangle, SceneShape};
pub use scene::Scene;
pub use shapekit_core::{FramePoint, Point, ShapeError};
