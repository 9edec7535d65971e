//! # ShapeKit Core
//!
//! Core types and error definitions shared by the ShapeKit crates.
//! Provides the integer coordinate type used by the scene model and the
//! error type for shape construction.

pub mod error;
pub mod types;

pub use error::ShapeError;
pub use types::{FramePoint, Point};
