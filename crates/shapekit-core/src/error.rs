//! Error handling for ShapeKit
//!
//! The scene model has a single failure mode of its own: rejecting shapes
//! with non-positive dimensions at construction time. Everything else it
//! reports (empty history, a missed hit-test) is a normal outcome, not an
//! error.
//!
//! Errors use `thiserror`. Other crates wrap `ShapeError` in their own
//! error types or in `anyhow` at the binary edge.

use thiserror::Error;

/// Shape construction error
///
/// Raised before a shape ever enters the scene graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// A size parameter was zero or negative
    #[error("{shape} {dimension} must be positive, got {value}")]
    NonPositiveDimension {
        /// The shape kind being constructed.
        shape: &'static str,
        /// The offending parameter name.
        dimension: &'static str,
        /// The rejected value.
        value: i32,
    },
}

impl ShapeError {
    /// Returns the name of the rejected parameter.
    pub fn dimension(&self) -> &'static str {
        match self {
            ShapeError::NonPositiveDimension { dimension, .. } => dimension,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_error_display() {
        let err = ShapeError::NonPositiveDimension {
            shape: "Circle",
            dimension: "radius",
            value: -2,
        };
        assert_eq!(err.to_string(), "Circle radius must be positive, got -2");
        assert_eq!(err.dimension(), "radius");
    }
}
