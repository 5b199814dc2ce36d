//! Error types for the collision dispatcher.

use thiserror::Error;

use crate::shape::ShapeKind;

/// Errors surfaced by [`CollisionEngine::hit`](crate::CollisionEngine::hit).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CollisionError {
    /// The operands cannot be used together in a collision test.
    #[error("a {a} and a {b} cannot be used together in a collision test")]
    IncompatibleTypes { a: ShapeKind, b: ShapeKind },

    /// An operand carries geometry that would make resolution undefined.
    #[error("invalid {kind}: {reason}")]
    InvalidShape {
        kind: ShapeKind,
        reason: &'static str,
    },
}
