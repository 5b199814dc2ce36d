//! Collision detection and resolution for sprites.
//!
//! # Pipeline
//!
//! Every routine comes in two flavours:
//!
//! 1. **Hit tests** report whether two shapes overlap and never mutate them
//!    ([`predicates`] plus the region-aware tests on [`CollisionEngine`]).
//! 2. **Resolvers** additionally push the first shape (or both, for moving
//!    circles) out of the overlap and optionally bounce its velocity.
//!
//! Resolvers write to `position` and `velocity` in place. A shape that takes
//! part in several pairs within one tick sees the results of earlier pairs.
//!
//! [`CollisionEngine::hit`] routes any pair of operands to the right routine.

pub mod circle;
pub mod composite;
pub mod contact;
pub mod dispatch;
pub mod predicates;
pub mod rectangle;
pub mod surface;
pub mod sweep;

use crate::config::CollisionConfig;

pub use self::contact::{Collision, Region, Side};
pub use self::dispatch::{HitOptions, HitOutcome, Target};
pub use self::predicates::{
    hit_test_circle, hit_test_point_circle, hit_test_point_rectangle, hit_test_rectangle,
    rectangle_overlap, Overlap,
};
pub use self::surface::{bounce_off_surface, left_normal};

/// Entry point for the resolvers and the universal dispatcher.
#[derive(Debug, Clone, Default)]
pub struct CollisionEngine {
    config: CollisionConfig,
}

impl CollisionEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: CollisionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }
}
