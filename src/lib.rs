//! Spritehit
//!
//! Collision detection and resolution for 2D sprites: circles, axis-aligned
//! rectangles and points.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! 1. **shape** - Circle, rectangle and the `Body` trait the routines work on
//! 2. **collision** - Hit tests, resolvers, the batch sweep and the `hit` dispatcher
//! 3. **config** - Tunable padding and bias constants
//! 4. **error** - Errors reported by the dispatcher
//!
//! Coordinates are screen space: `+x` right, `+y` down.

pub mod collision;
pub mod config;
pub mod error;
pub mod shape;

// Re-export commonly used types
pub use collision::{
    bounce_off_surface, hit_test_circle, hit_test_point_circle, hit_test_point_rectangle,
    hit_test_rectangle, Collision, CollisionEngine, HitOptions, HitOutcome, Region, Side, Target,
};

pub use config::{CollisionConfig, CORNER_BIAS_PADDING, POINT_DIAMETER, SEPARATION_PADDING};

pub use error::CollisionError;

pub use shape::{Body, Circle, Frame, Rectangle, ShapeKind, ShapeMut};

// Re-export glam for convenience
pub use glam;
