//! Shared setup helpers for spritehit benchmarks.
//!
//! ## Running
//!
//! All groups (criterion):
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench collision
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench collision -- sweep
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench collision -- dispatch

use glam::Vec2;
use spritehit::{Circle, Rectangle};

/// Marble radius used by every scene.
pub const MARBLE_RADIUS: f32 = 8.0;

// ---------------------------------------------------------------------------
// Scenes
// ---------------------------------------------------------------------------

/// `n` moving marbles in a grid tight enough that neighbours overlap.
pub fn setup_marbles(n: usize) -> Vec<Circle> {
    let cols = (n as f32).sqrt().ceil() as usize;
    let spacing = MARBLE_RADIUS * 1.5;

    (0..n)
        .map(|i| {
            let center = Vec2::new((i % cols) as f32, (i / cols) as f32) * spacing;
            // Alternate directions so neighbouring pairs approach each other.
            let velocity = if (i + i / cols) % 2 == 0 {
                Vec2::new(1.0, 0.5)
            } else {
                Vec2::new(-1.0, -0.5)
            };
            Circle::from_center(center, MARBLE_RADIUS).with_velocity(velocity)
        })
        .collect()
}

/// `n` marbles spaced so no pair touches.
pub fn setup_sparse_marbles(n: usize) -> Vec<Circle> {
    let cols = (n as f32).sqrt().ceil() as usize;
    let spacing = MARBLE_RADIUS * 4.0;

    (0..n)
        .map(|i| {
            let center = Vec2::new((i % cols) as f32, (i / cols) as f32) * spacing;
            Circle::from_center(center, MARBLE_RADIUS).with_velocity(Vec2::X)
        })
        .collect()
}

/// A row of `n` square wall tiles along the x axis, each `size` wide.
pub fn setup_wall_row(n: usize, size: f32) -> Vec<Rectangle> {
    (0..n)
        .map(|i| Rectangle::new(Vec2::splat(size)).at(Vec2::new(i as f32 * size, 0.0)))
        .collect()
}
