//! Contact-surface vector helpers and the velocity reflection primitive.

use glam::Vec2;

use crate::shape::Body;

/// Magnitudes below this are treated as coincident points.
pub const DEGENERATE_EPSILON: f32 = 1e-6;

/// Rotate `v` a quarter turn: `(v.y, -v.x)`.
#[inline]
pub fn left_normal(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}

/// Unit vector along `v`, whose length the caller already knows.
///
/// Coincident centers have no direction; fall back to `+Y` so resolution
/// stays finite.
#[inline]
pub fn unit_direction(v: Vec2, magnitude: f32) -> Vec2 {
    if magnitude > DEGENERATE_EPSILON {
        v / magnitude
    } else {
        tracing::debug!(?v, "coincident centers, separating along +Y");
        Vec2::Y
    }
}

/// Reflect a body's velocity off a surface running along `surface`.
///
/// The component along the surface is kept, the component along its normal is
/// negated. A zero-length surface leaves the velocity untouched.
pub fn bounce_off_surface<B: Body + ?Sized>(body: &mut B, surface: Vec2) {
    let magnitude = surface.length();
    if magnitude <= DEGENERATE_EPSILON {
        return;
    }
    let along = surface / magnitude;
    let normal = left_normal(along);

    let velocity = body.velocity();
    let tangential = along * velocity.dot(along);
    let perpendicular = normal * velocity.dot(normal);
    body.set_velocity(tangential - perpendicular);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Circle;

    #[test]
    fn test_left_normal() {
        assert_eq!(left_normal(Vec2::new(1.0, 0.0)), Vec2::new(0.0, -1.0));
        assert_eq!(left_normal(Vec2::new(3.0, 4.0)), Vec2::new(4.0, -3.0));
        assert_eq!(left_normal(Vec2::new(3.0, 4.0)).dot(Vec2::new(3.0, 4.0)), 0.0);
    }

    #[test]
    fn test_unit_direction_degenerate() {
        assert_eq!(unit_direction(Vec2::new(0.0, 4.0), 4.0), Vec2::Y);
        assert_eq!(unit_direction(Vec2::new(-2.0, 0.0), 2.0), Vec2::NEG_X);
        let fallback = unit_direction(Vec2::ZERO, 0.0);
        assert!(fallback.is_finite());
        assert!((fallback.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_bounce_off_horizontal_floor() {
        let mut ball = Circle::new(2.0).with_velocity(Vec2::new(3.0, 5.0));
        bounce_off_surface(&mut ball, Vec2::new(10.0, 0.0));
        let eps = 1e-5;
        assert!((ball.velocity - Vec2::new(3.0, -5.0)).length() < eps);
    }

    #[test]
    fn test_bounce_off_diagonal_preserves_speed() {
        let mut ball = Circle::new(2.0).with_velocity(Vec2::new(2.0, 0.0));
        bounce_off_surface(&mut ball, Vec2::new(1.0, 1.0));
        let eps = 1e-5;
        assert!((ball.velocity - Vec2::new(0.0, 2.0)).length() < eps);
    }

    #[test]
    fn test_bounce_off_degenerate_surface_is_noop() {
        let mut ball = Circle::new(2.0).with_velocity(Vec2::new(1.0, -1.0));
        bounce_off_surface(&mut ball, Vec2::ZERO);
        assert_eq!(ball.velocity, Vec2::new(1.0, -1.0));
    }
}
