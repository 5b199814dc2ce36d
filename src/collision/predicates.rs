//! Pure hit tests. Nothing here mutates a shape.

use glam::Vec2;

use crate::shape::{Body, Circle, Frame};

/// Rectangle overlap data shared by the hit test and the resolver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    /// Center of the first shape minus center of the second.
    pub delta: Vec2,
    /// Penetration depth on each axis. Both components are positive.
    pub depth: Vec2,
}

/// Is `point` strictly inside the rectangle? Touching an edge is not a hit.
pub fn hit_test_point_rectangle<B: Body + ?Sized>(point: Vec2, rect: &B, frame: Frame) -> bool {
    let min = rect.corner(frame);
    let max = min + rect.half_extents() * 2.0;
    point.x > min.x && point.x < max.x && point.y > min.y && point.y < max.y
}

/// Is `point` strictly closer to the circle's center than its radius?
pub fn hit_test_point_circle(point: Vec2, circle: &Circle, frame: Frame) -> bool {
    point.distance(circle.center(frame)) < circle.radius()
}

/// Do two circles overlap?
pub fn hit_test_circle(c1: &Circle, c2: &Circle, frame: Frame) -> bool {
    let magnitude = (c2.center(frame) - c1.center(frame)).length();
    magnitude < c1.radius() + c2.radius()
}

/// Compute the overlap of two boxes, or `None` if they are apart on either axis.
#[inline]
pub fn rectangle_overlap<A, B>(r1: &A, r2: &B, frame: Frame) -> Option<Overlap>
where
    A: Body + ?Sized,
    B: Body + ?Sized,
{
    let delta = r1.center(frame) - r2.center(frame);
    let combined = r1.half_extents() + r2.half_extents();
    let distance = delta.abs();

    if distance.x < combined.x && distance.y < combined.y {
        Some(Overlap {
            delta,
            depth: combined - distance,
        })
    } else {
        None
    }
}

/// Do two boxes overlap on both axes?
pub fn hit_test_rectangle<A, B>(r1: &A, r2: &B, frame: Frame) -> bool
where
    A: Body + ?Sized,
    B: Body + ?Sized,
{
    rectangle_overlap(r1, r2, frame).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Rectangle;

    #[test]
    fn test_point_inside_rectangle() {
        let rect = Rectangle::new(Vec2::new(10.0, 10.0));
        assert!(hit_test_point_rectangle(
            Vec2::new(5.0, 5.0),
            &rect,
            Frame::Local
        ));
        assert!(!hit_test_point_rectangle(
            Vec2::new(15.0, 5.0),
            &rect,
            Frame::Local
        ));
    }

    #[test]
    fn test_point_on_rectangle_edge_misses() {
        let rect = Rectangle::new(Vec2::new(10.0, 10.0));
        assert!(!hit_test_point_rectangle(
            Vec2::new(0.0, 5.0),
            &rect,
            Frame::Local
        ));
        assert!(!hit_test_point_rectangle(
            Vec2::new(5.0, 10.0),
            &rect,
            Frame::Local
        ));
    }

    #[test]
    fn test_point_rectangle_global_frame() {
        let rect = Rectangle::new(Vec2::new(10.0, 10.0)).with_origin(Vec2::new(100.0, 0.0));
        let point = Vec2::new(105.0, 5.0);
        assert!(!hit_test_point_rectangle(point, &rect, Frame::Local));
        assert!(hit_test_point_rectangle(point, &rect, Frame::Global));
    }

    #[test]
    fn test_point_circle() {
        let circle = Circle::from_center(Vec2::new(0.0, 0.0), 5.0);
        assert!(hit_test_point_circle(
            Vec2::new(3.0, 3.0),
            &circle,
            Frame::Local
        ));
        // Exactly on the rim is not inside.
        assert!(!hit_test_point_circle(
            Vec2::new(5.0, 0.0),
            &circle,
            Frame::Local
        ));
    }

    #[test]
    fn test_circle_circle_overlap() {
        let a = Circle::from_center(Vec2::ZERO, 5.0);
        let b = Circle::from_center(Vec2::new(6.0, 0.0), 5.0);
        assert!(hit_test_circle(&a, &b, Frame::Local));

        let c = Circle::from_center(Vec2::new(10.0, 0.0), 5.0);
        assert!(!hit_test_circle(&a, &c, Frame::Local), "touching is a miss");
    }

    #[test]
    fn test_circle_circle_symmetry() {
        let pairs = [
            (Vec2::ZERO, 3.0, Vec2::new(4.0, 1.0), 2.0),
            (Vec2::new(-1.0, 7.0), 1.0, Vec2::new(-1.0, 5.0), 0.5),
            (Vec2::new(2.0, 2.0), 4.0, Vec2::new(8.0, 8.0), 4.0),
        ];
        for (ca, ra, cb, rb) in pairs {
            let a = Circle::from_center(ca, ra);
            let b = Circle::from_center(cb, rb);
            assert_eq!(
                hit_test_circle(&a, &b, Frame::Local),
                hit_test_circle(&b, &a, Frame::Local)
            );
        }
    }

    #[test]
    fn test_circle_circle_global_frame() {
        let a = Circle::from_center(Vec2::ZERO, 5.0);
        let b = Circle::from_center(Vec2::ZERO, 5.0).with_origin(Vec2::new(50.0, 0.0));
        assert!(hit_test_circle(&a, &b, Frame::Local));
        assert!(!hit_test_circle(&a, &b, Frame::Global));
    }

    #[test]
    fn test_rectangle_overlap_depths() {
        let a = Rectangle::from_center(Vec2::ZERO, Vec2::splat(5.0));
        let b = Rectangle::from_center(Vec2::new(8.0, 0.0), Vec2::splat(5.0));
        let overlap = rectangle_overlap(&a, &b, Frame::Local).unwrap();
        assert_eq!(overlap.delta, Vec2::new(-8.0, 0.0));
        assert_eq!(overlap.depth, Vec2::new(2.0, 10.0));
    }

    #[test]
    fn test_rectangle_requires_both_axes() {
        let a = Rectangle::from_center(Vec2::ZERO, Vec2::splat(5.0));
        let beside = Rectangle::from_center(Vec2::new(8.0, 12.0), Vec2::splat(5.0));
        assert!(!hit_test_rectangle(&a, &beside, Frame::Local));
        let edge = Rectangle::from_center(Vec2::new(10.0, 0.0), Vec2::splat(5.0));
        assert!(!hit_test_rectangle(&a, &edge, Frame::Local));
        let inside = Rectangle::from_center(Vec2::new(1.0, 1.0), Vec2::splat(1.0));
        assert!(hit_test_rectangle(&a, &inside, Frame::Local));
    }
}
