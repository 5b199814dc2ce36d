//! Exhaustive all-pairs resolution over a set of circles.

use crate::shape::{Circle, Frame};

use super::CollisionEngine;

impl CollisionEngine {
    /// Resolve every overlapping pair with [`moving_circle_collision`].
    ///
    /// Pairs `(i, j)` with `i < j` are visited in ascending order and each
    /// pair sees the positions and velocities left by earlier pairs, so
    /// simultaneous multi-way contacts are only approximately solved.
    /// Returns the number of pairs that collided.
    ///
    /// [`moving_circle_collision`]: CollisionEngine::moving_circle_collision
    pub fn multiple_circle_collision(&self, circles: &mut [Circle], frame: Frame) -> usize {
        let mut hits = 0;
        for i in 0..circles.len() {
            let (head, tail) = circles.split_at_mut(i + 1);
            let c1 = &mut head[i];
            for c2 in tail.iter_mut() {
                if self.moving_circle_collision(c1, c2, frame) {
                    hits += 1;
                }
            }
        }
        tracing::trace!(count = circles.len(), hits, "circle sweep");
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SEPARATION_PADDING;
    use crate::shape::Body;
    use glam::Vec2;

    fn engine() -> CollisionEngine {
        CollisionEngine::default()
    }

    #[test]
    fn test_three_overlapping_circles() {
        let mut circles = vec![
            Circle::from_center(Vec2::new(0.0, 0.0), 5.0),
            Circle::from_center(Vec2::new(6.0, 0.0), 5.0),
            Circle::from_center(Vec2::new(3.0, 5.0), 5.0),
        ];

        let hits = engine().multiple_circle_collision(&mut circles, Frame::Local);
        assert_eq!(hits, 3);

        for i in 0..circles.len() {
            for j in (i + 1)..circles.len() {
                let distance = circles[i]
                    .center(Frame::Local)
                    .distance(circles[j].center(Frame::Local));
                assert!(
                    distance >= 10.0 - SEPARATION_PADDING,
                    "pair ({i}, {j}) still overlapping: {distance}"
                );
            }
        }
    }

    #[test]
    fn test_separated_circles_untouched() {
        let mut circles: Vec<Circle> = (0..5)
            .map(|i| Circle::from_center(Vec2::new(i as f32 * 20.0, 0.0), 5.0))
            .collect();
        let before = circles.clone();

        assert_eq!(
            engine().multiple_circle_collision(&mut circles, Frame::Local),
            0
        );
        assert_eq!(circles, before);
    }

    #[test]
    fn test_pair_order_is_ascending() {
        // Circle 0 overlaps 1 only; resolving (0, 1) first pushes 1 into 2.
        let mut circles = vec![
            Circle::from_center(Vec2::new(0.0, 0.0), 5.0),
            Circle::from_center(Vec2::new(9.0, 0.0), 5.0),
            Circle::from_center(Vec2::new(19.5, 0.0), 5.0),
        ];

        let hits = engine().multiple_circle_collision(&mut circles, Frame::Local);
        assert_eq!(hits, 2);
    }

    #[test]
    fn test_global_frame_uses_origin() {
        let mut circles = vec![
            Circle::from_center(Vec2::ZERO, 5.0).with_origin(Vec2::new(0.0, 50.0)),
            Circle::from_center(Vec2::new(0.0, 56.0), 5.0),
        ];
        let before = circles.clone();

        assert_eq!(
            engine().multiple_circle_collision(&mut circles, Frame::Local),
            0
        );
        assert_eq!(circles, before);

        assert_eq!(
            engine().multiple_circle_collision(&mut circles, Frame::Global),
            1
        );
        let distance = circles[0]
            .center(Frame::Global)
            .distance(circles[1].center(Frame::Global));
        assert!(distance >= 10.0, "still overlapping: {distance}");
        // Separated along y only; the first circle moves up.
        assert!(circles[0].center(Frame::Global).y < 50.0);
        assert!(circles[1].center(Frame::Global).y > 56.0);
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(engine().multiple_circle_collision(&mut [], Frame::Local), 0);
        let mut one = [Circle::new(4.0)];
        assert_eq!(engine().multiple_circle_collision(&mut one, Frame::Local), 0);
    }
}
