//! Circle-vs-rectangle and circle-vs-point contacts.
//!
//! A circle near a rectangle's flat edge is resolved as a box contact using the
//! circle's bounding square. Near a corner it is resolved against the corner
//! point, treated as a tiny circle.

use glam::Vec2;

use crate::shape::{Body, Circle, Frame, Rectangle};

use super::contact::Region;
use super::predicates::{hit_test_circle, hit_test_rectangle};
use super::CollisionEngine;

impl CollisionEngine {
    /// Classify the circle's center into one of the regions around `rect`.
    ///
    /// Corner thresholds are widened by `corner_bias`, so a circle just past
    /// a corner still counts as touching the edge.
    pub fn classify_region(&self, circle: &Circle, rect: &Rectangle, frame: Frame) -> Region {
        let c = circle.center(frame);
        let r = rect.center(frame);
        let half = rect.half_extents();
        let corner_x = half.x + self.config.corner_bias;

        let horizontal = |left, middle, right| {
            if c.x < r.x - corner_x {
                left
            } else if c.x > r.x + corner_x {
                right
            } else {
                middle
            }
        };

        if c.y < r.y - half.y {
            horizontal(Region::TopLeft, Region::TopMiddle, Region::TopRight)
        } else if c.y > r.y + half.y {
            horizontal(Region::BottomLeft, Region::BottomMiddle, Region::BottomRight)
        } else if c.x < r.x - half.x {
            Region::LeftMiddle
        } else {
            Region::RightMiddle
        }
    }

    /// Does the circle touch `point`?
    pub fn hit_test_circle_point(&self, circle: &Circle, point: Vec2, frame: Frame) -> bool {
        let point = Circle::point(point, self.config.point_diameter);
        hit_test_circle(circle, &point, frame)
    }

    /// Push the circle off `point`, optionally bouncing it.
    pub fn circle_point_collision(
        &self,
        circle: &mut Circle,
        point: Vec2,
        bounce: bool,
        frame: Frame,
    ) -> bool {
        let point = Circle::point(point, self.config.point_diameter);
        self.circle_collision(circle, &point, bounce, frame)
    }

    /// Does the circle touch the rectangle? Reports the region on a hit.
    pub fn hit_test_circle_rectangle(
        &self,
        circle: &Circle,
        rect: &Rectangle,
        frame: Frame,
    ) -> Option<Region> {
        let region = self.classify_region(circle, rect, frame);
        let hit = match corner_point(region, rect, frame) {
            None => hit_test_rectangle(circle, rect, frame),
            Some(corner) => self.hit_test_circle_point(circle, corner, frame),
        };
        hit.then_some(region)
    }

    /// Push the circle out of the rectangle and report the contact region.
    ///
    /// The rectangle is never moved.
    pub fn circle_rectangle_collision(
        &self,
        circle: &mut Circle,
        rect: &Rectangle,
        bounce: bool,
        frame: Frame,
    ) -> Option<Region> {
        let region = self.classify_region(circle, rect, frame);
        let hit = match corner_point(region, rect, frame) {
            None => self
                .rectangle_collision(circle, rect, bounce, frame)
                .is_some(),
            Some(corner) => self.circle_point_collision(circle, corner, bounce, frame),
        };
        hit.then_some(region)
    }
}

/// The rectangle corner a corner region faces, or `None` for edge regions.
fn corner_point(region: Region, rect: &Rectangle, frame: Frame) -> Option<Vec2> {
    let min = rect.corner(frame);
    let max = min + rect.size;
    match region {
        Region::TopLeft => Some(min),
        Region::TopRight => Some(Vec2::new(max.x, min.y)),
        Region::BottomLeft => Some(Vec2::new(min.x, max.y)),
        Region::BottomRight => Some(max),
        _ => None,
    }
}
