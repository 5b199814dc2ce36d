//! Circle-vs-circle resolution.

use glam::Vec2;

use crate::shape::{Body, Circle, Frame};

use super::surface::{bounce_off_surface, left_normal, unit_direction};
use super::CollisionEngine;

/// Center-to-center geometry of an overlapping circle pair.
struct CircleContact {
    /// Unit vector from the first center toward the second.
    direction: Vec2,
    /// Padded penetration depth.
    overlap: f32,
}

impl CollisionEngine {
    fn circle_contact(&self, c1: &Circle, c2: &Circle, frame: Frame) -> Option<CircleContact> {
        let between = c2.center(frame) - c1.center(frame);
        let magnitude = between.length();
        let combined_radii = c1.radius() + c2.radius();

        if magnitude >= combined_radii {
            return None;
        }

        Some(CircleContact {
            direction: unit_direction(between, magnitude),
            overlap: combined_radii - magnitude + self.config.separation_padding,
        })
    }

    /// Push `c1` out of `c2`, which is treated as immovable.
    ///
    /// With `bounce`, `c1`'s velocity is reflected off the contact surface.
    /// Returns whether the circles were overlapping.
    pub fn circle_collision(
        &self,
        c1: &mut Circle,
        c2: &Circle,
        bounce: bool,
        frame: Frame,
    ) -> bool {
        let Some(contact) = self.circle_contact(c1, c2, frame) else {
            return false;
        };

        c1.translate(-contact.direction * contact.overlap);

        if bounce {
            bounce_off_surface(c1, left_normal(contact.direction));
        }
        true
    }

    /// Separate two moving circles and exchange their normal velocities.
    ///
    /// The positional correction is split evenly between both circles. Each
    /// circle keeps its tangential velocity and takes the other's normal
    /// velocity, divided by its own mass.
    pub fn moving_circle_collision(&self, c1: &mut Circle, c2: &mut Circle, frame: Frame) -> bool {
        let Some(contact) = self.circle_contact(c1, c2, frame) else {
            return false;
        };
        let CircleContact { direction, overlap } = contact;

        let half = (direction * overlap * 0.5).abs();
        let (p1, p2) = (c1.center(frame), c2.center(frame));
        let side = Vec2::new(
            if p1.x >= p2.x { 1.0 } else { -1.0 },
            if p1.y >= p2.y { 1.0 } else { -1.0 },
        );
        c1.translate(half * side);
        c2.translate(half * -side);

        let tangent = left_normal(direction);
        let (v1, v2) = (c1.velocity, c2.velocity);
        let normal_1 = direction * v1.dot(direction);
        let normal_2 = direction * v2.dot(direction);
        let tangent_1 = tangent * v1.dot(tangent);
        let tangent_2 = tangent * v2.dot(tangent);

        c1.velocity = (tangent_1 + normal_2) / c1.mass();
        c2.velocity = (tangent_2 + normal_1) / c2.mass();
        true
    }
}
