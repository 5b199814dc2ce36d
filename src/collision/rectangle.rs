//! Rectangle-vs-rectangle resolution along the axis of least penetration.

use glam::Vec2;

use crate::shape::{Body, Frame};

use super::contact::Side;
use super::predicates::rectangle_overlap;
use super::CollisionEngine;

impl CollisionEngine {
    /// Push `r1` out of `r2` and report which side of `r1` made contact.
    ///
    /// The shallower axis wins; an exact tie resolves vertically. With
    /// `bounce`, `r1`'s velocity on the resolved axis is inverted. `r2` is
    /// never moved. Returns `None` when the boxes do not overlap.
    pub fn rectangle_collision<A, B>(
        &self,
        r1: &mut A,
        r2: &B,
        bounce: bool,
        frame: Frame,
    ) -> Option<Side>
    where
        A: Body + ?Sized,
        B: Body + ?Sized,
    {
        let overlap = rectangle_overlap(r1, r2, frame)?;
        let (delta, depth) = (overlap.delta, overlap.depth);

        let side = if depth.x >= depth.y {
            let side = if delta.y > 0.0 { Side::Top } else { Side::Bottom };
            let push = if side == Side::Top { depth.y } else { -depth.y };
            r1.translate(Vec2::new(0.0, push));
            if bounce {
                let v = r1.velocity();
                r1.set_velocity(Vec2::new(v.x, -v.y));
            }
            side
        } else {
            let side = if delta.x > 0.0 { Side::Left } else { Side::Right };
            let push = if side == Side::Left { depth.x } else { -depth.x };
            r1.translate(Vec2::new(push, 0.0));
            if bounce {
                let v = r1.velocity();
                r1.set_velocity(Vec2::new(-v.x, v.y));
            }
            side
        };

        Some(side)
    }
}
