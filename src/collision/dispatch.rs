//! The universal `hit` dispatcher.
//!
//! Routes any pair of operands to the matching hit test or resolver:
//!
//! | a \ b      | Circle              | Rectangle           | Point        |
//! |------------|---------------------|---------------------|--------------|
//! | Circle     | circle vs circle    | circle vs rectangle | incompatible |
//! | Rectangle  | rectangle (bounds)  | rectangle           | incompatible |
//! | Point      | point in circle     | point in rectangle  | incompatible |
//!
//! A single scene member may also be tested against a collection, in either
//! argument position. The collection is walked in reverse order and the
//! single shape always acts as the first operand.

use glam::Vec2;

use crate::error::CollisionError;
use crate::shape::{Body, Circle, Frame, Rectangle, ShapeKind, ShapeMut};

use super::contact::Collision;
use super::predicates::{
    hit_test_circle, hit_test_point_circle, hit_test_point_rectangle, hit_test_rectangle,
};
use super::CollisionEngine;

/// Options for [`CollisionEngine::hit`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitOptions {
    /// Resolve the overlap instead of only testing for it.
    pub react: bool,
    /// Bounce the first shape off the second when resolving.
    pub bounce: bool,
    /// Frame both operands are compared in.
    pub frame: Frame,
}

impl HitOptions {
    pub fn react(mut self, react: bool) -> Self {
        self.react = react;
        self
    }

    pub fn bounce(mut self, bounce: bool) -> Self {
        self.bounce = bounce;
        self
    }

    pub fn frame(mut self, frame: Frame) -> Self {
        self.frame = frame;
        self
    }
}

/// One side of a [`CollisionEngine::hit`] call.
#[derive(Debug)]
pub enum Target<'a> {
    Single(ShapeMut<'a>),
    /// A collection of circles or rectangles sharing one kind.
    Many(Vec<ShapeMut<'a>>),
}

impl<'a> Target<'a> {
    /// Build a collection target from anything that yields shapes.
    pub fn many<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ShapeMut<'a>>,
    {
        Target::Many(items.into_iter().map(Into::into).collect())
    }

    fn kind(&self) -> ShapeKind {
        match self {
            Target::Single(shape) => shape.kind(),
            Target::Many(_) => ShapeKind::Collection,
        }
    }
}

impl<'a> From<ShapeMut<'a>> for Target<'a> {
    fn from(shape: ShapeMut<'a>) -> Self {
        Target::Single(shape)
    }
}

impl From<Vec2> for Target<'_> {
    fn from(point: Vec2) -> Self {
        Target::Single(ShapeMut::Point(point))
    }
}

impl<'a> From<&'a mut Circle> for Target<'a> {
    fn from(circle: &'a mut Circle) -> Self {
        Target::Single(ShapeMut::Circle(circle))
    }
}

impl<'a> From<&'a mut Rectangle> for Target<'a> {
    fn from(rect: &'a mut Rectangle) -> Self {
        Target::Single(ShapeMut::Rectangle(rect))
    }
}

impl<'a> From<Vec<ShapeMut<'a>>> for Target<'a> {
    fn from(shapes: Vec<ShapeMut<'a>>) -> Self {
        Target::Many(shapes)
    }
}

/// Result of a [`CollisionEngine::hit`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitOutcome {
    /// Single-vs-single result; `None` means no collision.
    Single(Option<Collision>),
    /// Per-element results, indexed by position in the collection.
    Many(Vec<Option<Collision>>),
}

impl HitOutcome {
    /// Whether any pair collided.
    pub fn is_hit(&self) -> bool {
        self.hits() > 0
    }

    /// Number of pairs that collided.
    pub fn hits(&self) -> usize {
        match self {
            HitOutcome::Single(collision) => usize::from(collision.is_some()),
            HitOutcome::Many(results) => results.iter().filter(|c| c.is_some()).count(),
        }
    }

    /// The single result, or the first hit in collection order.
    pub fn collision(&self) -> Option<Collision> {
        match self {
            HitOutcome::Single(collision) => *collision,
            HitOutcome::Many(results) => results.iter().flatten().next().copied(),
        }
    }
}

impl CollisionEngine {
    /// Test (and with `options.react`, resolve) `a` against `b`.
    ///
    /// Resolvers mutate the operands in place. Fails with
    /// [`CollisionError::IncompatibleTypes`] for pairings that have no
    /// meaning, including collections holding points or mixed kinds, and
    /// with [`CollisionError::InvalidShape`] if an operand carries
    /// non-finite or negative geometry. Both are reported before any shape
    /// is touched.
    pub fn hit<'a>(
        &self,
        a: impl Into<Target<'a>>,
        b: impl Into<Target<'a>>,
        options: HitOptions,
    ) -> Result<HitOutcome, CollisionError> {
        self.hit_with(a, b, options, |_, _| {})
    }

    /// Like [`hit`](Self::hit), calling `on_hit` with each collision and the
    /// shape it was found against.
    pub fn hit_with<'a, F>(
        &self,
        a: impl Into<Target<'a>>,
        b: impl Into<Target<'a>>,
        options: HitOptions,
        mut on_hit: F,
    ) -> Result<HitOutcome, CollisionError>
    where
        F: FnMut(Collision, &ShapeMut<'_>),
    {
        match (a.into(), b.into()) {
            (Target::Single(mut a), Target::Single(mut b)) => {
                a.validate()?;
                b.validate()?;
                let collision = self.pair(&mut a, &mut b, options)?;
                if let Some(collision) = collision {
                    on_hit(collision, &b);
                }
                Ok(HitOutcome::Single(collision))
            }
            (Target::Single(mut single), Target::Many(mut many))
            | (Target::Many(mut many), Target::Single(mut single)) => {
                if !single.is_scene_member() {
                    return Err(CollisionError::IncompatibleTypes {
                        a: single.kind(),
                        b: ShapeKind::Collection,
                    });
                }
                single.validate()?;
                let uniform = many.first().map(ShapeMut::kind);
                for shape in &many {
                    shape.validate()?;
                    if !shape.is_scene_member() {
                        return Err(CollisionError::IncompatibleTypes {
                            a: single.kind(),
                            b: shape.kind(),
                        });
                    }
                    if let Some(kind) = uniform.filter(|&kind| kind != shape.kind()) {
                        return Err(CollisionError::IncompatibleTypes {
                            a: kind,
                            b: shape.kind(),
                        });
                    }
                }

                tracing::trace!(kind = %single.kind(), len = many.len(), "hit against collection");
                let mut results = vec![None; many.len()];
                for (index, other) in many.iter_mut().enumerate().rev() {
                    let collision = self.pair(&mut single, other, options)?;
                    if let Some(collision) = collision {
                        on_hit(collision, other);
                    }
                    results[index] = collision;
                }
                Ok(HitOutcome::Many(results))
            }
            (a @ Target::Many(_), b @ Target::Many(_)) => Err(CollisionError::IncompatibleTypes {
                a: a.kind(),
                b: b.kind(),
            }),
        }
    }

    /// Route one pair of single shapes.
    fn pair(
        &self,
        a: &mut ShapeMut<'_>,
        b: &mut ShapeMut<'_>,
        options: HitOptions,
    ) -> Result<Option<Collision>, CollisionError> {
        let HitOptions {
            react,
            bounce,
            frame,
        } = options;

        let collision = match (a, b) {
            (ShapeMut::Circle(a), ShapeMut::Circle(b)) => {
                let hit = if !react {
                    hit_test_circle(a, b, frame)
                } else if a.velocity != Vec2::ZERO && b.velocity != Vec2::ZERO {
                    // Both moving: always an impulse exchange, `bounce` does not apply.
                    self.moving_circle_collision(a, b, frame)
                } else {
                    self.circle_collision(a, b, bounce, frame)
                };
                hit.then_some(Collision::Hit)
            }
            (ShapeMut::Circle(a), ShapeMut::Rectangle(b)) => {
                let region = if react {
                    self.circle_rectangle_collision(a, b, bounce, frame)
                } else {
                    self.hit_test_circle_rectangle(a, b, frame)
                };
                region.map(Collision::Region)
            }
            (ShapeMut::Rectangle(a), ShapeMut::Rectangle(b)) => {
                self.rectangle_pair(&mut **a, &**b, react, bounce, frame)
            }
            (ShapeMut::Rectangle(a), ShapeMut::Circle(b)) => {
                self.rectangle_pair(&mut **a, &**b, react, bounce, frame)
            }
            (ShapeMut::Point(p), ShapeMut::Circle(b)) => {
                hit_test_point_circle(*p, b, frame).then_some(Collision::Hit)
            }
            (ShapeMut::Point(p), ShapeMut::Rectangle(b)) => {
                hit_test_point_rectangle(*p, &**b, frame).then_some(Collision::Hit)
            }
            (a, b @ ShapeMut::Point(_)) => {
                return Err(CollisionError::IncompatibleTypes {
                    a: a.kind(),
                    b: b.kind(),
                })
            }
        };
        Ok(collision)
    }

    fn rectangle_pair<B: Body>(
        &self,
        a: &mut Rectangle,
        b: &B,
        react: bool,
        bounce: bool,
        frame: Frame,
    ) -> Option<Collision> {
        if react {
            self.rectangle_collision(a, b, bounce, frame)
                .map(Collision::Side)
        } else {
            hit_test_rectangle(a, b, frame).then_some(Collision::Hit)
        }
    }
}
