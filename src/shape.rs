//! Sprite shapes and the geometry the collision routines read from them.
//!
//! Shapes are owned by the caller. The collision engine only reads their
//! geometry and, for resolvers, writes back `position` and `velocity`.

use std::fmt;

use glam::Vec2;

use crate::error::CollisionError;

/// Coordinate frame used when comparing two shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Frame {
    /// Compare centers in the shapes' own parent frame.
    #[default]
    Local,
    /// Compare centers composed with each shape's ancestor `origin`.
    Global,
}

/// Capabilities a resolver needs from a shape.
///
/// Implemented by [`Circle`] and [`Rectangle`]. A circle handed to a
/// rectangle routine behaves as its bounding square.
pub trait Body {
    /// Top-left corner in the parent frame.
    fn position(&self) -> Vec2;

    /// Move the shape by `offset` in its parent frame.
    fn translate(&mut self, offset: Vec2);

    /// World-space offset accumulated from ancestors.
    fn origin(&self) -> Vec2;

    /// Half of the bounding box width and height.
    fn half_extents(&self) -> Vec2;

    /// Current velocity.
    fn velocity(&self) -> Vec2;

    /// Overwrite the velocity.
    fn set_velocity(&mut self, velocity: Vec2);

    /// Mass used for velocity response. Always >= 1.
    fn mass(&self) -> f32 {
        1.0
    }

    /// Top-left corner in world space.
    #[inline]
    fn global_position(&self) -> Vec2 {
        self.origin() + self.position()
    }

    /// Top-left corner in the requested frame.
    #[inline]
    fn corner(&self, frame: Frame) -> Vec2 {
        match frame {
            Frame::Local => self.position(),
            Frame::Global => self.global_position(),
        }
    }

    /// Center point in the requested frame.
    #[inline]
    fn center(&self, frame: Frame) -> Vec2 {
        self.corner(frame) + self.half_extents()
    }
}

/// A disc-shaped sprite.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Top-left of the bounding square, in the parent frame.
    pub position: Vec2,
    /// World-space offset of the parent frame.
    pub origin: Vec2,
    pub diameter: f32,
    pub velocity: Vec2,
    /// Raw mass. Values below 1 (including non-positive) resolve as 1.
    pub mass: f32,
}

impl Circle {
    /// Create a resting circle of the given diameter with its top-left at the origin.
    pub fn new(diameter: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            origin: Vec2::ZERO,
            diameter,
            velocity: Vec2::ZERO,
            mass: 1.0,
        }
    }

    /// Create a circle centered on `center` in its parent frame.
    pub fn from_center(center: Vec2, radius: f32) -> Self {
        Self::new(radius * 2.0).at(center - Vec2::splat(radius))
    }

    /// A point stand-in: a tiny circle whose center is `at` in both frames.
    pub fn point(at: Vec2, diameter: f32) -> Self {
        Self::new(diameter).at(at - Vec2::splat(diameter * 0.5))
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.diameter * 0.5
    }

    /// Fail fast on geometry that would poison resolution with NaN.
    pub fn validate(&self) -> Result<(), CollisionError> {
        check_common(
            ShapeKind::Circle,
            self.position,
            self.origin,
            self.velocity,
        )?;
        if !self.diameter.is_finite() || self.diameter < 0.0 {
            return Err(CollisionError::InvalidShape {
                kind: ShapeKind::Circle,
                reason: "diameter must be finite and non-negative",
            });
        }
        Ok(())
    }
}

impl Body for Circle {
    #[inline]
    fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    fn translate(&mut self, offset: Vec2) {
        self.position += offset;
    }

    #[inline]
    fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    fn half_extents(&self) -> Vec2 {
        Vec2::splat(self.radius())
    }

    #[inline]
    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    #[inline]
    fn mass(&self) -> f32 {
        // NaN.max(1.0) is 1.0
        self.mass.max(1.0)
    }
}

/// An axis-aligned box sprite.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    /// Top-left corner in the parent frame.
    pub position: Vec2,
    /// World-space offset of the parent frame.
    pub origin: Vec2,
    /// Width and height.
    pub size: Vec2,
    pub velocity: Vec2,
}

impl Rectangle {
    pub fn new(size: Vec2) -> Self {
        Self {
            position: Vec2::ZERO,
            origin: Vec2::ZERO,
            size,
            velocity: Vec2::ZERO,
        }
    }

    /// Create a rectangle centered on `center` in its parent frame.
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self::new(half_extents * 2.0).at(center - half_extents)
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn validate(&self) -> Result<(), CollisionError> {
        check_common(
            ShapeKind::Rectangle,
            self.position,
            self.origin,
            self.velocity,
        )?;
        if !self.size.is_finite() || self.size.x < 0.0 || self.size.y < 0.0 {
            return Err(CollisionError::InvalidShape {
                kind: ShapeKind::Rectangle,
                reason: "size must be finite and non-negative",
            });
        }
        Ok(())
    }
}

impl Body for Rectangle {
    #[inline]
    fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    fn translate(&mut self, offset: Vec2) {
        self.position += offset;
    }

    #[inline]
    fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }

    #[inline]
    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }
}

fn check_common(
    kind: ShapeKind,
    position: Vec2,
    origin: Vec2,
    velocity: Vec2,
) -> Result<(), CollisionError> {
    let reason = if !position.is_finite() {
        "position is not finite"
    } else if !origin.is_finite() {
        "origin is not finite"
    } else if !velocity.is_finite() {
        "velocity is not finite"
    } else {
        return Ok(());
    };
    Err(CollisionError::InvalidShape { kind, reason })
}

/// Operand classification reported in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Point,
    Circle,
    Rectangle,
    Collection,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShapeKind::Point => "point",
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Collection => "collection",
        })
    }
}

/// A borrowed shape operand for the universal dispatcher.
///
/// Points are bare locations; circles and rectangles are scene members the
/// dispatcher may resolve in place.
#[derive(Debug)]
pub enum ShapeMut<'a> {
    Point(Vec2),
    Circle(&'a mut Circle),
    Rectangle(&'a mut Rectangle),
}

impl ShapeMut<'_> {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeMut::Point(_) => ShapeKind::Point,
            ShapeMut::Circle(_) => ShapeKind::Circle,
            ShapeMut::Rectangle(_) => ShapeKind::Rectangle,
        }
    }

    /// Whether this operand lives in a scene (can be resolved).
    pub fn is_scene_member(&self) -> bool {
        !matches!(self, ShapeMut::Point(_))
    }

    pub fn center(&self, frame: Frame) -> Vec2 {
        match self {
            ShapeMut::Point(p) => *p,
            ShapeMut::Circle(c) => c.center(frame),
            ShapeMut::Rectangle(r) => r.center(frame),
        }
    }

    pub fn validate(&self) -> Result<(), CollisionError> {
        match self {
            ShapeMut::Point(p) if !p.is_finite() => Err(CollisionError::InvalidShape {
                kind: ShapeKind::Point,
                reason: "position is not finite",
            }),
            ShapeMut::Point(_) => Ok(()),
            ShapeMut::Circle(c) => c.validate(),
            ShapeMut::Rectangle(r) => r.validate(),
        }
    }
}

impl From<Vec2> for ShapeMut<'_> {
    fn from(point: Vec2) -> Self {
        ShapeMut::Point(point)
    }
}

impl<'a> From<&'a mut Circle> for ShapeMut<'a> {
    fn from(circle: &'a mut Circle) -> Self {
        ShapeMut::Circle(circle)
    }
}

impl<'a> From<&'a mut Rectangle> for ShapeMut<'a> {
    fn from(rect: &'a mut Rectangle) -> Self {
        ShapeMut::Rectangle(rect)
    }
}
