//! Rigid-body descriptors
//!
//! What a node asks of the physics simulation: body kind, mass, friction and
//! the shape used for collisions.

use glam::Vec3;

/// How the simulation treats a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Never moves; other bodies rest on it
    Static,
    /// Fully simulated: gravity, contacts, impulses
    Dynamic,
}

/// Shape used for collision detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollisionShape {
    /// Derive the collider from the node's own geometry
    Geometry,
    /// Explicit box in the node's local frame (full size, meters)
    Box(Vec3),
}

/// Physical properties attached to a scene node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidBodyDesc {
    pub kind: BodyKind,
    /// Mass in kilograms (ignored for static bodies)
    pub mass: f32,
    /// Coulomb friction coefficient
    pub friction: f32,
    pub shape: CollisionShape,
}

/// Friction given to static bodies when none is specified.
pub const DEFAULT_STATIC_FRICTION: f32 = 0.5;

impl RigidBodyDesc {
    /// Dynamic body colliding with its own geometry.
    pub fn dynamic(mass: f32, friction: f32) -> Self {
        Self {
            kind: BodyKind::Dynamic,
            mass,
            friction,
            shape: CollisionShape::Geometry,
        }
    }

    /// Static collider with an explicit box shape.
    pub fn static_box(size: Vec3) -> Self {
        Self {
            kind: BodyKind::Static,
            mass: 0.0,
            friction: DEFAULT_STATIC_FRICTION,
            shape: CollisionShape::Box(size),
        }
    }
}
