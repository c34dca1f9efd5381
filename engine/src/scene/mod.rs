//! Scene Module
//!
//! Descriptors handed to the scene graph of the perception/render/physics
//! collaborator. Nodes are plain data: the collaborator decides how to draw
//! and simulate them.
//!
//! # Submodules
//!
//! - [`light`] - Ambient and directional light descriptors

pub mod light;

pub use light::{Light, LightKind};

use glam::{Quat, Vec3};

use crate::physics::RigidBodyDesc;

/// Opaque handle of a node living in the collaborator's scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// Rectangular box, dimensions in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxGeometry {
    /// Extent along local X
    pub width: f32,
    /// Extent along local Y
    pub height: f32,
    /// Extent along local Z
    pub length: f32,
    /// Edge rounding radius (0.0 = flat)
    pub chamfer_radius: f32,
}

impl BoxGeometry {
    pub fn new(width: f32, height: f32, length: f32) -> Self {
        Self {
            width,
            height,
            length,
            chamfer_radius: 0.0,
        }
    }

    /// Full size as a vector (width, height, length).
    pub fn size(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.length)
    }

    pub fn half_extents(&self) -> Vec3 {
        self.size() * 0.5
    }
}

/// Single-sided plane spanning local X (width) and local Y (height).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneGeometry {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Box(BoxGeometry),
    Plane(PlaneGeometry),
}

impl Geometry {
    /// Local-space half extents. Planes are treated as infinitely thin.
    pub fn half_extents(&self) -> Vec3 {
        match self {
            Geometry::Box(b) => b.half_extents(),
            Geometry::Plane(p) => Vec3::new(p.width * 0.5, p.height * 0.5, 0.0),
        }
    }
}

/// Surface appearance of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Lit diffuse colour (linear RGB, 0-1)
    Diffuse([f32; 3]),
    /// Writes no colour at all. The node still occludes and collides.
    OcclusionOnly,
}

/// Rigid placement of a node in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Transform a local direction into world space.
    pub fn rotate(&self, local: Vec3) -> Vec3 {
        self.rotation * local
    }

    /// World-space half extents of an oriented box with `half` local extents.
    pub fn world_half_extents(&self, half: Vec3) -> Vec3 {
        let m = glam::Mat3::from_quat(self.rotation);
        m.x_axis.abs() * half.x + m.y_axis.abs() * half.y + m.z_axis.abs() * half.z
    }
}

/// Everything the collaborator needs to create (or rebuild) one node.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Debug label
    pub name: String,
    pub transform: Transform,
    pub geometry: Option<Geometry>,
    pub material: Option<Material>,
    pub body: Option<RigidBodyDesc>,
    pub light: Option<Light>,
}

impl SceneNode {
    /// Empty node at the origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            geometry: None,
            material: None,
            body: None,
            light: None,
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_geometry(mut self, geometry: Geometry, material: Material) -> Self {
        self.geometry = Some(geometry);
        self.material = Some(material);
        self
    }

    pub fn with_body(mut self, body: RigidBodyDesc) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_light(mut self, light: Light) -> Self {
        self.light = Some(light);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_half_extents_identity() {
        let t = Transform::IDENTITY;
        let half = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(t.world_half_extents(half), half);
    }

    #[test]
    fn test_world_half_extents_plane_laid_flat() {
        // A plane rotated -90° about X lies in XZ.
        let t = Transform::IDENTITY
            .with_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2));
        let half = Geometry::Plane(PlaneGeometry {
            width: 2.0,
            height: 4.0,
        })
        .half_extents();
        let world = t.world_half_extents(half);
        assert!((world.x - 1.0).abs() < 1e-5);
        assert!(world.y.abs() < 1e-5);
        assert!((world.z - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_box_geometry_flat_by_default() {
        let b = BoxGeometry::new(0.1, 0.2, 0.3);
        assert_eq!(b.chamfer_radius, 0.0);
        assert_eq!(b.half_extents(), Vec3::new(0.05, 0.1, 0.15));
    }
}
