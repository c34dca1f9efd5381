//! Backend Module
//!
//! The seam between placement logic and the perception/render/physics
//! collaborator. Placement code only talks to the traits below; the device
//! integration (or [`HeadlessBackend`] in demos and tests) implements them.
//!
//! # Traits
//!
//! - [`TrackingSession`] - start/continue/pause world tracking
//! - [`SurfaceHitTest`] - pointer to world-space point on a detected surface
//! - [`SceneGraph`] - add, rebuild and remove nodes
//! - [`PhysicsWorld`] - simulation sub-step and one-shot impulses
//! - [`ArBackend`] - all of the above

pub mod headless;

pub use headless::HeadlessBackend;

use glam::{Vec2, Vec3};

use crate::scene::{NodeId, SceneNode};

/// Which surfaces the tracking session looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaneDetection {
    /// Keep tracking, stop looking for new surfaces
    None,
    /// Detect horizontal surfaces
    #[default]
    Horizontal,
}

/// World-tracking session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackingConfig {
    pub plane_detection: PlaneDetection,
}

impl TrackingConfig {
    pub fn with_plane_detection(plane_detection: PlaneDetection) -> Self {
        Self { plane_detection }
    }
}

/// Orientation of a detected plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaneAlignment {
    Horizontal,
    Vertical,
}

/// A detected flat region.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneAnchor {
    /// Stable identifier assigned by the perception system
    pub id: String,
    pub alignment: PlaneAlignment,
    /// Center of the plane in world space
    pub center: Vec3,
    /// Footprint: width along X, depth along Z (meters)
    pub extent: Vec2,
}

/// Anything the perception system reports as anchored in the world.
#[derive(Debug, Clone, PartialEq)]
pub enum Anchor {
    Plane(PlaneAnchor),
    Image { id: String },
    Point { id: String, position: Vec3 },
}

impl Anchor {
    pub fn id(&self) -> &str {
        match self {
            Anchor::Plane(plane) => &plane.id,
            Anchor::Image { id } | Anchor::Point { id, .. } => id,
        }
    }

    /// The plane payload, if this anchor is a horizontal plane.
    pub fn as_horizontal_plane(&self) -> Option<&PlaneAnchor> {
        match self {
            Anchor::Plane(plane) if plane.alignment == PlaneAlignment::Horizontal => Some(plane),
            _ => None,
        }
    }
}

pub trait TrackingSession {
    /// Start the session, or re-run it with a new configuration. Idempotent.
    fn run(&mut self, config: &TrackingConfig);

    fn pause(&mut self);
}

pub trait SurfaceHitTest {
    /// Intersect the pointer ray with previously detected surfaces.
    ///
    /// `screen` is a normalized viewport position (0-1, origin bottom-left).
    fn hit_test(&self, screen: Vec2) -> Option<Vec3>;
}

pub trait SceneGraph {
    fn add_node(&mut self, node: SceneNode) -> NodeId;

    /// Rebuild an existing node (geometry, transform, collider). Returns false if unknown.
    fn update_node(&mut self, id: NodeId, node: SceneNode) -> bool;

    /// Detach a node from the scene. Returns false if it was not there.
    fn remove_node(&mut self, id: NodeId) -> bool;
}

pub trait PhysicsWorld {
    /// Fixed simulation sub-step in seconds.
    fn set_time_step(&mut self, time_step: f32);

    /// One-shot impulse on a node's body. Returns false if the node has no
    /// dynamic body (including nodes already removed).
    fn apply_impulse(&mut self, id: NodeId, impulse: Vec3) -> bool;
}

/// Everything the interaction controller needs from its collaborator.
pub trait ArBackend: TrackingSession + SurfaceHitTest + SceneGraph + PhysicsWorld {}

impl<T> ArBackend for T where T: TrackingSession + SurfaceHitTest + SceneGraph + PhysicsWorld {}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane(alignment: PlaneAlignment) -> Anchor {
        Anchor::Plane(PlaneAnchor {
            id: "table".to_string(),
            alignment,
            center: Vec3::ZERO,
            extent: Vec2::ONE,
        })
    }

    #[test]
    fn test_only_horizontal_planes_pass() {
        assert!(plane(PlaneAlignment::Horizontal).as_horizontal_plane().is_some());
        assert!(plane(PlaneAlignment::Vertical).as_horizontal_plane().is_none());
        let image = Anchor::Image {
            id: "poster".to_string(),
        };
        assert!(image.as_horizontal_plane().is_none());
        assert_eq!(image.id(), "poster");
    }

    #[test]
    fn test_default_tracking_detects_horizontal_planes() {
        assert_eq!(
            TrackingConfig::default().plane_detection,
            PlaneDetection::Horizontal
        );
    }
}
