//! Headless Backend
//!
//! Reference collaborator without a device: a look-at camera for hit tests,
//! a node table for the scene graph and [`RigidBodyWorld`] for physics.
//! Drives the demo binary and the integration tests.
//!
//! Surfaces are the nodes carrying plane geometry; hit tests intersect the
//! pointer ray with their bounded footprints and return the nearest hit.

use std::collections::BTreeMap;

use glam::{Vec2, Vec3};

use super::{PhysicsWorld, SceneGraph, SurfaceHitTest, TrackingConfig, TrackingSession};
use crate::camera::RaycastCamera;
use crate::physics::{BodyState, CollisionShape, RigidBodyWorld};
use crate::scene::{Geometry, NodeId, SceneNode};

#[derive(Debug, Default)]
pub struct HeadlessBackend {
    /// Camera used to turn pointer positions into rays
    pub camera: RaycastCamera,
    nodes: BTreeMap<NodeId, SceneNode>,
    physics: RigidBodyWorld,
    next_id: u64,
    /// Active configuration while the session runs
    tracking: Option<TrackingConfig>,
    session_runs: usize,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_camera(camera: RaycastCamera) -> Self {
        Self {
            camera,
            ..Default::default()
        }
    }

    /// Move the camera, keeping its lens settings.
    pub fn look_at(&mut self, position: Vec3, target: Vec3) {
        self.camera.position = position;
        self.camera.target = target;
    }

    /// Advance physics by `seconds` and copy body poses back onto their nodes.
    pub fn step(&mut self, seconds: f32) -> u32 {
        let steps = self.physics.step(seconds);
        for (id, node) in self.nodes.iter_mut() {
            if let Some(body) = self.physics.body(*id) {
                node.transform.translation = body.position;
            }
        }
        steps
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn light_count(&self) -> usize {
        self.nodes.values().filter(|n| n.light.is_some()).count()
    }

    pub fn body(&self, id: NodeId) -> Option<&BodyState> {
        self.physics.body(id)
    }

    pub fn time_step(&self) -> f32 {
        self.physics.config.time_step
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking.is_some()
    }

    pub fn tracking_config(&self) -> Option<TrackingConfig> {
        self.tracking
    }

    /// How many times the session was (re-)run.
    pub fn session_runs(&self) -> usize {
        self.session_runs
    }

    fn sync_body(&mut self, id: NodeId, node: &SceneNode, rebuild: bool) {
        let Some(desc) = node.body else {
            self.physics.remove(id);
            return;
        };
        let local_half = match desc.shape {
            CollisionShape::Geometry => node
                .geometry
                .map(|g| g.half_extents())
                .unwrap_or(Vec3::ZERO),
            CollisionShape::Box(size) => size * 0.5,
        };
        if rebuild {
            self.physics.reshape(id, &desc, &node.transform, local_half);
        } else {
            self.physics.insert(id, &desc, &node.transform, local_half);
        }
    }
}

impl TrackingSession for HeadlessBackend {
    fn run(&mut self, config: &TrackingConfig) {
        if self.tracking.as_ref() != Some(config) {
            log::trace!("Tracking session running with {:?}", config.plane_detection);
        }
        self.tracking = Some(*config);
        self.session_runs += 1;
    }

    fn pause(&mut self) {
        if self.tracking.take().is_some() {
            log::trace!("Tracking session paused");
        }
    }
}

impl SurfaceHitTest for HeadlessBackend {
    fn hit_test(&self, screen: Vec2) -> Option<Vec3> {
        let eye = self.camera.position;

        self.nodes
            .values()
            .filter_map(|node| {
                let Some(Geometry::Plane(plane)) = node.geometry else {
                    return None;
                };
                let center = node.transform.translation;
                let half = node
                    .transform
                    .world_half_extents(Geometry::Plane(plane).half_extents());
                let hit = self.camera.raycast_to_plane(screen, center.y)?;
                let inside = (hit.x - center.x).abs() <= half.x && (hit.z - center.z).abs() <= half.z;
                inside.then_some(hit)
            })
            .min_by(|a, b| a.distance_squared(eye).total_cmp(&b.distance_squared(eye)))
    }
}

impl SceneGraph for HeadlessBackend {
    fn add_node(&mut self, node: SceneNode) -> NodeId {
        self.next_id += 1;
        let id = NodeId(self.next_id);
        self.sync_body(id, &node, false);
        log::trace!("Added node {:?} '{}'", id, node.name);
        self.nodes.insert(id, node);
        id
    }

    fn update_node(&mut self, id: NodeId, node: SceneNode) -> bool {
        if !self.nodes.contains_key(&id) {
            return false;
        }
        self.sync_body(id, &node, true);
        self.nodes.insert(id, node);
        true
    }

    fn remove_node(&mut self, id: NodeId) -> bool {
        self.physics.remove(id);
        self.nodes.remove(&id).is_some()
    }
}

impl PhysicsWorld for HeadlessBackend {
    fn set_time_step(&mut self, time_step: f32) {
        self.physics.set_time_step(time_step);
    }

    fn apply_impulse(&mut self, id: NodeId, impulse: Vec3) -> bool {
        self.physics.apply_impulse(id, impulse)
    }
}
