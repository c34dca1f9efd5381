//! Headless rigid-body world
//!
//! A deliberately small integrator used by the headless backend so demos and
//! tests can watch dominoes fall, rest and slide without a real physics engine.
//!
//! Covered: gravity, impulses, resting contact of dynamic bodies on top of
//! static colliders, Coulomb friction against those colliders.
//! Not covered: body-body contact between dynamic bodies, angular motion.
//!
//! Simulation runs in fixed sub-steps of `SimulationConfig::time_step`
//! (1/200 s by default). Leftover time is carried over to the next `step`.

use std::collections::BTreeMap;

use glam::{Quat, Vec3};

use super::body::{BodyKind, RigidBodyDesc};
use crate::scene::{NodeId, Transform};

/// Penetration tolerated when deciding a body came down onto a collider (meters)
const CONTACT_SLOP: f32 = 0.005;

#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    /// Gravity acceleration (m/s²)
    pub gravity: Vec3,
    /// Fixed sub-step length (seconds)
    pub time_step: f32,
    /// Upper bound on sub-steps per `step` call, avoids spiralling after stalls
    pub max_substeps: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -9.81, 0.0),
            time_step: 1.0 / 200.0,
            max_substeps: 400,
        }
    }
}

/// Simulated state of one body.
#[derive(Debug, Clone, Copy)]
pub struct BodyState {
    pub kind: BodyKind,
    pub position: Vec3,
    pub rotation: Quat,
    pub velocity: Vec3,
    pub mass: f32,
    pub friction: f32,
    /// World-space half extents of the collider
    pub half_extents: Vec3,
    /// Whether the body ended the last sub-step supported by a static collider
    pub resting: bool,
}

impl BodyState {
    fn from_desc(desc: &RigidBodyDesc, transform: &Transform, local_half: Vec3) -> Self {
        Self {
            kind: desc.kind,
            position: transform.translation,
            rotation: transform.rotation,
            velocity: Vec3::ZERO,
            mass: desc.mass.max(0.001),
            friction: desc.friction,
            half_extents: transform.world_half_extents(local_half),
            resting: false,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.position.y - self.half_extents.y
    }

    pub fn top(&self) -> f32 {
        self.position.y + self.half_extents.y
    }

    /// Whether `point` lies over this body's XZ footprint.
    fn covers_xz(&self, point: Vec3) -> bool {
        (point.x - self.position.x).abs() <= self.half_extents.x
            && (point.z - self.position.z).abs() <= self.half_extents.z
    }
}

/// Fixed-step rigid-body integrator keyed by scene node.
#[derive(Debug, Default)]
pub struct RigidBodyWorld {
    pub config: SimulationConfig,
    bodies: BTreeMap<NodeId, BodyState>,
    accumulator: f32,
}

impl RigidBodyWorld {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            bodies: BTreeMap::new(),
            accumulator: 0.0,
        }
    }

    pub fn set_time_step(&mut self, time_step: f32) {
        if time_step > 0.0 {
            self.config.time_step = time_step;
        }
    }

    /// Register (or replace) the body attached to `id`.
    pub fn insert(&mut self, id: NodeId, desc: &RigidBodyDesc, transform: &Transform, local_half: Vec3) {
        self.bodies
            .insert(id, BodyState::from_desc(desc, transform, local_half));
    }

    /// Re-place a body and regenerate its collider. Velocity is preserved.
    pub fn reshape(&mut self, id: NodeId, desc: &RigidBodyDesc, transform: &Transform, local_half: Vec3) {
        match self.bodies.get_mut(&id) {
            Some(body) => {
                let velocity = body.velocity;
                *body = BodyState::from_desc(desc, transform, local_half);
                body.velocity = velocity;
            }
            None => self.insert(id, desc, transform, local_half),
        }
    }

    pub fn remove(&mut self, id: NodeId) -> bool {
        self.bodies.remove(&id).is_some()
    }

    pub fn body(&self, id: NodeId) -> Option<&BodyState> {
        self.bodies.get(&id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Instantaneous velocity change `impulse / mass` on a dynamic body.
    ///
    /// Returns false for unknown or static bodies.
    pub fn apply_impulse(&mut self, id: NodeId, impulse: Vec3) -> bool {
        match self.bodies.get_mut(&id) {
            Some(body) if body.kind == BodyKind::Dynamic => {
                body.velocity += impulse / body.mass;
                body.resting = false;
                true
            }
            _ => false,
        }
    }

    /// Advance the simulation by `elapsed` seconds. Returns the number of sub-steps run.
    pub fn step(&mut self, elapsed: f32) -> u32 {
        let dt = self.config.time_step;
        self.accumulator += elapsed.max(0.0);

        let mut steps = 0;
        while self.accumulator >= dt && steps < self.config.max_substeps {
            self.substep(dt);
            self.accumulator -= dt;
            steps += 1;
        }
        if steps == self.config.max_substeps {
            self.accumulator = 0.0;
        }
        steps
    }

    fn substep(&mut self, dt: f32) {
        let colliders: Vec<BodyState> = self
            .bodies
            .values()
            .filter(|b| b.kind == BodyKind::Static)
            .copied()
            .collect();
        let gravity = self.config.gravity;

        for body in self.bodies.values_mut() {
            if body.kind != BodyKind::Dynamic {
                continue;
            }

            let previous_bottom = body.bottom();

            // Semi-implicit Euler: velocity first, then position
            body.velocity += gravity * dt;
            body.position += body.velocity * dt;
            body.resting = false;

            for collider in &colliders {
                if !collider.covers_xz(body.position) {
                    continue;
                }
                let top = collider.top();
                if body.bottom() < top && previous_bottom >= top - CONTACT_SLOP {
                    body.position.y = top + body.half_extents.y;
                    if body.velocity.y < 0.0 {
                        body.velocity.y = 0.0;
                    }
                    body.resting = true;
                    apply_ground_friction(body, collider.friction, gravity.length(), dt);
                }
            }
        }
    }
}

/// Coulomb friction against a supporting collider: decelerate the horizontal
/// velocity by `mu * g * dt`, never reversing it.
fn apply_ground_friction(body: &mut BodyState, surface_friction: f32, g: f32, dt: f32) {
    let horizontal = Vec3::new(body.velocity.x, 0.0, body.velocity.z);
    let speed = horizontal.length();
    if speed <= f32::EPSILON {
        return;
    }
    let mu = body.friction * surface_friction;
    let new_speed = (speed - mu * g * dt).max(0.0);
    let scaled = horizontal * (new_speed / speed);
    body.velocity.x = scaled.x;
    body.velocity.z = scaled.z;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ground(world: &mut RigidBodyWorld) -> NodeId {
        let id = NodeId(1);
        world.insert(
            id,
            &RigidBodyDesc::static_box(Vec3::new(2.0, 0.002, 2.0)),
            &Transform::IDENTITY,
            Vec3::new(1.0, 0.001, 1.0),
        );
        id
    }

    fn domino(world: &mut RigidBodyWorld, at: Vec3) -> NodeId {
        let id = NodeId(2);
        world.insert(
            id,
            &RigidBodyDesc::dynamic(2.0, 0.8),
            &Transform::from_translation(at),
            Vec3::new(0.0035, 0.03, 0.015),
        );
        id
    }

    #[test]
    fn test_step_uses_fixed_substeps() {
        let mut world = RigidBodyWorld::default();
        assert_eq!(world.step(0.1025), 20);
        // Leftover time carries over
        assert_eq!(world.step(0.0), 0);
        assert_eq!(world.step(0.003), 1);
    }

    #[test]
    fn test_body_falls_and_rests_on_static_collider() {
        let mut world = RigidBodyWorld::default();
        ground(&mut world);
        let id = domino(&mut world, Vec3::new(0.0, 0.06, 0.0));

        world.step(1.0);

        let body = world.body(id).unwrap();
        assert!(body.resting);
        assert!((body.bottom() - 0.001).abs() < 1e-4, "bottom={}", body.bottom());
        assert!(body.velocity.y.abs() < 1e-6);
    }

    #[test]
    fn test_body_without_support_keeps_falling() {
        let mut world = RigidBodyWorld::default();
        let id = domino(&mut world, Vec3::new(0.0, 0.06, 0.0));
        world.step(0.5);
        let body = world.body(id).unwrap();
        assert!(body.position.y < -1.0);
        assert!(!body.resting);
    }

    #[test]
    fn test_impulse_changes_velocity_by_impulse_over_mass() {
        let mut world = RigidBodyWorld::default();
        let id = domino(&mut world, Vec3::ZERO);
        assert!(world.apply_impulse(id, Vec3::new(0.7, 0.0, 0.0)));
        let body = world.body(id).unwrap();
        assert!((body.velocity.x - 0.35).abs() < 1e-6);
    }

    #[test]
    fn test_impulse_on_static_or_unknown_is_rejected() {
        let mut world = RigidBodyWorld::default();
        let g = ground(&mut world);
        assert!(!world.apply_impulse(g, Vec3::X));
        assert!(!world.apply_impulse(NodeId(99), Vec3::X));
    }

    #[test]
    fn test_friction_stops_sliding_body() {
        let mut world = RigidBodyWorld::default();
        ground(&mut world);
        let id = domino(&mut world, Vec3::new(0.0, 0.031, 0.0));
        world.step(0.05);
        world.apply_impulse(id, Vec3::new(0.7, 0.0, 0.0));
        world.step(1.0);

        let body = world.body(id).unwrap();
        assert!(body.velocity.x.abs() < 1e-6);
        assert!(body.position.x > 0.0);
    }

    #[test]
    fn test_remove_and_zero_gravity() {
        let mut world = RigidBodyWorld::new(SimulationConfig {
            gravity: Vec3::ZERO,
            ..Default::default()
        });
        assert!(world.is_empty());
        let id = domino(&mut world, Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(world.len(), 1);

        world.step(0.5);
        assert_eq!(world.body(id).unwrap().position.y, 0.5);

        assert!(world.remove(id));
        assert!(!world.remove(id));
        assert!(world.is_empty());
    }

    #[test]
    fn test_reshape_keeps_velocity() {
        let mut world = RigidBodyWorld::default();
        let id = domino(&mut world, Vec3::ZERO);
        world.apply_impulse(id, Vec3::new(0.0, 0.0, 2.0));
        world.reshape(
            id,
            &RigidBodyDesc::dynamic(2.0, 0.8),
            &Transform::from_translation(Vec3::ONE),
            Vec3::splat(0.01),
        );
        let body = world.body(id).unwrap();
        assert_eq!(body.position, Vec3::ONE);
        assert!((body.velocity.z - 1.0).abs() < 1e-6);
    }
}
