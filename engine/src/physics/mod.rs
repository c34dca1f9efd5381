//! Physics module for Domino Trail
//!
//! Rigid-body descriptors attached to scene nodes, plus a small headless
//! integrator standing in for a real physics engine in demos and tests.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Mass in kg
//! - Impulses in N·s
//!
//! # Submodules
//!
//! - [`body`] - Body kind, mass, friction and collision shape descriptors
//! - [`world`] - Fixed-step headless integrator (gravity, resting contact, friction, impulses)

pub mod body;
pub mod world;

pub use body::{BodyKind, CollisionShape, DEFAULT_STATIC_FRICTION, RigidBodyDesc};
pub use glam::{Quat, Vec3};
pub use world::{BodyState, RigidBodyWorld, SimulationConfig};
