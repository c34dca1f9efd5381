//! Domino Trail Engine
//!
//! Traces a path across detected surfaces and stands a domino every few
//! centimeters along it, ready to be knocked over by a physics push.
//!
//! # Modules
//!
//! - [`backend`] - Collaborator traits (tracking, hit test, scene, physics) and a headless implementation
//! - [`camera`] - Look-at camera and pointer raycasting
//! - [`physics`] - Rigid body descriptions and a fixed-step world
//! - [`scene`] - Scene nodes, geometry, materials and lights
//! - [`game`] - Placement logic and the interaction controller
//!
//! # Example
//!
//! ```ignore
//! use domino_trail_engine::backend::HeadlessBackend;
//! use domino_trail_engine::game::{DominoConfig, InteractionController, Scenario};
//!
//! let mut controller = InteractionController::new(HeadlessBackend::new(), DominoConfig::default());
//! controller.resume();
//! let report = Scenario::built_in().run(&mut controller);
//! println!("placed {} dominoes", report.placed);
//! ```

pub mod backend;
pub mod camera;
pub mod error;
pub mod logging;
pub mod physics;
pub mod scene;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

pub use backend::{ArBackend, HeadlessBackend};
pub use error::{ConfigError, ScenarioError};
pub use scene::{NodeId, SceneNode};
