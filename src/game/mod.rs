//! Game Module
//!
//! Domino placement built on top of the engine: the sampler, orientation
//! and factory that turn a traced path into dominoes, the ledger and surface
//! registry that hold scene state, and the controller that wires them to a
//! collaborator.

pub mod config;
pub mod controller;
pub mod domino;
pub mod ledger;
pub mod orientation;
pub mod sampler;
pub mod scenario;
pub mod surfaces;

pub use config::{DominoConfig, LightingConfig};
pub use controller::InteractionController;
pub use domino::{Domino, DominoColor, DominoFactory};
pub use ledger::PlacementLedger;
pub use orientation::{bearing, bearing_degrees};
pub use sampler::{SpatialSampler, MIN_DOMINO_SPACING};
pub use scenario::{Scenario, ScenarioEvent, ScenarioReport};
pub use surfaces::{SurfaceRegistry, TrackedSurface};
