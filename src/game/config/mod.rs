//! Config Module
//!
//! Tunables for placement, physics and lighting, loadable from JSON.

pub mod domino_config;
pub mod lighting_config;

pub use domino_config::{DominoConfig, PHYSICS_TIME_STEP};
pub use lighting_config::LightingConfig;
