//! Domino Configuration
//!
//! Tunables for sampling, domino construction, the start impulse and the
//! simulation step. `Default` returns the values the game ships with; a JSON
//! file may override any subset of them.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::LightingConfig;
use crate::backend::PlaneDetection;
use crate::error::ConfigError;
use crate::game::domino::{
    DOMINO_FRICTION, DOMINO_MASS, DOMINO_SIZE, SPAWN_LIFT, START_IMPULSE,
};
use crate::game::sampler::MIN_DOMINO_SPACING;

/// Physics sub-step (seconds)
pub const PHYSICS_TIME_STEP: f32 = 1.0 / 200.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DominoConfig {
    /// Minimum planar distance between consecutive placements (meters)
    pub min_spacing: f32,
    /// Domino box size: width, height, length (meters)
    pub domino_size: Vec3,
    /// Height added to the surface hit so dominoes spawn above the surface (meters)
    pub spawn_lift: f32,
    /// Domino mass (kg)
    pub mass: f32,
    /// Domino friction coefficient
    pub friction: f32,
    /// Magnitude of the impulse given to the first domino (N·s)
    pub start_impulse: f32,
    /// Fixed physics sub-step (seconds)
    pub physics_time_step: f32,
    /// Tracking mode re-established on every pointer move
    pub drawing_plane_detection: PlaneDetection,
    /// Seed for colour selection. `None` draws from entropy.
    pub color_seed: Option<u64>,
    pub lighting: LightingConfig,
}

impl Default for DominoConfig {
    fn default() -> Self {
        Self {
            min_spacing: MIN_DOMINO_SPACING,
            domino_size: DOMINO_SIZE,
            spawn_lift: SPAWN_LIFT,
            mass: DOMINO_MASS,
            friction: DOMINO_FRICTION,
            start_impulse: START_IMPULSE,
            physics_time_step: PHYSICS_TIME_STEP,
            drawing_plane_detection: PlaneDetection::Horizontal,
            color_seed: None,
            lighting: LightingConfig::default(),
        }
    }
}

impl DominoConfig {
    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded domino config from {}", path.display());
        Ok(config)
    }

    /// Reject values the placement and physics code cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("min_spacing", self.min_spacing),
            ("mass", self.mass),
            ("physics_time_step", self.physics_time_step),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.domino_size.min_element() <= 0.0 || !self.domino_size.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "domino_size must be positive, got {}",
                self.domino_size
            )));
        }
        if self.friction < 0.0 || self.start_impulse < 0.0 || self.spawn_lift < 0.0 {
            return Err(ConfigError::Invalid(
                "friction, start_impulse and spawn_lift must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DominoConfig::default();
        assert_eq!(config.min_spacing, 0.03);
        assert_eq!(config.domino_size, Vec3::new(0.007, 0.06, 0.03));
        assert_eq!(config.spawn_lift, 0.03);
        assert_eq!(config.mass, 2.0);
        assert_eq!(config.friction, 0.8);
        assert_eq!(config.start_impulse, 0.7);
        assert!((config.physics_time_step - 0.005).abs() < 1e-9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = DominoConfig::from_json(
            r#"{ "min_spacing": 0.05, "color_seed": 7, "drawing_plane_detection": "none" }"#,
        )
        .unwrap();
        assert_eq!(config.min_spacing, 0.05);
        assert_eq!(config.color_seed, Some(7));
        assert_eq!(config.drawing_plane_detection, PlaneDetection::None);
        assert_eq!(config.mass, 2.0);
        assert_eq!(config.lighting, LightingConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = DominoConfig::from_json(r#"{ "min_spacing": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = DominoConfig::from_json(r#"{ "domino_size": [0.01, -1.0, 0.03] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = DominoConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DominoConfig::load(Path::new("/nonexistent/domino.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
