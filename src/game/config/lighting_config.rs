//! Lighting Configuration
//!
//! The two lights installed when the scene is created: a shadow-casting
//! directional light tilted downwards and a faint ambient fill.

use serde::{Deserialize, Serialize};

use crate::scene::{Light, LightKind, SceneNode, Transform, light::downward_tilt};

/// Lighting set up once at startup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    // Directional light
    /// Directional intensity (lumens)
    pub directional_intensity: f32,
    /// Downward tilt of the directional light (radians)
    pub directional_pitch: f32,
    pub casts_shadow: bool,
    /// Shadow colour (RGBA, 0-1)
    pub shadow_color: [f32; 4],

    // Ambient light
    /// Ambient intensity (lumens)
    pub ambient_intensity: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            directional_intensity: 500.0,
            directional_pitch: std::f32::consts::FRAC_PI_3,
            casts_shadow: true,
            shadow_color: [0.0, 0.0, 0.0, 0.5],
            ambient_intensity: 50.0,
        }
    }
}

impl LightingConfig {
    /// Scene nodes for the configured lights, directional first.
    pub fn light_nodes(&self) -> [SceneNode; 2] {
        let mut directional = Light::directional(self.directional_intensity, self.shadow_color);
        if let LightKind::Directional { casts_shadow, .. } = &mut directional.kind {
            *casts_shadow = self.casts_shadow;
        }

        [
            SceneNode::new("directional_light")
                .with_transform(
                    Transform::IDENTITY.with_rotation(downward_tilt(self.directional_pitch)),
                )
                .with_light(directional),
            SceneNode::new("ambient_light").with_light(Light::ambient(self.ambient_intensity)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_nodes() {
        let [directional, ambient] = LightingConfig::default().light_nodes();

        let light = directional.light.unwrap();
        assert_eq!(light.intensity, 500.0);
        match light.kind {
            LightKind::Directional {
                casts_shadow,
                deferred_shadows,
                shadow_color,
            } => {
                assert!(casts_shadow);
                assert!(deferred_shadows);
                assert_eq!(shadow_color[3], 0.5);
            }
            _ => panic!("Expected directional light"),
        }
        // Tilted downwards: the light's -Z axis points below the horizon
        let dir = directional.transform.rotate(-glam::Vec3::Z);
        assert!(dir.y < 0.0);

        assert_eq!(ambient.light.unwrap().kind, LightKind::Ambient);
        assert_eq!(ambient.light.unwrap().intensity, 50.0);
    }
}
