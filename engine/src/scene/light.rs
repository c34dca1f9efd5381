//! Light descriptors
//!
//! Lighting is set up once when the scene is created and never touched by
//! placement logic.

use glam::Quat;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Uniform light from every direction
    Ambient,
    /// Parallel rays along the node's -Z axis
    Directional {
        casts_shadow: bool,
        /// Deferred shadows are composited after the lit pass
        deferred_shadows: bool,
        /// Shadow colour (RGBA, 0-1)
        shadow_color: [f32; 4],
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    /// Intensity in lumens
    pub intensity: f32,
}

impl Light {
    pub fn ambient(intensity: f32) -> Self {
        Self {
            kind: LightKind::Ambient,
            intensity,
        }
    }

    pub fn directional(intensity: f32, shadow_color: [f32; 4]) -> Self {
        Self {
            kind: LightKind::Directional {
                casts_shadow: true,
                deferred_shadows: true,
                shadow_color,
            },
            intensity,
        }
    }
}

/// Orientation that tilts a directional light to shine downwards at `pitch` radians.
pub fn downward_tilt(pitch: f32) -> Quat {
    Quat::from_rotation_x(-pitch)
}
