//! Orientation
//!
//! Facing angle of a new domino from the bearing between the previous
//! placement and the new one. Works on the horizontal plane only.

use glam::{Vec2, Vec3};

/// Points closer than this on the XZ plane have no defined bearing
const COINCIDENT_EPSILON: f32 = 1e-6;

/// Planar bearing of `from - to` on the XZ plane, in degrees.
///
/// `from` is the new placement and `to` the previous one, so the difference
/// points along the direction of travel.
pub fn bearing_degrees(from: Vec3, to: Vec3) -> f32 {
    let delta = Vec2::new(from.x - to.x, from.z - to.z);
    delta.y.atan2(delta.x).to_degrees()
}

/// Rotation about +Y (radians) for a domino placed at `from` after `to`.
///
/// The bearing is negated so the domino's local +X axis points along the
/// traced path, towards the next domino. Coincident points yield 0.0.
pub fn bearing(from: Vec3, to: Vec3) -> f32 {
    let delta = Vec2::new(from.x - to.x, from.z - to.z);
    if delta.length_squared() < COINCIDENT_EPSILON * COINCIDENT_EPSILON {
        return 0.0;
    }
    -(bearing_degrees(from, to) * (std::f32::consts::PI / 180.0))
}
