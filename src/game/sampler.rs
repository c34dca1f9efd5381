//! Spatial Sampler
//!
//! Thins a continuous, high-frequency stream of pointer hits down to evenly
//! spaced placement points. Only the horizontal axes (X, Z) count towards
//! the spacing; height differences are ignored.

use glam::{Vec2, Vec3};

/// Minimum planar distance between consecutive dominoes (meters)
pub const MIN_DOMINO_SPACING: f32 = 0.03;

/// Distance-gated acceptance of placement candidates.
#[derive(Debug, Clone)]
pub struct SpatialSampler {
    /// Last accepted point (or the seed after a reset)
    reference: Option<Vec3>,
    /// Minimum planar distance for a candidate to be accepted
    pub min_spacing: f32,
}

impl Default for SpatialSampler {
    fn default() -> Self {
        Self::new(MIN_DOMINO_SPACING)
    }
}

impl SpatialSampler {
    pub fn new(min_spacing: f32) -> Self {
        Self {
            reference: None,
            min_spacing,
        }
    }

    /// Offer a candidate point.
    ///
    /// The first candidate after construction or [`reset`](Self::reset) only
    /// seeds the reference and is never accepted. Later candidates are accepted
    /// (and become the new reference) when they are at least `min_spacing`
    /// away from the reference on the XZ plane; closer ones are discarded.
    pub fn accept(&mut self, candidate: Vec3) -> bool {
        let Some(reference) = self.reference else {
            self.reference = Some(candidate);
            return false;
        };

        if planar_distance(reference, candidate) >= self.min_spacing {
            self.reference = Some(candidate);
            true
        } else {
            false
        }
    }

    /// Forget the reference so the next candidate seeds again.
    pub fn reset(&mut self) {
        self.reference = None;
    }

    pub fn reference(&self) -> Option<Vec3> {
        self.reference
    }
}

/// Euclidean distance between two points projected onto the XZ plane.
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(a.x - b.x, a.z - b.z).length()
}
