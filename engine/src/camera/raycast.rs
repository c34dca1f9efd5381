//! Raycast Module
//!
//! Turns a pointer position on screen into a world-space ray and intersects
//! it with horizontal planes. Used by the headless backend to answer surface
//! hit tests.

use glam::{Vec2, Vec3};

/// Rays closer than this to parallel with a plane are treated as misses
const PARALLEL_EPSILON: f32 = 0.0001;

/// A half-line starting at `origin` going along the normalized `direction`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to the horizontal plane `y = plane_height`.
    ///
    /// # Returns
    /// * `Some(t)` - The ray parameter of the intersection (t >= 0)
    /// * `None` - If the ray is parallel to the plane or the plane is behind the origin
    pub fn intersect_horizontal_plane(&self, plane_height: f32) -> Option<f32> {
        if self.direction.y.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = (plane_height - self.origin.y) / self.direction.y;
        (t >= 0.0).then_some(t)
    }
}

/// Pinhole camera looking from `position` towards `target`.
#[derive(Clone, Copy, Debug)]
pub struct RaycastCamera {
    /// Camera position in world space
    pub position: Vec3,
    /// Point the camera is looking at
    pub target: Vec3,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Screen aspect ratio (width / height)
    pub aspect_ratio: f32,
}

impl Default for RaycastCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.5, 0.5),
            target: Vec3::ZERO,
            fov: 1.2, // ~69 degrees
            aspect_ratio: 9.0 / 19.5, // portrait phone
        }
    }
}

impl RaycastCamera {
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            ..Default::default()
        }
    }

    /// Camera basis (right, up, forward).
    fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = (self.target - self.position).normalize_or_zero();

        // Looking straight up or down: use world X as the right axis
        if forward.y.abs() > 0.99 {
            let right = Vec3::X;
            let up = right.cross(forward).normalize();
            (right, up, forward)
        } else {
            let right = forward.cross(Vec3::Y).normalize();
            let up = right.cross(forward);
            (right, up, forward)
        }
    }

    /// World-space ray through a normalized screen point.
    ///
    /// `screen` is in 0-1 on both axes with (0,0) at the bottom-left corner;
    /// (0.5, 0.5) goes straight through `target`.
    pub fn ray(&self, screen: Vec2) -> Ray {
        let ndc = screen * 2.0 - Vec2::ONE;
        let half_fov = (self.fov * 0.5).tan();
        let (right, up, forward) = self.basis();

        let direction = (forward
            + right * ndc.x * self.aspect_ratio * half_fov
            + up * ndc.y * half_fov)
            .normalize();

        Ray {
            origin: self.position,
            direction,
        }
    }

    /// Intersection of the screen ray with the horizontal plane `y = plane_height`.
    pub fn raycast_to_plane(&self, screen: Vec2, plane_height: f32) -> Option<Vec3> {
        let ray = self.ray(screen);
        ray.intersect_horizontal_plane(plane_height)
            .map(|t| ray.at(t))
    }
}
