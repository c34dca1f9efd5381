//! Surface Registry
//!
//! Mirrors the horizontal planes reported by the perception system. Each
//! plane id maps to one [`TrackedSurface`] and one invisible proxy node that
//! dominoes can stand on. Updates resize and move the existing proxy; they
//! never create a second one.
//!
//! Surfaces are never removed, even when the perception system drops or
//! merges an anchor.

use std::collections::HashMap;

use glam::{Quat, Vec2, Vec3};

use crate::backend::{Anchor, PlaneAnchor, SceneGraph};
use crate::physics::RigidBodyDesc;
use crate::scene::{Geometry, Material, NodeId, PlaneGeometry, SceneNode, Transform};

/// Thickness of a surface's collider box (meters)
pub const SURFACE_COLLIDER_THICKNESS: f32 = 0.001;

/// A detected horizontal surface.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedSurface {
    pub id: String,
    pub center: Vec3,
    /// Footprint: width along X, depth along Z (meters)
    pub extent: Vec2,
    /// Invisible collider node paired with this surface
    pub proxy: NodeId,
}

#[derive(Debug, Default)]
pub struct SurfaceRegistry {
    surfaces: HashMap<String, TrackedSurface>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a newly detected surface.
    ///
    /// Anchors that are not horizontal planes are ignored. An id that is
    /// already tracked is updated instead of duplicated.
    pub fn on_surface_added<S: SceneGraph + ?Sized>(
        &mut self,
        scene: &mut S,
        anchor: &Anchor,
    ) -> Option<&TrackedSurface> {
        let Some(plane) = anchor.as_horizontal_plane() else {
            log::trace!("Ignoring anchor {} (not a horizontal plane)", anchor.id());
            return None;
        };

        if self.surfaces.contains_key(&plane.id) {
            log::debug!("Surface {} added twice, updating", plane.id);
            return self.on_surface_updated(scene, anchor);
        }

        let proxy = scene.add_node(proxy_node(plane));
        log::debug!(
            "Tracking surface {} ({:.2}m x {:.2}m)",
            plane.id,
            plane.extent.x,
            plane.extent.y
        );
        let surface = TrackedSurface {
            id: plane.id.clone(),
            center: plane.center,
            extent: plane.extent,
            proxy,
        };
        Some(&*self.surfaces.entry(plane.id.clone()).or_insert(surface))
    }

    /// Follow a tracked surface as the perception system refines it.
    ///
    /// Unknown ids and non-horizontal anchors are ignored.
    pub fn on_surface_updated<S: SceneGraph + ?Sized>(
        &mut self,
        scene: &mut S,
        anchor: &Anchor,
    ) -> Option<&TrackedSurface> {
        let plane = anchor.as_horizontal_plane()?;
        let Some(surface) = self.surfaces.get_mut(&plane.id) else {
            log::debug!("Update for unknown surface {} ignored", plane.id);
            return None;
        };

        surface.center = plane.center;
        surface.extent = plane.extent;
        if !scene.update_node(surface.proxy, proxy_node(plane)) {
            log::warn!("Proxy node of surface {} is missing from the scene", plane.id);
        }
        log::trace!(
            "Surface {} now {:.2}m x {:.2}m",
            plane.id,
            plane.extent.x,
            plane.extent.y
        );
        Some(&*surface)
    }

    pub fn get(&self, id: &str) -> Option<&TrackedSurface> {
        self.surfaces.get(id)
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackedSurface> {
        self.surfaces.values()
    }
}

/// Invisible plane laid flat on the surface, with a thin static collider box.
fn proxy_node(plane: &PlaneAnchor) -> SceneNode {
    let flat = Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2);
    SceneNode::new(format!("surface_{}", plane.id))
        .with_transform(Transform::from_translation(plane.center).with_rotation(flat))
        .with_geometry(
            Geometry::Plane(PlaneGeometry {
                width: plane.extent.x,
                height: plane.extent.y,
            }),
            Material::OcclusionOnly,
        )
        .with_body(RigidBodyDesc::static_box(Vec3::new(
            plane.extent.x,
            plane.extent.y,
            SURFACE_COLLIDER_THICKNESS,
        )))
}
