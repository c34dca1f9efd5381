//! Interaction Controller
//!
//! Owns the collaborator and every piece of placement state, and turns user
//! and perception events into placements, pushes and resets:
//!
//! - pointer move → hit test → sampler → bearing → factory → ledger
//! - start → impulse on the first domino
//! - reset → clear the ledger and re-arm the sampler
//! - surface discovered/updated → surface registry
//!
//! Everything runs synchronously on the caller's thread. Hosts that deliver
//! events from more than one thread wrap the controller in a single `Mutex`.

use glam::Vec2;

use crate::backend::{Anchor, ArBackend, PlaneDetection, TrackingConfig};
use crate::game::config::DominoConfig;
use crate::game::domino::{Domino, DominoFactory};
use crate::game::ledger::PlacementLedger;
use crate::game::orientation::bearing;
use crate::game::sampler::SpatialSampler;
use crate::game::surfaces::{SurfaceRegistry, TrackedSurface};

pub struct InteractionController<B: ArBackend> {
    backend: B,
    config: DominoConfig,
    sampler: SpatialSampler,
    factory: DominoFactory,
    ledger: PlacementLedger,
    surfaces: SurfaceRegistry,
}

impl<B: ArBackend> InteractionController<B> {
    /// Take ownership of `backend`, configure its physics step and install the lights.
    pub fn new(mut backend: B, config: DominoConfig) -> Self {
        backend.set_time_step(config.physics_time_step);
        for light in config.lighting.light_nodes() {
            backend.add_node(light);
        }
        log::info!(
            "Domino controller ready (spacing {:.3}m, physics step {:.4}s)",
            config.min_spacing,
            config.physics_time_step
        );

        Self {
            sampler: SpatialSampler::new(config.min_spacing),
            factory: DominoFactory::from_config(&config),
            ledger: PlacementLedger::new(config.start_impulse),
            surfaces: SurfaceRegistry::new(),
            backend,
            config,
        }
    }

    /// Start (or restart) world tracking with horizontal surface detection.
    pub fn resume(&mut self) {
        self.backend
            .run(&TrackingConfig::with_plane_detection(PlaneDetection::Horizontal));
    }

    pub fn pause(&mut self) {
        self.backend.pause();
    }

    /// Remove every domino, stop tracking and hand the collaborator back.
    pub fn shutdown(mut self) -> B {
        self.ledger.clear_all(&mut self.backend, &mut self.sampler);
        self.backend.pause();
        log::info!("Domino controller shut down");
        self.backend
    }

    /// Handle one pointer-move sample. Returns the domino placed by it, if any.
    pub fn pointer_moved(&mut self, screen: Vec2) -> Option<&Domino> {
        self.backend.run(&TrackingConfig::with_plane_detection(
            self.config.drawing_plane_detection,
        ));

        let Some(hit) = self.backend.hit_test(screen) else {
            log::trace!("Pointer at ({:.3}, {:.3}) hit no surface", screen.x, screen.y);
            return None;
        };

        let previous = self.sampler.reference();
        if !self.sampler.accept(hit) {
            return None;
        }
        // Accepting implies a reference existed before this sample
        let previous = previous?;

        let angle = bearing(hit, previous);
        let domino = self.factory.create(hit, angle);
        self.ledger.append(&mut self.backend, domino);
        self.ledger.last()
    }

    /// Push the first domino. Does nothing when no domino is placed.
    pub fn press_start(&mut self) -> bool {
        self.ledger.apply_start_impulse(&mut self.backend)
    }

    /// Remove every domino. Returns how many were removed.
    pub fn press_reset(&mut self) -> usize {
        self.ledger.clear_all(&mut self.backend, &mut self.sampler)
    }

    pub fn surface_discovered(&mut self, anchor: &Anchor) -> Option<&TrackedSurface> {
        self.surfaces.on_surface_added(&mut self.backend, anchor)
    }

    pub fn surface_updated(&mut self, anchor: &Anchor) -> Option<&TrackedSurface> {
        self.surfaces.on_surface_updated(&mut self.backend, anchor)
    }

    pub fn ledger(&self) -> &PlacementLedger {
        &self.ledger
    }

    pub fn surfaces(&self) -> &SurfaceRegistry {
        &self.surfaces
    }

    pub fn sampler(&self) -> &SpatialSampler {
        &self.sampler
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
