//! Placement Ledger
//!
//! Ordered record of every domino in the scene, in the order they were
//! traced. Index 0 is the domino "start" pushes. The ledger only grows until
//! [`PlacementLedger::clear_all`] removes everything at once.

use crate::backend::{PhysicsWorld, SceneGraph};
use crate::game::domino::{Domino, START_IMPULSE};
use crate::game::sampler::SpatialSampler;
use crate::scene::NodeId;

#[derive(Debug)]
struct PlacedDomino {
    node: NodeId,
    domino: Domino,
}

/// Sole owner of the placed dominoes' scene nodes. Cannot be cloned.
///
/// ```compile_fail
/// let ledger = domino_trail_engine::game::PlacementLedger::default();
/// let _copy = ledger.clone();
/// ```
#[derive(Debug)]
pub struct PlacementLedger {
    placed: Vec<PlacedDomino>,
    /// Impulse magnitude used by `apply_start_impulse` (N·s)
    pub start_impulse: f32,
}

impl Default for PlacementLedger {
    fn default() -> Self {
        Self::new(START_IMPULSE)
    }
}

impl PlacementLedger {
    pub fn new(start_impulse: f32) -> Self {
        Self {
            placed: Vec::new(),
            start_impulse,
        }
    }

    /// Add `domino` to the scene and record it after every earlier placement.
    pub fn append<S: SceneGraph + ?Sized>(&mut self, scene: &mut S, domino: Domino) -> NodeId {
        let node = scene.add_node(domino.scene_node());
        log::debug!(
            "Placed domino #{} at ({:.3}, {:.3}, {:.3}) angle={:.1}°",
            self.placed.len(),
            domino.position.x,
            domino.position.y,
            domino.position.z,
            domino.orientation_angle.to_degrees(),
        );
        self.placed.push(PlacedDomino { node, domino });
        node
    }

    /// Remove every domino from the scene and re-arm `sampler` so the next
    /// pointer hit only seeds. Returns how many dominoes were removed.
    pub fn clear_all<S: SceneGraph + ?Sized>(
        &mut self,
        scene: &mut S,
        sampler: &mut SpatialSampler,
    ) -> usize {
        let removed = self.placed.len();
        for placed in self.placed.drain(..) {
            scene.remove_node(placed.node);
        }
        sampler.reset();
        if removed > 0 {
            log::info!("Cleared {removed} dominoes");
        }
        removed
    }

    /// Earliest placed domino still in the scene.
    pub fn first(&self) -> Option<&Domino> {
        self.placed.first().map(|p| &p.domino)
    }

    /// Push the first domino along its world-right axis with `start_impulse`.
    ///
    /// Returns whether an impulse was applied. An empty ledger, or a first
    /// domino the physics world no longer knows, is a silent no-op.
    pub fn apply_start_impulse<P: PhysicsWorld + ?Sized>(&self, physics: &mut P) -> bool {
        let Some(first) = self.placed.first() else {
            log::debug!("Start ignored: no dominoes placed");
            return false;
        };

        let impulse = first.domino.world_right() * self.start_impulse;
        let applied = physics.apply_impulse(first.node, impulse);
        if applied {
            log::info!("Pushed first of {} dominoes", self.placed.len());
        } else {
            log::debug!("Start ignored: first domino no longer simulated");
        }
        applied
    }

    /// Most recently placed domino.
    pub fn last(&self) -> Option<&Domino> {
        self.placed.last().map(|p| &p.domino)
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Domino> {
        self.placed.iter().map(|p| &p.domino)
    }

    /// Scene node of every domino, in placement order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.placed.iter().map(|p| p.node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::domino::DominoFactory;
    use crate::scene::SceneNode;
    use glam::Vec3;
    use std::collections::BTreeSet;

    /// Scene + physics double that records what it was asked to do.
    #[derive(Default)]
    struct RecordingScene {
        live: BTreeSet<NodeId>,
        next: u64,
        impulses: Vec<(NodeId, Vec3)>,
    }

    impl SceneGraph for RecordingScene {
        fn add_node(&mut self, _node: SceneNode) -> NodeId {
            self.next += 1;
            self.live.insert(NodeId(self.next));
            NodeId(self.next)
        }

        fn update_node(&mut self, id: NodeId, _node: SceneNode) -> bool {
            self.live.contains(&id)
        }

        fn remove_node(&mut self, id: NodeId) -> bool {
            self.live.remove(&id)
        }
    }

    impl PhysicsWorld for RecordingScene {
        fn set_time_step(&mut self, _time_step: f32) {}

        fn apply_impulse(&mut self, id: NodeId, impulse: Vec3) -> bool {
            if !self.live.contains(&id) {
                return false;
            }
            self.impulses.push((id, impulse));
            true
        }
    }

    fn place(ledger: &mut PlacementLedger, scene: &mut RecordingScene, x: f32, angle: f32) -> Domino {
        let domino = DominoFactory::default().create(Vec3::new(x, 0.0, 0.0), angle);
        ledger.append(scene, domino.clone());
        domino
    }

    #[test]
    fn test_append_keeps_order_and_first() {
        let mut scene = RecordingScene::default();
        let mut ledger = PlacementLedger::default();
        assert!(ledger.first().is_none());

        let first = place(&mut ledger, &mut scene, 0.0, 0.0);
        for i in 1..10 {
            place(&mut ledger, &mut scene, i as f32 * 0.05, 0.0);
            assert_eq!(ledger.first(), Some(&first));
        }
        assert_eq!(ledger.len(), 10);
        assert_eq!(scene.live.len(), 10);
        let xs: Vec<f32> = ledger.iter().map(|d| d.position.x).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_clear_all_removes_nodes_and_resets_sampler() {
        let mut scene = RecordingScene::default();
        let mut ledger = PlacementLedger::default();
        let mut sampler = SpatialSampler::default();
        sampler.accept(Vec3::ZERO);
        for i in 0..4 {
            place(&mut ledger, &mut scene, i as f32, 0.0);
        }

        assert_eq!(ledger.clear_all(&mut scene, &mut sampler), 4);
        assert!(ledger.is_empty());
        assert!(ledger.first().is_none());
        assert!(scene.live.is_empty());
        assert_eq!(sampler.reference(), None);
    }

    #[test]
    fn test_start_impulse_along_world_right() {
        let mut scene = RecordingScene::default();
        let mut ledger = PlacementLedger::default();
        let first = place(&mut ledger, &mut scene, 0.0, 0.4);
        place(&mut ledger, &mut scene, 0.05, 1.2);

        assert!(ledger.apply_start_impulse(&mut scene));
        assert_eq!(scene.impulses.len(), 1);
        let (node, impulse) = scene.impulses[0];
        assert_eq!(Some(node), ledger.nodes().next());
        assert!((impulse - first.world_right() * 0.7).length() < 1e-6);
        assert!((impulse.length() - 0.7).abs() < 1e-5);
        assert!(impulse.y.abs() < 1e-6);
    }

    #[test]
    fn test_start_on_empty_ledger_is_noop() {
        let mut scene = RecordingScene::default();
        let ledger = PlacementLedger::default();
        assert!(!ledger.apply_start_impulse(&mut scene));
        assert!(scene.impulses.is_empty());
    }

    #[test]
    fn test_clear_then_start_is_noop() {
        let mut scene = RecordingScene::default();
        let mut ledger = PlacementLedger::default();
        let mut sampler = SpatialSampler::default();
        place(&mut ledger, &mut scene, 0.0, 0.0);
        ledger.clear_all(&mut scene, &mut sampler);
        assert!(!ledger.apply_start_impulse(&mut scene));
        assert!(scene.impulses.is_empty());
    }

    #[test]
    fn test_start_on_node_removed_behind_our_back_is_noop() {
        let mut scene = RecordingScene::default();
        let mut ledger = PlacementLedger::default();
        place(&mut ledger, &mut scene, 0.0, 0.0);
        scene.live.clear();
        assert!(!ledger.apply_start_impulse(&mut scene));
    }
}
