//! Scripted Scenarios
//!
//! A scenario is an ordered list of perception and user events replayed
//! against an [`InteractionController`] driving the [`HeadlessBackend`].
//! Scenarios are plain JSON:
//!
//! ```json
//! { "events": [
//!     { "event": "surface_added", "id": "table", "center": [0, 0, 0], "extent": [1, 1] },
//!     { "event": "camera", "position": [0, 0.5, 0], "target": [0, 0, 0] },
//!     { "event": "pointer", "x": 0.5, "y": 0.5 },
//!     { "event": "start" },
//!     { "event": "step", "seconds": 1.0 }
//! ] }
//! ```

use std::path::Path;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::backend::{Anchor, HeadlessBackend, PlaneAlignment, PlaneAnchor};
use crate::error::ScenarioError;
use crate::game::controller::InteractionController;

/// Height the built-in trace is drawn from (meters above the table)
const TRACE_CAMERA_HEIGHT: f32 = 0.5;
/// Samples along the built-in arc
const TRACE_SAMPLES: usize = 48;
/// Radius of the built-in arc (meters)
const TRACE_RADIUS: f32 = 0.3;

fn horizontal() -> PlaneAlignment {
    PlaneAlignment::Horizontal
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScenarioEvent {
    SurfaceAdded {
        id: String,
        #[serde(default = "horizontal")]
        alignment: PlaneAlignment,
        center: Vec3,
        extent: Vec2,
    },
    SurfaceUpdated {
        id: String,
        #[serde(default = "horizontal")]
        alignment: PlaneAlignment,
        center: Vec3,
        extent: Vec2,
    },
    /// Move the device camera
    Camera { position: Vec3, target: Vec3 },
    /// Pointer sample in normalized screen coordinates
    Pointer { x: f32, y: f32 },
    Start,
    Reset,
    /// Advance physics
    Step { seconds: f32 },
}

impl ScenarioEvent {
    fn plane_anchor(id: &str, alignment: PlaneAlignment, center: Vec3, extent: Vec2) -> Anchor {
        Anchor::Plane(PlaneAnchor {
            id: id.to_string(),
            alignment,
            center,
            extent,
        })
    }
}

/// What replaying a scenario did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScenarioReport {
    pub placed: usize,
    pub pushes: usize,
    pub cleared: usize,
    pub physics_steps: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub events: Vec<ScenarioEvent>,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let json = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scenario = Self::from_json(&json)?;
        log::info!(
            "Loaded scenario with {} events from {}",
            scenario.events.len(),
            path.display()
        );
        Ok(scenario)
    }

    /// A table, a quarter-circle traced across it, then a push and two
    /// seconds of simulation.
    pub fn built_in() -> Self {
        let mut events = vec![ScenarioEvent::SurfaceAdded {
            id: "table".to_string(),
            alignment: PlaneAlignment::Horizontal,
            center: Vec3::ZERO,
            extent: Vec2::new(1.2, 0.8),
        }];

        for i in 0..TRACE_SAMPLES {
            let t = i as f32 / (TRACE_SAMPLES - 1) as f32 * std::f32::consts::FRAC_PI_2;
            let point = Vec3::new(
                TRACE_RADIUS * t.cos() - 0.15,
                0.0,
                TRACE_RADIUS * t.sin() - 0.15,
            );
            events.push(ScenarioEvent::Camera {
                position: point + Vec3::Y * TRACE_CAMERA_HEIGHT,
                target: point,
            });
            events.push(ScenarioEvent::Pointer { x: 0.5, y: 0.5 });
        }

        events.push(ScenarioEvent::Start);
        events.push(ScenarioEvent::Step { seconds: 2.0 });
        Self { events }
    }

    /// Replay every event in order.
    pub fn run(&self, controller: &mut InteractionController<HeadlessBackend>) -> ScenarioReport {
        let mut report = ScenarioReport::default();

        for event in &self.events {
            match event {
                ScenarioEvent::SurfaceAdded {
                    id,
                    alignment,
                    center,
                    extent,
                } => {
                    let anchor = ScenarioEvent::plane_anchor(id, *alignment, *center, *extent);
                    controller.surface_discovered(&anchor);
                }
                ScenarioEvent::SurfaceUpdated {
                    id,
                    alignment,
                    center,
                    extent,
                } => {
                    let anchor = ScenarioEvent::plane_anchor(id, *alignment, *center, *extent);
                    controller.surface_updated(&anchor);
                }
                ScenarioEvent::Camera { position, target } => {
                    controller.backend_mut().look_at(*position, *target);
                }
                ScenarioEvent::Pointer { x, y } => {
                    if controller.pointer_moved(Vec2::new(*x, *y)).is_some() {
                        report.placed += 1;
                    }
                }
                ScenarioEvent::Start => {
                    if controller.press_start() {
                        report.pushes += 1;
                    }
                }
                ScenarioEvent::Reset => {
                    report.cleared += controller.press_reset();
                }
                ScenarioEvent::Step { seconds } => {
                    report.physics_steps += controller.backend_mut().step(*seconds);
                }
            }
        }

        log::debug!("Scenario finished: {report:?}");
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::DominoConfig;

    fn controller() -> InteractionController<HeadlessBackend> {
        let mut controller = InteractionController::new(HeadlessBackend::new(), DominoConfig::default());
        controller.resume();
        controller
    }

    #[test]
    fn test_parse_event_list() {
        let json = r#"{ "events": [
            { "event": "surface_added", "id": "floor", "center": [0, -1, 0], "extent": [2, 2] },
            { "event": "surface_updated", "id": "floor", "alignment": "horizontal",
              "center": [0, -1, 0], "extent": [3, 2] },
            { "event": "camera", "position": [0, 0, 0], "target": [0, -1, 0] },
            { "event": "pointer", "x": 0.5, "y": 0.25 },
            { "event": "start" },
            { "event": "reset" },
            { "event": "step", "seconds": 0.5 }
        ] }"#;
        let scenario = Scenario::from_json(json).unwrap();
        assert_eq!(scenario.events.len(), 7);
        assert_eq!(
            scenario.events[0],
            ScenarioEvent::SurfaceAdded {
                id: "floor".to_string(),
                alignment: PlaneAlignment::Horizontal,
                center: Vec3::new(0.0, -1.0, 0.0),
                extent: Vec2::new(2.0, 2.0),
            }
        );
        assert_eq!(scenario.events[3], ScenarioEvent::Pointer { x: 0.5, y: 0.25 });
        assert_eq!(scenario.events[4], ScenarioEvent::Start);
        assert_eq!(scenario.events[6], ScenarioEvent::Step { seconds: 0.5 });
    }

    #[test]
    fn test_unknown_event_is_rejected() {
        let err = Scenario::from_json(r#"{ "events": [ { "event": "explode" } ] }"#).unwrap_err();
        assert!(matches!(err, ScenarioError::Parse(_)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Scenario::load(Path::new("/nonexistent/scenario.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/scenario.json"));
    }

    #[test]
    fn test_built_in_places_and_pushes() {
        let mut controller = controller();
        let report = Scenario::built_in().run(&mut controller);

        assert!(report.placed > 5, "{report:?}");
        assert_eq!(report.placed, controller.ledger().len());
        assert_eq!(report.pushes, 1);
        // 2s at 200Hz, give or take accumulator rounding
        assert!((399..=400).contains(&report.physics_steps));
        assert_eq!(controller.surfaces().len(), 1);
    }

    #[test]
    fn test_reset_event_clears() {
        let mut scenario = Scenario::built_in();
        scenario.events.push(ScenarioEvent::Reset);
        scenario.events.push(ScenarioEvent::Start);

        let mut controller = controller();
        let report = scenario.run(&mut controller);
        assert_eq!(report.cleared, report.placed);
        assert_eq!(report.pushes, 1);
        assert!(controller.ledger().is_empty());
    }
}
