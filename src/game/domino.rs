//! Dominoes
//!
//! A domino is a thin dynamic box standing on its narrow edge. The
//! [`DominoFactory`] turns an accepted placement point and its bearing into a
//! fully described [`Domino`] ready to be handed to the scene graph.

use glam::{Quat, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::config::DominoConfig;
use crate::physics::RigidBodyDesc;
use crate::scene::{BoxGeometry, Geometry, Material, SceneNode, Transform};

/// Domino size: width (thin side), height, length (meters)
pub const DOMINO_SIZE: Vec3 = Vec3::new(0.007, 0.06, 0.03);
/// Lift above the surface hit so a new domino never starts inside the surface
pub const SPAWN_LIFT: f32 = 0.03;
/// Domino mass (kg)
pub const DOMINO_MASS: f32 = 2.0;
/// Domino friction coefficient
pub const DOMINO_FRICTION: f32 = 0.8;
/// Impulse given to the first domino by "start" (N·s)
pub const START_IMPULSE: f32 = 0.7;

/// Colours a domino can be painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DominoColor {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Cyan,
    Magenta,
    Purple,
}

impl DominoColor {
    pub const PALETTE: [DominoColor; 8] = [
        DominoColor::Red,
        DominoColor::Blue,
        DominoColor::Green,
        DominoColor::Yellow,
        DominoColor::Orange,
        DominoColor::Cyan,
        DominoColor::Magenta,
        DominoColor::Purple,
    ];

    /// Linear RGB in 0-1.
    pub fn rgb(self) -> [f32; 3] {
        match self {
            DominoColor::Red => [1.0, 0.0, 0.0],
            DominoColor::Blue => [0.0, 0.0, 1.0],
            DominoColor::Green => [0.0, 1.0, 0.0],
            DominoColor::Yellow => [1.0, 1.0, 0.0],
            DominoColor::Orange => [1.0, 0.5, 0.0],
            DominoColor::Cyan => [0.0, 1.0, 1.0],
            DominoColor::Magenta => [1.0, 0.0, 1.0],
            DominoColor::Purple => [0.5, 0.0, 0.5],
        }
    }
}

/// One placed domino.
#[derive(Debug, Clone, PartialEq)]
pub struct Domino {
    /// Center of the box in world space (surface hit + lift)
    pub position: Vec3,
    /// Rotation about +Y (radians)
    pub orientation_angle: f32,
    pub color: DominoColor,
    pub geometry: BoxGeometry,
    pub body: RigidBodyDesc,
}

impl Domino {
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.orientation_angle)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).with_rotation(self.rotation())
    }

    /// Local +X axis in world space. Horizontal since dominoes only turn about Y.
    pub fn world_right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }

    /// Scene node describing this domino.
    pub fn scene_node(&self) -> SceneNode {
        SceneNode::new("domino")
            .with_transform(self.transform())
            .with_geometry(
                Geometry::Box(self.geometry),
                Material::Diffuse(self.color.rgb()),
            )
            .with_body(self.body)
    }
}

/// Builds dominoes with a fixed geometry and body, and random colours.
#[derive(Debug)]
pub struct DominoFactory {
    pub geometry: BoxGeometry,
    pub spawn_lift: f32,
    pub body: RigidBodyDesc,
    rng: StdRng,
}

impl Default for DominoFactory {
    fn default() -> Self {
        Self::from_config(&DominoConfig::default())
    }
}

impl DominoFactory {
    pub fn from_config(config: &DominoConfig) -> Self {
        let rng = match config.color_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let size = config.domino_size;
        Self {
            geometry: BoxGeometry::new(size.x, size.y, size.z),
            spawn_lift: config.spawn_lift,
            body: RigidBodyDesc::dynamic(config.mass, config.friction),
            rng,
        }
    }

    /// Build a domino standing on `point` and turned by `angle` radians about +Y.
    pub fn create(&mut self, point: Vec3, angle: f32) -> Domino {
        Domino {
            position: point + Vec3::Y * self.spawn_lift,
            orientation_angle: angle,
            color: self.random_color(),
            geometry: self.geometry,
            body: self.body,
        }
    }

    fn random_color(&mut self) -> DominoColor {
        let index = self.rng.gen_range(0..DominoColor::PALETTE.len());
        DominoColor::PALETTE[index]
    }
}
