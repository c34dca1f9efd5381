//! Camera Module
//!
//! Screen-to-world raycasting. Window-system agnostic: it only deals with
//! camera state and math.

pub mod raycast;

pub use raycast::{Ray, RaycastCamera};
