//! Core value types and the body wrapper that drives per-tick motion.

pub mod types;
pub mod body;

pub use types::{
    Aabb, Cylinder, MotionSettings, MotionState, OrientedBox, Quad, Ray, RaycastHit, SweepHit,
    VoxelHit,
};
pub use body::{Body, BodyConfig};
