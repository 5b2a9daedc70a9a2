//! Error types for traversal and motion resolution.

use glam::Vec3;
use thiserror::Error;

/// Errors that indicate malformed geometry input.
///
/// "No hit" is never an error; it is reported as `None`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// The DDA visited more cells than allowed without reaching the end of the ray.
    #[error(
        "voxel traversal gave up after {steps} steps \
         (origin {origin}, direction {direction}, max distance {max_distance})"
    )]
    TraversalLimit {
        /// Number of cells visited before giving up.
        steps: usize,
        /// Ray origin in world units.
        origin: Vec3,
        /// Ray direction.
        direction: Vec3,
        /// Requested traversal length.
        max_distance: f32,
    },

    /// Motion settings outside their valid ranges.
    #[error("invalid motion settings: {0}")]
    InvalidSettings(String),
}

/// Result type for geometry operations.
pub type GeometryResult<T> = std::result::Result<T, GeometryError>;
