//! Global configuration constants for the Voxel Sweep engine.

/// Dot products below this magnitude treat a ray as parallel to a plane.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Maximum number of cells a single traversal may visit before it is
/// reported as malformed input.
pub const MAX_TRAVERSAL_STEPS: usize = 1000;

/// Default sphere radius of a moving body.
pub const DEFAULT_RADIUS: f32 = 0.4;

/// Default fraction of speed kept after each bounce.
pub const DEFAULT_BOUNCINESS: f32 = 0.5;

/// Default number of sweeps performed per resolve.
pub const DEFAULT_MAX_BOUNCES: u32 = 4;

/// Distance a body is kept away from the surface it came to rest against.
pub const DEFAULT_CONTACT_SKIN: f32 = 1e-3;

/// Default downward acceleration applied to bodies (Y-up).
pub const DEFAULT_GRAVITY: f32 = 9.81;

/// Default fraction of velocity a body keeps per second of travel.
pub const DEFAULT_DRAG: f32 = 0.9;
