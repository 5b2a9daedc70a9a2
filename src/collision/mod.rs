//! Collision detection: ray primitives, voxel traversal, sphere sweeps,
//! the voxel broad phase and picking queries.

pub mod primitives;
pub mod traversal;
pub mod sweep;
pub mod broadphase;
pub mod queries;

pub use broadphase::{overlaps_solid, sweep_voxels, SweepScratch};
pub use primitives::{
    raycast_aabb, raycast_box, raycast_cylinder, raycast_quad, raycast_sphere,
    sphere_intersects_aabb,
};
pub use queries::{pick_block, raycast_nearest_box, BlockPick, Face};
pub use sweep::sweep_sphere_aabb;
pub use traversal::{cells_on_segment, traverse_ray, TraversalEnd, TraversalStep, VoxelGrid};
