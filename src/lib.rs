//! Voxel Sweep – continuous collision for voxel worlds.
//!
//! This crate finds where a moving sphere first touches an implicit grid of
//! solid unit cells and resolves bounce motion from there. It also exposes the
//! building blocks on their own: analytic ray tests, 3D DDA traversal and
//! sphere-vs-box sweeps. The world is reached only through [`SolidVoxels`].

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod utils;
pub mod world;

pub use glam::{IVec3, Vec3};

pub use collision::{
    broadphase::{overlaps_solid, sweep_voxels, SweepScratch},
    primitives::{
        raycast_aabb, raycast_box, raycast_cylinder, raycast_quad, raycast_sphere,
        sphere_intersects_aabb,
    },
    queries::{pick_block, raycast_nearest_box, BlockPick, Face},
    sweep::sweep_sphere_aabb,
    traversal::{cells_on_segment, traverse_ray, TraversalEnd, TraversalStep, VoxelGrid},
};
pub use crate::core::{
    body::{Body, BodyConfig},
    types::{
        Aabb, Cylinder, MotionSettings, MotionState, OrientedBox, Quad, Ray, RaycastHit,
        SweepHit, VoxelHit,
    },
};
pub use dynamics::{
    parallel::resolve_batch,
    resolver::{resolve_motion, MovementResolver},
};
pub use error::{GeometryError, GeometryResult};
pub use world::{SolidVoxels, VoxelSet};

/// High-level convenience wrapper pairing a world with a [`MovementResolver`].
pub struct VoxelPhysics<W> {
    world: W,
    resolver: MovementResolver,
}

impl<W: SolidVoxels> VoxelPhysics<W> {
    /// Creates a wrapper over `world` using the provided resolver settings.
    pub fn new(world: W, settings: MotionSettings) -> Self {
        Self {
            world,
            resolver: MovementResolver::new(settings),
        }
    }

    /// Resolves one step of motion for a body.
    pub fn resolve(&mut self, state: MotionState) -> GeometryResult<MotionState> {
        self.resolver.resolve(state, &self.world)
    }

    /// Sweeps a sphere of the configured radius along `ray`.
    pub fn sweep(&mut self, ray: &Ray) -> GeometryResult<Option<VoxelHit>> {
        self.resolver.sweep(ray, &self.world)
    }

    /// Finds the first solid cell along a picking ray.
    pub fn pick(&self, ray: &Ray) -> GeometryResult<Option<BlockPick>> {
        pick_block(ray, &self.world)
    }

    /// Immutable access to the world.
    pub fn world(&self) -> &W {
        &self.world
    }

    /// Mutable access to the world, e.g. to place or remove blocks.
    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    pub fn settings(&self) -> &MotionSettings {
        &self.resolver.settings
    }
}
