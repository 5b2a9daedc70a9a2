use std::{collections::HashSet, ops::ControlFlow};

use glam::{IVec3, Vec3};

use crate::{
    collision::{
        primitives::sphere_intersects_aabb,
        sweep::sweep_sphere_aabb,
        traversal::{traverse_ray, VoxelGrid},
    },
    core::types::{Aabb, Ray, VoxelHit},
    error::GeometryResult,
    world::SolidVoxels,
};

/// Reusable candidate buffer for [`sweep_voxels`].
///
/// Each thread or body keeps its own; the buffer is cleared on every sweep.
#[derive(Debug, Clone, Default)]
pub struct SweepScratch {
    candidates: Vec<IVec3>,
    seen: HashSet<IVec3>,
}

impl SweepScratch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.candidates.clear();
        self.seen.clear();
    }

    /// Solid cells gathered by the last sweep, in discovery order.
    pub fn candidates(&self) -> &[IVec3] {
        &self.candidates
    }

    fn push(&mut self, cell: IVec3) {
        if self.seen.insert(cell) {
            self.candidates.push(cell);
        }
    }
}

/// Sweeps a sphere through the unit voxel grid and returns the nearest contact.
///
/// Every cell the ray crosses contributes its neighbourhood to the candidate
/// set: 3×3×3 for radii up to one cell, widened by a cell per extra unit of
/// radius beyond that. The traversal always runs to `ray.max_distance`.
pub fn sweep_voxels<S>(
    ray: &Ray,
    radius: f32,
    solids: &S,
    scratch: &mut SweepScratch,
) -> GeometryResult<Option<VoxelHit>>
where
    S: SolidVoxels + ?Sized,
{
    scratch.clear();
    let reach = (radius.ceil() as i32).max(1);

    traverse_ray(
        ray.origin,
        ray.direction,
        ray.max_distance,
        &VoxelGrid::UNIT,
        |step| {
            for y in -reach..=reach {
                for z in -reach..=reach {
                    for x in -reach..=reach {
                        let cell = step.cell + IVec3::new(x, y, z);
                        if solids.is_solid(cell) {
                            scratch.push(cell);
                        }
                    }
                }
            }
            ControlFlow::Continue(())
        },
    )?;

    let mut best: Option<VoxelHit> = None;
    let mut best_distance = ray.max_distance;

    for &cell in &scratch.candidates {
        let probe = ray.with_max_distance(best_distance);
        if let Some(contact) = sweep_sphere_aabb(&probe, radius, cell.as_vec3(), Vec3::ONE) {
            best_distance = contact.distance;
            best = Some(VoxelHit { cell, contact });
        }
    }

    Ok(best)
}

/// Whether a sphere at `center` overlaps any solid cell.
pub fn overlaps_solid<S>(center: Vec3, radius: f32, solids: &S) -> bool
where
    S: SolidVoxels + ?Sized,
{
    let min = (center - Vec3::splat(radius)).floor().as_ivec3();
    let max = (center + Vec3::splat(radius)).floor().as_ivec3();

    for x in min.x..=max.x {
        for y in min.y..=max.y {
            for z in min.z..=max.z {
                let cell = IVec3::new(x, y, z);
                if solids.is_solid(cell)
                    && sphere_intersects_aabb(center, radius, &Aabb::from_cell(cell))
                {
                    return true;
                }
            }
        }
    }
    false
}
