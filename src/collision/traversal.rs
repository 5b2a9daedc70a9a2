//! Fast voxel traversal (3D DDA) over an implicit grid.

use std::ops::ControlFlow;

use glam::{IVec3, Vec3};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    config::MAX_TRAVERSAL_STEPS,
    error::{GeometryError, GeometryResult},
    utils::math::{axis_unit, step_sign},
};

/// Grid layout used to map world positions to cell indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoxelGrid {
    /// Size of a cell along each axis, in world units.
    pub cell_size: Vec3,
    /// Shift applied after scaling, in cell units.
    pub offset: Vec3,
}

impl VoxelGrid {
    /// Unit cells with no offset: cell `c` covers `[c, c + 1)`.
    pub const UNIT: Self = Self {
        cell_size: Vec3::ONE,
        offset: Vec3::ZERO,
    };

    pub fn new(cell_size: Vec3, offset: Vec3) -> Self {
        Self { cell_size, offset }
    }

    fn to_grid(&self, world: Vec3) -> Vec3 {
        world / self.cell_size - self.offset
    }

    fn to_world(&self, grid: Vec3) -> Vec3 {
        (grid + self.offset) * self.cell_size
    }
}

impl Default for VoxelGrid {
    fn default() -> Self {
        Self::UNIT
    }
}

/// One cell visited by [`traverse_ray`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraversalStep {
    pub cell: IVec3,
    /// Where the ray leaves this cell, clamped to the end of the segment.
    pub point: Vec3,
    /// Normal of the boundary being crossed out of this cell, facing back
    /// towards the ray origin.
    pub normal: Vec3,
}

/// How a traversal finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalEnd {
    /// Every cell up to `max_distance` was visited.
    Completed,
    /// The visitor asked to stop.
    Stopped,
}

/// Walks every cell crossed by `origin..origin + direction * max_distance`.
///
/// The visitor runs once per cell, in order, and may return
/// [`ControlFlow::Break`] to stop early. Degenerate input that would take more
/// than [`MAX_TRAVERSAL_STEPS`] cells is reported as
/// [`GeometryError::TraversalLimit`].
pub fn traverse_ray<F>(
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
    grid: &VoxelGrid,
    mut visit: F,
) -> GeometryResult<TraversalEnd>
where
    F: FnMut(&TraversalStep) -> ControlFlow<()>,
{
    let p0 = grid.to_grid(origin);
    let p1 = grid.to_grid(origin + direction * max_distance);

    let rd = p1 - p0;
    let mut p = p0.floor();
    let rd_inv = rd.recip();
    let step = step_sign(rd);
    let delta = (rd_inv * step).min(Vec3::ONE);
    let mut t_max = ((p + step.max(Vec3::ZERO) - p0) * rd_inv).abs();

    for _ in 0..MAX_TRAVERSAL_STEPS {
        let cell = p.round().as_ivec3();
        let next_t = t_max.min_element();
        let point = grid.to_world(p0 + rd * next_t.min(1.0));

        let axis = if next_t == t_max.x {
            0
        } else if next_t == t_max.y {
            1
        } else {
            2
        };
        t_max[axis] += delta[axis];
        p[axis] += step[axis];
        let normal = -axis_unit(axis) * step[axis];

        if visit(&TraversalStep {
            cell,
            point,
            normal,
        })
        .is_break()
        {
            return Ok(TraversalEnd::Stopped);
        }

        if next_t > 1.0 {
            return Ok(TraversalEnd::Completed);
        }
    }

    warn!(
        "voxel traversal hit the {MAX_TRAVERSAL_STEPS}-step cap: \
         origin {origin}, direction {direction}, max distance {max_distance}"
    );
    Err(GeometryError::TraversalLimit {
        steps: MAX_TRAVERSAL_STEPS,
        origin,
        direction,
        max_distance,
    })
}

/// Every cell touched by the segment `from..to`, in traversal order.
pub fn cells_on_segment(from: Vec3, to: Vec3, grid: &VoxelGrid) -> GeometryResult<Vec<IVec3>> {
    let mut cells = Vec::new();
    traverse_ray(from, to - from, 1.0, grid, |step| {
        cells.push(step.cell);
        ControlFlow::Continue(())
    })?;
    Ok(cells)
}
