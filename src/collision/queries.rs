use std::ops::ControlFlow;

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::{
    collision::{
        primitives::raycast_box,
        traversal::{traverse_ray, VoxelGrid},
    },
    core::types::{OrientedBox, Ray, RaycastHit},
    error::GeometryResult,
    world::SolidVoxels,
};

/// Side of a cell, named by compass direction with +Z as north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    East,
    West,
    Up,
    Down,
    North,
    South,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::East,
        Face::West,
        Face::Up,
        Face::Down,
        Face::North,
        Face::South,
    ];

    /// Offset from a cell to its neighbour across this face.
    pub fn offset(self) -> IVec3 {
        match self {
            Face::East => IVec3::X,
            Face::West => IVec3::NEG_X,
            Face::Up => IVec3::Y,
            Face::Down => IVec3::NEG_Y,
            Face::North => IVec3::Z,
            Face::South => IVec3::NEG_Z,
        }
    }

    pub fn normal(self) -> Vec3 {
        self.offset().as_vec3()
    }

    /// Face whose neighbour offset equals `offset`, if it is a unit step.
    pub fn from_offset(offset: IVec3) -> Option<Face> {
        Self::ALL.into_iter().find(|face| face.offset() == offset)
    }
}

/// First solid cell along a picking ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockPick {
    /// The solid cell that was hit.
    pub cell: IVec3,
    /// Where the ray entered `cell`, or the ray origin when it started inside.
    pub point: Vec3,
    /// Face of `cell` the ray entered through.
    pub face: Option<Face>,
    /// Last empty cell before `cell`; a new block placed here sits against `face`.
    pub place: Option<IVec3>,
}

/// Walks the unit grid along `ray` and stops at the first solid cell.
pub fn pick_block<S>(ray: &Ray, solids: &S) -> GeometryResult<Option<BlockPick>>
where
    S: SolidVoxels + ?Sized,
{
    let mut previous: Option<(IVec3, Vec3)> = None;
    let mut pick = None;

    traverse_ray(
        ray.origin,
        ray.direction,
        ray.max_distance,
        &VoxelGrid::UNIT,
        |step| {
            if !solids.is_solid(step.cell) {
                previous = Some((step.cell, step.point));
                return ControlFlow::Continue(());
            }

            pick = Some(match previous {
                Some((place, entry)) => BlockPick {
                    cell: step.cell,
                    point: entry,
                    face: Face::from_offset(place - step.cell),
                    place: Some(place),
                },
                None => BlockPick {
                    cell: step.cell,
                    point: ray.origin,
                    face: None,
                    place: None,
                },
            });
            ControlFlow::Break(())
        },
    )?;

    Ok(pick)
}

/// Nearest hit across a set of boxes, with the index of the box that was hit.
pub fn raycast_nearest_box<'a, I>(ray: &Ray, boxes: I) -> Option<(usize, RaycastHit)>
where
    I: IntoIterator<Item = &'a OrientedBox>,
{
    let mut best: Option<(usize, RaycastHit)> = None;
    let mut best_distance = ray.max_distance;

    for (index, b) in boxes.into_iter().enumerate() {
        if let Some(hit) = raycast_box(&ray.with_max_distance(best_distance), b) {
            best_distance = hit.distance;
            best = Some((index, hit));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_offsets_round_trip() {
        for face in Face::ALL {
            assert_eq!(Face::from_offset(face.offset()), Some(face));
        }
        assert_eq!(Face::from_offset(IVec3::new(1, 1, 0)), None);
    }
}
