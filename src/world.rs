//! The single capability the collision core needs from a voxel world.

use std::collections::HashSet;

use glam::IVec3;

/// Answers whether a unit grid cell blocks movement.
///
/// Implementations should be cheap and free of side effects; a single resolve
/// step may query dozens of cells.
pub trait SolidVoxels {
    fn is_solid(&self, cell: IVec3) -> bool;
}

impl<F> SolidVoxels for F
where
    F: Fn(IVec3) -> bool,
{
    fn is_solid(&self, cell: IVec3) -> bool {
        self(cell)
    }
}

/// Sparse set of solid cells, handy for tools and tests.
#[derive(Debug, Clone, Default)]
pub struct VoxelSet {
    cells: HashSet<IVec3>,
}

impl VoxelSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, cell: IVec3) -> bool {
        self.cells.insert(cell)
    }

    pub fn remove(&mut self, cell: IVec3) -> bool {
        self.cells.remove(&cell)
    }

    /// Fills every cell in the inclusive range `min..=max`.
    pub fn fill(&mut self, min: IVec3, max: IVec3) {
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    self.cells.insert(IVec3::new(x, y, z));
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<IVec3> for VoxelSet {
    fn from_iter<I: IntoIterator<Item = IVec3>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl SolidVoxels for VoxelSet {
    fn is_solid(&self, cell: IVec3) -> bool {
        self.cells.contains(&cell)
    }
}
