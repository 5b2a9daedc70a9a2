use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::{
    config::{DEFAULT_BOUNCINESS, DEFAULT_CONTACT_SKIN, DEFAULT_MAX_BOUNCES, DEFAULT_RADIUS},
    error::{GeometryError, GeometryResult},
};

/// Half-line with a length limit. `direction` is expected to be unit length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub max_distance: f32,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3, max_distance: f32) -> Self {
        Self {
            origin,
            direction,
            max_distance,
        }
    }

    /// Point at `distance` along the ray.
    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }

    /// Same ray with a different length limit.
    pub fn with_max_distance(&self, max_distance: f32) -> Self {
        Self {
            max_distance,
            ..*self
        }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: Vec3, size: Vec3) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    /// The unit box occupied by a grid cell.
    pub fn from_cell(cell: IVec3) -> Self {
        Self::from_min_size(cell.as_vec3(), Vec3::ONE)
    }

    /// Grows the box by `margin` on every side.
    pub fn expanded(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec3::splat(margin),
            max: self.max + Vec3::splat(margin),
        }
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }
}

/// Planar parallelogram spanned from `c00` towards `c10` and `c01`.
///
/// The winding decides the front face: its normal is `(c10 - c00) × (c01 - c00)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    pub c00: Vec3,
    pub c10: Vec3,
    pub c01: Vec3,
}

impl Quad {
    pub fn new(c00: Vec3, c10: Vec3, c01: Vec3) -> Self {
        Self { c00, c10, c01 }
    }

    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            c00: self.c00 + offset,
            c10: self.c10 + offset,
            c01: self.c01 + offset,
        }
    }
}

/// Box described by a corner and three edge vectors, assumed mutually orthogonal
/// and right-handed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientedBox {
    pub origin: Vec3,
    pub x_edge: Vec3,
    pub y_edge: Vec3,
    pub z_edge: Vec3,
}

impl OrientedBox {
    pub fn new(origin: Vec3, x_edge: Vec3, y_edge: Vec3, z_edge: Vec3) -> Self {
        Self {
            origin,
            x_edge,
            y_edge,
            z_edge,
        }
    }

    pub fn axis_aligned(min: Vec3, size: Vec3) -> Self {
        Self::new(
            min,
            Vec3::X * size.x,
            Vec3::Y * size.y,
            Vec3::Z * size.z,
        )
    }
}

/// Open-ended finite cylinder running from `origin` along `axis` for `length`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cylinder {
    pub origin: Vec3,
    /// Unit direction of the cylinder's axis.
    pub axis: Vec3,
    pub length: f32,
    pub radius: f32,
}

impl Cylinder {
    pub fn new(origin: Vec3, axis: Vec3, length: f32, radius: f32) -> Self {
        Self {
            origin,
            axis,
            length,
            radius,
        }
    }
}

/// Result of a ray cast against a single primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaycastHit {
    pub point: Vec3,
    pub normal: Vec3,
    pub distance: f32,
}

/// Contact found by sweeping a sphere along a ray.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepHit {
    /// Contact point on the obstacle's surface.
    pub point: Vec3,
    /// Unit normal pointing away from the obstacle.
    pub normal: Vec3,
    /// Distance the sphere's center travels before touching.
    pub distance: f32,
}

/// Sweep contact together with the grid cell that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoxelHit {
    pub cell: IVec3,
    pub contact: SweepHit,
}

/// Position and velocity of a moving body for a single step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionState {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl MotionState {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }
}

/// Parameters of the bounce resolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    /// Radius of the swept sphere.
    pub radius: f32,
    /// Fraction of speed kept on each bounce, in `[0, 1]`.
    pub bounciness: f32,
    /// Maximum number of sweeps per resolve, at least 1.
    pub max_bounces: u32,
    /// Gap left between a body and the surface it stops against.
    pub contact_skin: f32,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            bounciness: DEFAULT_BOUNCINESS,
            max_bounces: DEFAULT_MAX_BOUNCES,
            contact_skin: DEFAULT_CONTACT_SKIN,
        }
    }
}

impl MotionSettings {
    pub fn new(radius: f32, bounciness: f32, max_bounces: u32) -> Self {
        Self {
            radius,
            bounciness,
            max_bounces,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> GeometryResult<()> {
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(GeometryError::InvalidSettings(format!(
                "radius must be finite and non-negative, got {}",
                self.radius
            )));
        }
        if !(0.0..=1.0).contains(&self.bounciness) {
            return Err(GeometryError::InvalidSettings(format!(
                "bounciness must lie in [0, 1], got {}",
                self.bounciness
            )));
        }
        if self.max_bounces == 0 {
            return Err(GeometryError::InvalidSettings(
                "max_bounces must be at least 1".into(),
            ));
        }
        if !self.contact_skin.is_finite() || self.contact_skin < 0.0 {
            return Err(GeometryError::InvalidSettings(format!(
                "contact_skin must be finite and non-negative, got {}",
                self.contact_skin
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_reject_out_of_range_values() {
        assert!(MotionSettings::default().validate().is_ok());
        assert!(MotionSettings::new(-0.1, 0.5, 1).validate().is_err());
        assert!(MotionSettings::new(0.5, 1.5, 1).validate().is_err());
        assert!(MotionSettings::new(0.5, 0.5, 0).validate().is_err());
        assert!(MotionSettings::new(f32::NAN, 0.5, 1).validate().is_err());
    }

    #[test]
    fn aabb_expansion_grows_every_side() {
        let aabb = Aabb::from_cell(IVec3::new(1, 2, 3)).expanded(0.25);
        assert_eq!(aabb.min, Vec3::new(0.75, 1.75, 2.75));
        assert_eq!(aabb.max, Vec3::new(2.25, 3.25, 4.25));
        assert_eq!(aabb.size(), Vec3::splat(1.5));
    }
}
