use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::{
    collision::broadphase::SweepScratch,
    config::{DEFAULT_DRAG, DEFAULT_GRAVITY},
    dynamics::resolver::resolve_motion,
    error::GeometryResult,
    world::SolidVoxels,
};

use super::types::{MotionSettings, MotionState};

/// Tunables for a [`Body`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    pub motion: MotionSettings,
    /// Downward acceleration in units per second squared.
    pub gravity: f32,
    /// Fraction of velocity kept per second.
    pub drag: f32,
    /// When unset the body moves freely through solid cells.
    pub collision_enabled: bool,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            motion: MotionSettings::default(),
            gravity: DEFAULT_GRAVITY,
            drag: DEFAULT_DRAG,
            collision_enabled: true,
        }
    }
}

/// Sphere-shaped point mass moving through a voxel world.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec3,
    pub velocity: Vec3,
    pub config: BodyConfig,
}

impl Body {
    pub fn new(position: Vec3, config: BodyConfig) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            config,
        }
    }

    pub fn state(&self) -> MotionState {
        MotionState::new(self.position, self.velocity)
    }

    /// Advances the body by `dt` seconds.
    ///
    /// Collision is resolved on this step's displacement before drag and
    /// gravity are applied, so the new forces take effect next step.
    pub fn step<S>(&mut self, dt: f32, solids: &S, scratch: &mut SweepScratch) -> GeometryResult<()>
    where
        S: SolidVoxels + ?Sized,
    {
        if dt <= 0.0 {
            return Ok(());
        }

        if self.config.collision_enabled {
            let displacement = MotionState::new(self.position, self.velocity * dt);
            let resolved = resolve_motion(displacement, &self.config.motion, solids, scratch)?;
            self.position = resolved.position;
            self.velocity = resolved.velocity / dt;
        } else {
            self.position += self.velocity * dt;
        }

        self.velocity *= self.config.drag.powf(dt);
        self.apply_force(Vec3::NEG_Y * self.config.gravity * dt);
        Ok(())
    }

    /// Adds a velocity change at the body's center.
    pub fn apply_force(&mut self, force: Vec3) {
        self.velocity += force;
    }

    /// Pushes the body directly away from `center`, weakening with distance as
    /// `force / distance^falloff`.
    pub fn apply_explosion(&mut self, center: Vec3, force: f32, falloff: f32) {
        let Some((direction, scale)) = self.falloff_from(center, falloff) else {
            return;
        };
        self.apply_force(direction * force * scale);
    }

    /// Pushes the body away from `center` by the part of `force` that points
    /// away from it, with the same falloff as [`Body::apply_explosion`].
    pub fn apply_directional_force(&mut self, center: Vec3, force: Vec3, falloff: f32) {
        let Some((direction, scale)) = self.falloff_from(center, falloff) else {
            return;
        };
        let along = direction.dot(force * scale).max(0.0);
        self.apply_force(direction * along);
    }

    fn falloff_from(&self, center: Vec3, falloff: f32) -> Option<(Vec3, f32)> {
        let delta = self.position - center;
        let distance = delta.length();
        if distance < f32::EPSILON {
            return None;
        }
        Some((delta / distance, 1.0 / distance.powf(falloff)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explosion_falls_off_with_distance() {
        let mut near = Body::new(Vec3::new(2.0, 0.0, 0.0), BodyConfig::default());
        let mut far = Body::new(Vec3::new(4.0, 0.0, 0.0), BodyConfig::default());

        near.apply_explosion(Vec3::ZERO, 8.0, 1.0);
        far.apply_explosion(Vec3::ZERO, 8.0, 1.0);

        assert!((near.velocity - Vec3::new(4.0, 0.0, 0.0)).length() < 1e-5);
        assert!((far.velocity - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn explosion_at_body_center_is_ignored() {
        let mut body = Body::new(Vec3::ONE, BodyConfig::default());
        body.apply_explosion(Vec3::ONE, 10.0, 2.0);
        assert_eq!(body.velocity, Vec3::ZERO);
    }

    #[test]
    fn directional_force_never_pulls_inward() {
        let mut body = Body::new(Vec3::new(0.0, 3.0, 0.0), BodyConfig::default());
        body.apply_directional_force(Vec3::ZERO, Vec3::new(0.0, -5.0, 0.0), 0.0);
        assert_eq!(body.velocity, Vec3::ZERO);

        body.apply_directional_force(Vec3::ZERO, Vec3::new(2.0, 5.0, 0.0), 0.0);
        assert!((body.velocity - Vec3::new(0.0, 5.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn non_positive_dt_is_a_no_op() {
        let solids = |_: glam::IVec3| false;
        let mut body = Body::new(Vec3::ZERO, BodyConfig::default());
        body.velocity = Vec3::X;
        body.step(0.0, &solids, &mut SweepScratch::new()).expect("no-op");
        assert_eq!(body.position, Vec3::ZERO);
        assert_eq!(body.velocity, Vec3::X);
    }
}
