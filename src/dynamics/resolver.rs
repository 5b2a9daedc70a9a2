use glam::Vec3;
use log::{debug, trace, warn};

use crate::{
    collision::broadphase::{sweep_voxels, SweepScratch},
    core::types::{MotionSettings, MotionState, Ray, VoxelHit},
    error::GeometryResult,
    world::SolidVoxels,
};

/// Moves a sphere by `state.velocity` (a displacement for this step) through
/// the voxel field, bouncing off solid cells.
///
/// Each bounce reflects the direction about the contact normal and scales the
/// speed by `settings.bounciness`; the distance left to travel is not scaled.
/// When the bounce budget runs out the body rests at its last contact.
pub fn resolve_motion<S>(
    state: MotionState,
    settings: &MotionSettings,
    solids: &S,
    scratch: &mut SweepScratch,
) -> GeometryResult<MotionState>
where
    S: SolidVoxels + ?Sized,
{
    settings.validate()?;

    let mut position = state.position;
    let mut direction = state.velocity.normalize_or_zero();
    let mut speed = state.velocity.length();
    let mut remaining = speed;

    for bounce in 0..settings.max_bounces {
        if remaining <= 0.0 {
            return Ok(MotionState::new(position, direction * speed));
        }

        let ray = Ray::new(position, direction, remaining);
        let Some(hit) = sweep_voxels(&ray, settings.radius, solids, scratch)? else {
            return Ok(MotionState::new(
                position + direction * remaining,
                direction * speed,
            ));
        };

        let contact = hit.contact;
        if contact.normal.dot(direction) > 0.0 {
            warn!(
                "contact normal {} faces along travel direction {} at cell {}",
                contact.normal, direction, hit.cell
            );
        }

        position += direction * (contact.distance - settings.contact_skin).max(0.0);
        remaining -= contact.distance;
        direction = direction.reflect(contact.normal).normalize_or_zero();
        speed *= settings.bounciness;

        trace!(
            "bounce {bounce}: cell {} at distance {:.4}, {:.4} left, speed {:.4}",
            hit.cell,
            contact.distance,
            remaining,
            speed
        );
    }

    debug!(
        "bounce budget of {} exhausted with {:.4} distance left",
        settings.max_bounces, remaining
    );
    Ok(MotionState::new(position, direction * speed))
}

/// Bounce resolver that owns its settings and a reusable scratch buffer.
#[derive(Debug, Clone, Default)]
pub struct MovementResolver {
    pub settings: MotionSettings,
    scratch: SweepScratch,
}

impl MovementResolver {
    pub fn new(settings: MotionSettings) -> Self {
        Self {
            settings,
            scratch: SweepScratch::new(),
        }
    }

    /// Resolves one step of motion; see [`resolve_motion`].
    pub fn resolve<S>(&mut self, state: MotionState, solids: &S) -> GeometryResult<MotionState>
    where
        S: SolidVoxels + ?Sized,
    {
        resolve_motion(state, &self.settings, solids, &mut self.scratch)
    }

    /// Sweeps a sphere of the configured radius along `ray`, reusing the
    /// resolver's scratch buffer.
    pub fn sweep<S>(&mut self, ray: &Ray, solids: &S) -> GeometryResult<Option<VoxelHit>>
    where
        S: SolidVoxels + ?Sized,
    {
        sweep_voxels(ray, self.settings.radius, solids, &mut self.scratch)
    }

    /// Convenience wrapper taking position and displacement separately.
    pub fn resolve_displacement<S>(
        &mut self,
        position: Vec3,
        displacement: Vec3,
        solids: &S,
    ) -> GeometryResult<MotionState>
    where
        S: SolidVoxels + ?Sized,
    {
        self.resolve(MotionState::new(position, displacement), solids)
    }
}
