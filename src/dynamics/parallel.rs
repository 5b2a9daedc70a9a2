#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    collision::broadphase::SweepScratch,
    core::types::{MotionSettings, MotionState},
    dynamics::resolver::resolve_motion,
    error::GeometryResult,
    utils::logging::ResolveTimer,
    world::SolidVoxels,
};

/// Resolves many independent bodies against the same world, in place.
///
/// With the `parallel` feature each rayon worker gets its own scratch buffer;
/// without it one scratch is reused serially. `cargo test --no-default-features`
/// builds and tests the serial path. On error the first failure is returned;
/// states that resolved before it may already have been updated.
pub fn resolve_batch<S>(
    states: &mut [MotionState],
    settings: &MotionSettings,
    solids: &S,
) -> GeometryResult<()>
where
    S: SolidVoxels + Sync + ?Sized,
{
    let _timer = ResolveTimer::new("resolve_batch", states.len());
    settings.validate()?;
    resolve_all(states, settings, solids)
}

#[cfg(feature = "parallel")]
fn resolve_all<S>(
    states: &mut [MotionState],
    settings: &MotionSettings,
    solids: &S,
) -> GeometryResult<()>
where
    S: SolidVoxels + Sync + ?Sized,
{
    states
        .par_iter_mut()
        .try_for_each_init(SweepScratch::new, |scratch, state| {
            *state = resolve_motion(*state, settings, solids, scratch)?;
            Ok(())
        })
}

#[cfg(not(feature = "parallel"))]
fn resolve_all<S>(
    states: &mut [MotionState],
    settings: &MotionSettings,
    solids: &S,
) -> GeometryResult<()>
where
    S: SolidVoxels + Sync + ?Sized,
{
    let mut scratch = SweepScratch::new();
    for state in states.iter_mut() {
        *state = resolve_motion(*state, settings, solids, &mut scratch)?;
    }
    Ok(())
}
