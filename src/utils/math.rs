//! Additional math helpers layered on top of `glam`.

use glam::Vec3;

/// Per-component sign that maps zero (of either sign) to `+1`.
///
/// The DDA relies on this so a zero component still produces a finite step
/// whose boundary sits at infinity.
pub fn step_sign(v: Vec3) -> Vec3 {
    Vec3::new(
        if v.x >= 0.0 { 1.0 } else { -1.0 },
        if v.y >= 0.0 { 1.0 } else { -1.0 },
        if v.z >= 0.0 { 1.0 } else { -1.0 },
    )
}

/// Unit vector along `axis` (0 = X, 1 = Y, 2 = Z).
pub fn axis_unit(axis: usize) -> Vec3 {
    match axis {
        0 => Vec3::X,
        1 => Vec3::Y,
        _ => Vec3::Z,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_sign_treats_zero_as_positive() {
        assert_eq!(step_sign(Vec3::new(0.0, -0.0, -2.0)), Vec3::new(1.0, 1.0, -1.0));
    }
}
