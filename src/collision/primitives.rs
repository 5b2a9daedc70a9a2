//! Analytic ray tests against quads, boxes, cylinders and spheres.
//!
//! Every function here is pure: arguments in, `Option` out. A miss is `None`.

use glam::{Quat, Vec3};

use crate::{
    config::PARALLEL_EPSILON,
    core::types::{Aabb, Cylinder, OrientedBox, Quad, Ray, RaycastHit},
};

/// Intersects a ray with a parallelogram.
///
/// The hit is accepted when its projections onto the two (unnormalised) edge
/// vectors fall inside `[0, |edge|²]`. With `allow_backface` unset, rays
/// travelling along the quad normal are rejected. The returned normal always
/// faces the incoming ray.
pub fn raycast_quad(ray: &Ray, quad: &Quad, allow_backface: bool) -> Option<RaycastHit> {
    let x = quad.c10 - quad.c00;
    let y = quad.c01 - quad.c00;
    let n = x.cross(y);

    let n_dot_dir = -n.dot(ray.direction);
    if n_dot_dir.abs() < PARALLEL_EPSILON {
        return None;
    }
    if !allow_backface && n_dot_dir < 0.0 {
        return None;
    }

    let distance = n.dot(ray.origin - quad.c00) / n_dot_dir;
    if !(0.0..=ray.max_distance).contains(&distance) {
        return None;
    }

    let point = ray.at(distance);
    let local = point - quad.c00;
    let u = local.dot(x);
    let v = local.dot(y);
    if u < 0.0 || u > x.dot(x) || v < 0.0 || v > y.dot(y) {
        return None;
    }

    let normal = if n_dot_dir > 0.0 { n } else { -n };
    Some(RaycastHit {
        point,
        normal: normal.normalize_or_zero(),
        distance,
    })
}

/// Intersects a ray with the front faces of a box.
///
/// Only the face on each axis whose outward normal opposes the ray can be
/// entered from outside, so three quads are tested and the nearest kept. Rays
/// starting inside the box report nothing.
pub fn raycast_box(ray: &Ray, b: &OrientedBox) -> Option<RaycastHit> {
    let c000 = b.origin;
    let c100 = c000 + b.x_edge;
    let c010 = c000 + b.y_edge;
    let c001 = c000 + b.z_edge;
    let c011 = c001 + b.y_edge;
    let c101 = c001 + b.x_edge;
    let c110 = c010 + b.x_edge;
    let c111 = c011 + b.x_edge;

    let faces = [
        if b.x_edge.dot(ray.direction) < 0.0 {
            Quad::new(c100, c110, c101)
        } else {
            Quad::new(c001, c011, c000)
        },
        if b.y_edge.dot(ray.direction) < 0.0 {
            Quad::new(c010, c011, c110)
        } else {
            Quad::new(c001, c000, c101)
        },
        if b.z_edge.dot(ray.direction) < 0.0 {
            Quad::new(c101, c111, c001)
        } else {
            Quad::new(c000, c010, c100)
        },
    ];

    faces
        .iter()
        .filter_map(|face| raycast_quad(ray, face, false))
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

/// Slab test returning the entry parameter along `direction`.
///
/// Zero direction components produce infinite slab bounds and compare
/// through ordinary IEEE-754 rules. The result is negative when the origin is
/// inside the box, and no length limit is applied.
pub fn raycast_aabb(origin: Vec3, direction: Vec3, aabb: &Aabb) -> Option<f32> {
    let inv = direction.recip();
    let t1 = (aabb.min - origin) * inv;
    let t2 = (aabb.max - origin) * inv;

    let t_min = t1.min(t2).max_element();
    let t_max = t1.max(t2).min_element();

    // Box entirely behind the origin.
    if t_max < 0.0 {
        return None;
    }
    if t_min > t_max {
        return None;
    }
    Some(t_min)
}

/// Intersects a ray with the curved side of an open-ended cylinder.
///
/// Only the near side is considered. Rays parallel to the axis never hit since
/// the cylinder has no caps.
pub fn raycast_cylinder(ray: &Ray, cylinder: &Cylinder) -> Option<RaycastHit> {
    let rotation = Quat::from_rotation_arc(Vec3::Z, cylinder.axis.normalize());
    let to_local = rotation.inverse();
    let o = to_local * (ray.origin - cylinder.origin);
    let d = to_local * ray.direction;

    let a = d.x * d.x + d.y * d.y;
    if a < PARALLEL_EPSILON * PARALLEL_EPSILON {
        return None;
    }
    let b = 2.0 * (o.x * d.x + o.y * d.y);
    let c = o.x * o.x + o.y * o.y - cylinder.radius * cylinder.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let distance = (-b - discriminant.sqrt()) / (2.0 * a);
    if !(0.0..=ray.max_distance).contains(&distance) {
        return None;
    }

    let local_hit = o + d * distance;
    if local_hit.z < 0.0 || local_hit.z > cylinder.length {
        return None;
    }

    let local_normal = Vec3::new(2.0 * local_hit.x, 2.0 * local_hit.y, 0.0).normalize_or_zero();
    Some(RaycastHit {
        point: ray.at(distance),
        normal: rotation * local_normal,
        distance,
    })
}

/// Distance along `direction` to the near side of a sphere.
///
/// Returns `None` for a miss or when the near root is not strictly ahead of the
/// origin. `direction` need not be unit length; the distance is in units of it.
pub fn raycast_sphere(center: Vec3, radius: f32, origin: Vec3, direction: Vec3) -> Option<f32> {
    let oc = origin - center;
    let a = direction.dot(direction);
    let b = 2.0 * oc.dot(direction);
    let c = oc.dot(oc) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let numerator = -b - discriminant.sqrt();
    if numerator > 0.0 {
        Some(numerator / (2.0 * a))
    } else {
        None
    }
}

/// Whether a sphere overlaps a box. A center inside the box always overlaps.
pub fn sphere_intersects_aabb(center: Vec3, radius: f32, aabb: &Aabb) -> bool {
    if center.cmpge(aabb.min).all() && center.cmple(aabb.max).all() {
        return true;
    }
    (aabb.closest_point(center) - center).length_squared() < radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_projection_range_uses_unnormalised_edges() {
        // 2x3 quad in the z = 0 plane facing +Z.
        let quad = Quad::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 3.0, 0.0));
        let inside = Ray::new(Vec3::new(1.9, 2.9, 1.0), Vec3::NEG_Z, 10.0);
        let outside = Ray::new(Vec3::new(2.1, 1.0, 1.0), Vec3::NEG_Z, 10.0);

        let hit = raycast_quad(&inside, &quad, false).expect("hit inside the quad");
        assert!((hit.distance - 1.0).abs() < 1e-6);
        assert_eq!(hit.normal, Vec3::Z);
        assert!(raycast_quad(&outside, &quad, false).is_none());
    }

    #[test]
    fn quad_backface_requires_opt_in() {
        let quad = Quad::new(Vec3::ZERO, Vec3::X, Vec3::Y);
        let from_below = Ray::new(Vec3::new(0.5, 0.5, -1.0), Vec3::Z, 10.0);

        assert!(raycast_quad(&from_below, &quad, false).is_none());
        let hit = raycast_quad(&from_below, &quad, true).expect("backface hit");
        assert_eq!(hit.normal, Vec3::NEG_Z);
    }

    #[test]
    fn aabb_slab_handles_axis_aligned_rays() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let t = raycast_aabb(Vec3::new(-2.0, 0.5, 0.5), Vec3::X, &aabb).expect("hit");
        assert!((t - 2.0).abs() < 1e-6);

        assert!(raycast_aabb(Vec3::new(-2.0, 1.5, 0.5), Vec3::X, &aabb).is_none());
        assert!(raycast_aabb(Vec3::new(2.0, 0.5, 0.5), Vec3::X, &aabb).is_none());
    }

    #[test]
    fn aabb_slab_reports_negative_entry_from_inside() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let t = raycast_aabb(Vec3::splat(0.5), Vec3::Y, &aabb).expect("inside");
        assert!(t < 0.0);
    }

    #[test]
    fn sphere_root_must_be_ahead() {
        assert!(raycast_sphere(Vec3::ZERO, 1.0, Vec3::new(0.0, 0.0, -3.0), Vec3::Z).is_some());
        assert!(raycast_sphere(Vec3::ZERO, 1.0, Vec3::new(0.0, 0.0, 3.0), Vec3::Z).is_none());
        assert!(raycast_sphere(Vec3::ZERO, 1.0, Vec3::ZERO, Vec3::Z).is_none());
    }

    #[test]
    fn sphere_aabb_overlap_uses_closest_point() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        assert!(sphere_intersects_aabb(Vec3::new(1.2, 0.5, 0.5), 0.25, &aabb));
        assert!(!sphere_intersects_aabb(Vec3::new(1.3, 0.5, 0.5), 0.25, &aabb));
        assert!(sphere_intersects_aabb(Vec3::splat(0.5), 0.0, &aabb));
        // Corner region: distance sqrt(0.02) ~ 0.141.
        assert!(!sphere_intersects_aabb(Vec3::new(1.1, 1.1, 0.5), 0.14, &aabb));
        assert!(sphere_intersects_aabb(Vec3::new(1.1, 1.1, 0.5), 0.15, &aabb));
    }
}
