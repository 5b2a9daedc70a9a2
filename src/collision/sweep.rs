//! Continuous sphere-vs-box collision.
//!
//! A sphere of radius `r` sweeping along a ray touches a box exactly when the
//! ray touches the box's Minkowski sum with the sphere. That shape splits into
//! six face quads pushed out by `r`, twelve edge cylinders of radius `r` and
//! eight corner spheres of radius `r`, tested in that order.

use glam::Vec3;

use crate::{
    collision::primitives::{raycast_aabb, raycast_cylinder, raycast_quad, raycast_sphere},
    core::types::{Aabb, Cylinder, Quad, Ray, SweepHit},
};

/// Corner `cXYZ` lives at index `X << 2 | Y << 1 | Z`.
const C000: usize = 0b000;
const C001: usize = 0b001;
const C010: usize = 0b010;
const C011: usize = 0b011;
const C100: usize = 0b100;
const C101: usize = 0b101;
const C110: usize = 0b110;
const C111: usize = 0b111;

/// A face is tested only while the ray moves against its outward normal.
struct FaceSpec {
    axis: usize,
    outward: f32,
    corners: [usize; 3],
}

/// East, west, up, down, north, south. Corner winding makes each quad's front
/// face point along its outward normal.
const FACES: [FaceSpec; 6] = [
    FaceSpec { axis: 0, outward: 1.0, corners: [C100, C110, C101] },
    FaceSpec { axis: 0, outward: -1.0, corners: [C000, C001, C010] },
    FaceSpec { axis: 1, outward: 1.0, corners: [C010, C011, C110] },
    FaceSpec { axis: 1, outward: -1.0, corners: [C000, C100, C001] },
    FaceSpec { axis: 2, outward: 1.0, corners: [C001, C101, C011] },
    FaceSpec { axis: 2, outward: -1.0, corners: [C000, C010, C100] },
];

/// Edge start corners grouped by the axis they run along.
const EDGES: [(usize, [usize; 4]); 3] = [
    (0, [C000, C001, C011, C010]),
    (1, [C000, C001, C101, C100]),
    (2, [C000, C010, C110, C100]),
];

fn corners(min: Vec3, size: Vec3) -> [Vec3; 8] {
    std::array::from_fn(|i| {
        min + Vec3::new(
            if i & 0b100 != 0 { size.x } else { 0.0 },
            if i & 0b010 != 0 { size.y } else { 0.0 },
            if i & 0b001 != 0 { size.z } else { 0.0 },
        )
    })
}

fn axis_vector(axis: usize, length: f32) -> Vec3 {
    let mut v = Vec3::ZERO;
    v[axis] = length;
    v
}

/// Sweeps a sphere of `radius` along `ray` against the box `[min, min + size]`.
///
/// `ray.max_distance` bounds the search, so callers testing many boxes pass
/// their best distance so far and converge on the nearest contact. Edges are
/// only examined when no face is hit and corners only when no edge is hit.
pub fn sweep_sphere_aabb(ray: &Ray, radius: f32, min: Vec3, size: Vec3) -> Option<SweepHit> {
    let expanded = Aabb::from_min_size(min, size).expanded(radius);
    raycast_aabb(ray.origin, ray.direction, &expanded)?;

    let c = corners(min, size);
    let mut best: Option<SweepHit> = None;
    let mut best_distance = ray.max_distance;

    for face in &FACES {
        if ray.direction[face.axis] * face.outward >= 0.0 {
            continue;
        }
        let normal = axis_vector(face.axis, face.outward);
        let [a, b, d] = face.corners;
        let quad = Quad::new(c[a], c[b], c[d]).translated(normal * radius);

        if let Some(hit) = raycast_quad(&ray.with_max_distance(best_distance), &quad, false) {
            best_distance = hit.distance;
            best = Some(SweepHit {
                point: hit.point - normal * radius,
                normal,
                distance: hit.distance,
            });
        }
    }
    if best.is_some() {
        return best;
    }

    for (axis, starts) in EDGES {
        for start in starts {
            let cylinder = Cylinder::new(c[start], axis_vector(axis, 1.0), size[axis], radius);
            if let Some(hit) = raycast_cylinder(&ray.with_max_distance(best_distance), &cylinder) {
                best_distance = hit.distance;
                best = Some(SweepHit {
                    point: hit.point - hit.normal * radius,
                    normal: hit.normal,
                    distance: hit.distance,
                });
            }
        }
    }
    if best.is_some() {
        return best;
    }

    for corner in c {
        if let Some(distance) = raycast_sphere(corner, radius, ray.origin, ray.direction) {
            if distance < best_distance {
                best_distance = distance;
                best = Some(SweepHit {
                    point: corner,
                    normal: (ray.at(distance) - corner).normalize_or_zero(),
                    distance,
                });
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_table_matches_bit_layout() {
        let c = corners(Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(c[C000], Vec3::ZERO);
        assert_eq!(c[C100], Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(c[C010], Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(c[C001], Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(c[C111], Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn face_windings_point_outward() {
        let c = corners(Vec3::ZERO, Vec3::ONE);
        for face in &FACES {
            let [a, b, d] = face.corners;
            let n = (c[b] - c[a]).cross(c[d] - c[a]);
            assert_eq!(n, axis_vector(face.axis, face.outward));
        }
    }

    #[test]
    fn edge_starts_span_the_box() {
        let size = Vec3::new(1.0, 2.0, 3.0);
        let c = corners(Vec3::ZERO, size);
        for (axis, starts) in EDGES {
            for start in starts {
                let end = c[start] + axis_vector(axis, size[axis]);
                assert!(c.contains(&end), "edge from {start:03b} leaves the box");
            }
        }
    }

    #[test]
    fn ray_moving_away_never_hits() {
        let ray = Ray::new(Vec3::new(-2.0, 0.5, 0.5), Vec3::NEG_X, 10.0);
        assert!(sweep_sphere_aabb(&ray, 0.5, Vec3::ZERO, Vec3::ONE).is_none());
    }
}
