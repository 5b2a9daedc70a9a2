use glam::Quat;
use voxel_sweep::*;

fn main() {
    env_logger::init();

    let boxes = [
        OrientedBox::axis_aligned(Vec3::new(-0.5, -0.5, 4.0), Vec3::ONE),
        OrientedBox::new(
            Vec3::new(0.0, -0.5, 2.0),
            Quat::from_rotation_y(0.6) * Vec3::X,
            Vec3::Y,
            Quat::from_rotation_y(0.6) * Vec3::Z,
        ),
    ];
    let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, 20.0);

    match raycast_nearest_box(&ray, &boxes) {
        Some((index, hit)) => println!(
            "box {index} hit at {:.3} (distance {:.3}, normal {:.3})",
            hit.point, hit.distance, hit.normal
        ),
        None => println!("no box hit"),
    }

    let pillar = Cylinder::new(Vec3::new(2.0, 0.0, 0.0), Vec3::Y, 3.0, 0.5);
    let side = Ray::new(Vec3::new(-5.0, 1.0, 0.0), Vec3::X, 20.0);
    if let Some(hit) = raycast_cylinder(&side, &pillar) {
        println!("pillar hit at {:.3} facing {:.3}", hit.point, hit.normal);
    }

    let swept = sweep_sphere_aabb(&side, 0.4, Vec3::new(4.0, 0.0, -0.5), Vec3::ONE);
    println!("0.4 sphere sweep against block: {swept:?}");
}
