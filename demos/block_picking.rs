use voxel_sweep::*;

fn main() {
    env_logger::init();

    let mut world = VoxelSet::new();
    world.fill(IVec3::new(-4, -1, -4), IVec3::new(4, -1, 4));
    let eye = Vec3::new(0.5, 1.7, -3.5);
    let look = Vec3::new(0.1, -0.45, 1.0).normalize();

    // Stack a few blocks where the camera looks, like a player placing them.
    for _ in 0..3 {
        let ray = Ray::new(eye, look, 8.0);
        match pick_block(&ray, &world) {
            Ok(Some(pick)) => {
                println!(
                    "hit {} at {:.3} through {:?}",
                    pick.cell, pick.point, pick.face
                );
                if let Some(place) = pick.place {
                    world.insert(place);
                    println!("placed block at {place}");
                }
            }
            Ok(None) => println!("nothing within reach"),
            Err(err) => eprintln!("pick failed: {err}"),
        }
    }

    println!("world now has {} solid cells", world.len());
}
