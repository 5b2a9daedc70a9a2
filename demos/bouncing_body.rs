use voxel_sweep::*;

fn main() {
    env_logger::init();

    let mut world = VoxelSet::new();
    world.fill(IVec3::new(-8, -1, -8), IVec3::new(8, -1, 8));
    world.fill(IVec3::new(6, 0, -8), IVec3::new(6, 4, 8));

    let config = BodyConfig {
        motion: MotionSettings::new(0.4, 0.7, 4),
        ..BodyConfig::default()
    };
    let mut body = Body::new(Vec3::new(0.5, 4.0, 0.5), config);
    body.velocity = Vec3::new(6.0, 0.0, 1.0);

    let mut scratch = SweepScratch::new();
    let dt = 1.0 / 60.0;

    for frame in 0..240 {
        if let Err(err) = body.step(dt, &world, &mut scratch) {
            eprintln!("frame {frame}: {err}");
            return;
        }
        if frame % 20 == 0 {
            println!(
                "frame {frame:3}: position {:.3} velocity {:.3}",
                body.position, body.velocity
            );
        }
    }

    println!(
        "resting at {:.3}, embedded: {}",
        body.position,
        overlaps_solid(body.position, config.motion.radius, &world)
    );
}
