use std::ops::ControlFlow;

use voxel_sweep::{
    cells_on_segment, traverse_ray, GeometryError, IVec3, TraversalEnd, TraversalStep, Vec3,
    VoxelGrid,
};

fn collect(
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
    grid: &VoxelGrid,
) -> Vec<TraversalStep> {
    let mut steps = Vec::new();
    let end = traverse_ray(origin, direction, max_distance, grid, |step| {
        steps.push(*step);
        ControlFlow::Continue(())
    })
    .expect("short traversal");
    assert_eq!(end, TraversalEnd::Completed);
    steps
}

#[test]
fn straight_ray_visits_each_cell_once_in_order() {
    let steps = collect(Vec3::splat(0.5), Vec3::X, 5.0, &VoxelGrid::UNIT);
    let cells: Vec<IVec3> = steps.iter().map(|s| s.cell).collect();
    let expected: Vec<IVec3> = (0..=5).map(|x| IVec3::new(x, 0, 0)).collect();
    assert_eq!(cells, expected);

    for step in &steps {
        assert_eq!(step.normal, Vec3::NEG_X);
    }
    for pair in steps.windows(2) {
        assert!(pair[1].point.x > pair[0].point.x);
    }
    let last = steps.last().expect("non-empty");
    assert!((last.point - Vec3::new(5.5, 0.5, 0.5)).length() < 1e-4);
}

#[test]
fn negative_direction_walks_down() {
    let steps = collect(Vec3::new(0.5, 0.5, 0.5), Vec3::NEG_Y, 3.0, &VoxelGrid::UNIT);
    let cells: Vec<IVec3> = steps.iter().map(|s| s.cell).collect();
    assert_eq!(
        cells,
        vec![
            IVec3::new(0, 0, 0),
            IVec3::new(0, -1, 0),
            IVec3::new(0, -2, 0),
            IVec3::new(0, -3, 0)
        ]
    );
    assert_eq!(steps[0].normal, Vec3::Y);
}

#[test]
fn diagonal_ray_is_face_connected() {
    let direction = Vec3::new(1.0, 0.7, -0.4).normalize();
    let steps = collect(Vec3::new(0.2, 0.3, 0.4), direction, 12.0, &VoxelGrid::UNIT);

    assert_eq!(steps[0].cell, IVec3::ZERO);
    for pair in steps.windows(2) {
        let diff = pair[1].cell - pair[0].cell;
        assert_eq!(diff.abs().element_sum(), 1, "cells {} -> {}", pair[0].cell, pair[1].cell);
    }

    let end = Vec3::new(0.2, 0.3, 0.4) + direction * 12.0;
    assert_eq!(steps.last().expect("non-empty").cell, end.floor().as_ivec3());
}

#[test]
fn zero_length_ray_visits_origin_cell() {
    let steps = collect(Vec3::new(2.5, -0.5, 7.25), Vec3::ZERO, 0.0, &VoxelGrid::UNIT);
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].cell, IVec3::new(2, -1, 7));
}

#[test]
fn visitor_can_stop_early() {
    let mut visited = Vec::new();
    let end = traverse_ray(Vec3::splat(0.5), Vec3::X, 10.0, &VoxelGrid::UNIT, |step| {
        visited.push(step.cell);
        if step.cell.x == 2 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
    .expect("short traversal");

    assert_eq!(end, TraversalEnd::Stopped);
    assert_eq!(visited.len(), 3);
}

#[test]
fn overly_long_ray_hits_step_cap() {
    let result = traverse_ray(Vec3::splat(0.5), Vec3::X, 5000.0, &VoxelGrid::UNIT, |_| {
        ControlFlow::Continue(())
    });

    match result {
        Err(GeometryError::TraversalLimit { steps, max_distance, .. }) => {
            assert_eq!(steps, 1000);
            assert_eq!(max_distance, 5000.0);
        }
        other => panic!("expected traversal limit, got {other:?}"),
    }
}

#[test]
fn grid_offset_shifts_cell_indices() {
    let grid = VoxelGrid::new(Vec3::ONE, Vec3::splat(0.5));
    let steps = collect(Vec3::new(0.2, 0.5, 0.5), Vec3::X, 1.0, &grid);
    assert_eq!(steps[0].cell, IVec3::new(-1, 0, 0));
    assert_eq!(steps.last().expect("non-empty").cell, IVec3::new(0, 0, 0));
}

#[test]
fn scaled_grid_reports_world_points() {
    let grid = VoxelGrid::new(Vec3::splat(2.0), Vec3::ZERO);
    let steps = collect(Vec3::new(1.0, 1.0, 1.0), Vec3::X, 4.0, &grid);
    let cells: Vec<IVec3> = steps.iter().map(|s| s.cell).collect();
    assert_eq!(cells, vec![IVec3::new(0, 0, 0), IVec3::new(1, 0, 0), IVec3::new(2, 0, 0)]);
    assert!((steps[0].point - Vec3::new(2.0, 1.0, 1.0)).length() < 1e-4);
}

#[test]
fn segment_helper_matches_traversal() {
    let from = Vec3::new(0.5, 0.5, 0.5);
    let to = Vec3::new(3.5, 2.5, 0.5);
    let cells = cells_on_segment(from, to, &VoxelGrid::UNIT).expect("short segment");

    let direction = (to - from).normalize();
    let walked: Vec<IVec3> = collect(from, direction, (to - from).length(), &VoxelGrid::UNIT)
        .iter()
        .map(|s| s.cell)
        .collect();
    assert_eq!(cells, walked);
    assert_eq!(cells.first(), Some(&IVec3::ZERO));
    assert_eq!(cells.last(), Some(&IVec3::new(3, 2, 0)));
}
