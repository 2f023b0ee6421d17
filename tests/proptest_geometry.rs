//! Property-based invariants for polygon containment.
//!
//! These verify structural properties the text parser depends on:
//!
//! 1. Containment is stable under cyclic rotation of the vertex list.
//! 2. Containment agrees with the bounding box on clear interior and
//!    exterior points.
//! 3. Degenerate vertex lists contain nothing.

use asciru::render::geometry::polygon_contains;
use glam::{dvec2, DVec2};
use proptest::prelude::*;

fn rectangle(x: f64, y: f64, w: f64, h: f64) -> Vec<DVec2> {
    vec![
        dvec2(x, y),
        dvec2(x + w, y),
        dvec2(x + w, y + h),
        dvec2(x, y + h),
    ]
}

proptest! {
    #[test]
    fn containment_stable_under_rotation(
        x in -100.0..100.0f64,
        y in -100.0..100.0f64,
        w in 1.0..50.0f64,
        h in 1.0..50.0f64,
        qx in -200.0..200.0f64,
        qy in -200.0..200.0f64,
        shift in 0usize..4,
    ) {
        let vertices = rectangle(x, y, w, h);
        let mut rotated = vertices.clone();
        rotated.rotate_left(shift);
        let query = dvec2(qx, qy);
        prop_assert_eq!(
            polygon_contains(&vertices, query),
            polygon_contains(&rotated, query),
            "rotation by {} changed containment of {:?}",
            shift,
            query
        );
    }

    #[test]
    fn interior_points_are_contained(
        x in -100.0..100.0f64,
        y in -100.0..100.0f64,
        w in 1.0..50.0f64,
        h in 1.0..50.0f64,
        fx in 0.05..0.95f64,
        fy in 0.05..0.95f64,
    ) {
        let vertices = rectangle(x, y, w, h);
        let query = dvec2(x + w * fx, y + h * fy);
        prop_assert!(polygon_contains(&vertices, query));
    }

    #[test]
    fn points_outside_the_bounding_box_are_not_contained(
        x in -100.0..100.0f64,
        y in -100.0..100.0f64,
        w in 1.0..50.0f64,
        h in 1.0..50.0f64,
        offset in 0.5..100.0f64,
    ) {
        let vertices = rectangle(x, y, w, h);
        prop_assert!(!polygon_contains(&vertices, dvec2(x - offset, y + h / 2.0)));
        prop_assert!(!polygon_contains(&vertices, dvec2(x + w + offset, y + h / 2.0)));
        prop_assert!(!polygon_contains(&vertices, dvec2(x + w / 2.0, y - offset)));
        prop_assert!(!polygon_contains(&vertices, dvec2(x + w / 2.0, y + h + offset)));
    }

    #[test]
    fn degenerate_polygons_contain_nothing(
        qx in -10.0..10.0f64,
        qy in -10.0..10.0f64,
        ax in -10.0..10.0f64,
        ay in -10.0..10.0f64,
        bx in -10.0..10.0f64,
        by in -10.0..10.0f64,
    ) {
        let query = dvec2(qx, qy);
        prop_assert!(!polygon_contains(&[], query));
        prop_assert!(!polygon_contains(&[dvec2(ax, ay)], query));
        prop_assert!(!polygon_contains(&[dvec2(ax, ay), dvec2(bx, by)], query));
    }
}
