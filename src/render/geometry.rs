//! Point-in-polygon containment.

use glam::DVec2;

/// Even-odd containment with a horizontal ray cast, evaluated on a
/// closed vertex loop.
///
/// An edge toggles when the query's y lies strictly between the edge
/// endpoints' y-values and the ray's x-intercept lies strictly left of
/// the query. Each edge counts its lower endpoint and excludes its
/// upper, so an edge shared by two adjacent polygons assigns boundary
/// points to exactly one of them.
pub fn polygon_contains(vertices: &[DVec2], query: DVec2) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (a, b) = (vertices[i], vertices[j]);
        if (a.y > query.y) != (b.y > query.y) {
            let intercept = (b.x - a.x) * (query.y - a.y) / (b.y - a.y) + a.x;
            if query.x > intercept {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn unit_square() -> Vec<DVec2> {
        vec![
            dvec2(0.0, 0.0),
            dvec2(10.0, 0.0),
            dvec2(10.0, 10.0),
            dvec2(0.0, 10.0),
        ]
    }

    #[test]
    fn interior_and_exterior() {
        let square = unit_square();
        assert!(polygon_contains(&square, dvec2(5.0, 5.0)));
        assert!(!polygon_contains(&square, dvec2(15.0, 5.0)));
        assert!(!polygon_contains(&square, dvec2(5.0, -1.0)));
    }

    #[test]
    fn shared_edge_counts_once() {
        // two boxes sharing the x = 10 edge; a query on that edge must
        // belong to exactly one of them
        let left = unit_square();
        let right = vec![
            dvec2(10.0, 0.0),
            dvec2(20.0, 0.0),
            dvec2(20.0, 10.0),
            dvec2(10.0, 10.0),
        ];
        let query = dvec2(10.0, 5.0);
        let hits = [&left, &right]
            .iter()
            .filter(|polygon| polygon_contains(polygon, query))
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn stable_under_vertex_rotation() {
        let square = unit_square();
        let query = dvec2(3.0, 7.0);
        let expected = polygon_contains(&square, query);
        for shift in 1..4 {
            let mut rotated = square.clone();
            rotated.rotate_left(shift);
            assert_eq!(polygon_contains(&rotated, query), expected);
        }
    }

    #[test]
    fn degenerate_polygons_contain_nothing() {
        assert!(!polygon_contains(&[], dvec2(0.0, 0.0)));
        assert!(!polygon_contains(
            &[dvec2(0.0, 0.0), dvec2(10.0, 0.0)],
            dvec2(5.0, 0.0)
        ));
    }

    #[test]
    fn concave_polygon() {
        // a U shape: the notch is outside
        let u = vec![
            dvec2(0.0, 0.0),
            dvec2(30.0, 0.0),
            dvec2(30.0, 30.0),
            dvec2(20.0, 30.0),
            dvec2(20.0, 10.0),
            dvec2(10.0, 10.0),
            dvec2(10.0, 30.0),
            dvec2(0.0, 30.0),
        ];
        assert!(polygon_contains(&u, dvec2(5.0, 20.0)));
        assert!(polygon_contains(&u, dvec2(25.0, 20.0)));
        assert!(!polygon_contains(&u, dvec2(15.0, 20.0)));
        assert!(polygon_contains(&u, dvec2(15.0, 5.0)));
    }
}
