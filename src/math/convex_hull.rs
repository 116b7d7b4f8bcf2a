use super::{orientation, Orientation, Positioned, PRECISION};

/// Computes the convex hull of a point multiset (Andrew's monotone chain).
///
/// The hull is returned clockwise (y-up frame), starting at the point with the
/// smallest `x` (then smallest `y`), without repeating the start point.
/// Collinear boundary points and coincident duplicates are dropped, so a set of
/// collinear points collapses to its two extremes and a set of coincident
/// points to a single point. Inputs with at most one point come back unchanged.
///
/// Points are sorted by `(x, y)`; the sort is stable, so exact ties keep their
/// input order.
#[must_use]
pub fn convex_hull<P: Positioned + Clone>(points: &[P]) -> Vec<P> {
    if points.len() <= 1 {
        return points.to_vec();
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| {
        let (pa, pb) = (a.position(), b.position());
        pa.x.total_cmp(&pb.x).then(pa.y.total_cmp(&pb.y))
    });
    sorted.dedup_by(|a, b| (a.position() - b.position()).norm() < PRECISION);
    if sorted.len() <= 1 {
        return sorted;
    }

    let mut hull: Vec<P> = Vec::with_capacity(2 * sorted.len());

    // Left to right, keeping only clockwise turns.
    for p in &sorted {
        while hull.len() >= 2 && !turns_right(&hull, p) {
            hull.pop();
        }
        hull.push(p.clone());
    }

    // Right to left. The first chain's last point must stay on the stack.
    let first_chain_len = hull.len() + 1;
    for p in sorted.iter().rev().skip(1) {
        while hull.len() >= first_chain_len && !turns_right(&hull, p) {
            hull.pop();
        }
        hull.push(p.clone());
    }

    // Last point duplicates the start.
    hull.pop();
    hull
}

fn turns_right<P: Positioned>(hull: &[P], next: &P) -> bool {
    let n = hull.len();
    orientation(
        &hull[n - 2].position(),
        &hull[n - 1].position(),
        &next.position(),
    ) == Orientation::Right
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use proptest::prelude::*;

    fn signed_area(points: &[Point2]) -> f64 {
        let n = points.len();
        let mut sum = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            sum += points[i].x * points[j].y - points[j].x * points[i].y;
        }
        sum * 0.5
    }

    fn contains_convex_cw(hull: &[Point2], p: &Point2) -> bool {
        let n = hull.len();
        (0..n).all(|i| orientation(&hull[i], &hull[(i + 1) % n], p) != Orientation::Left)
    }

    #[test]
    fn empty_and_single_unchanged() {
        let empty: Vec<Point2> = Vec::new();
        assert!(convex_hull(&empty).is_empty());

        let single = vec![Point2::new(3.0, -2.0)];
        assert_eq!(convex_hull(&single), single);
    }

    #[test]
    fn two_points_kept() {
        let pts = vec![Point2::new(4.0, 1.0), Point2::new(-1.0, 2.0)];
        let hull = convex_hull(&pts);
        assert_eq!(hull.len(), 2);
        assert!(hull.contains(&pts[0]));
        assert!(hull.contains(&pts[1]));
    }

    #[test]
    fn triangle_is_clockwise() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(5.0, 8.0),
        ];
        let hull = convex_hull(&pts);
        assert_eq!(
            hull,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(5.0, 8.0),
                Point2::new(10.0, 0.0),
            ]
        );
        assert!(signed_area(&hull) < 0.0);
    }

    #[test]
    fn interior_and_edge_points_dropped() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 0.0),
            Point2::new(4.0, 1.0),
            Point2::new(1.0, 3.0),
        ];
        let hull = convex_hull(&pts);
        assert_eq!(hull.len(), 4);
        assert!(signed_area(&hull) < 0.0);
        for p in &pts {
            assert!(contains_convex_cw(&hull, p), "{p:?} outside hull");
        }
        let n = hull.len();
        for i in 0..n {
            let o = orientation(&hull[i], &hull[(i + 1) % n], &hull[(i + 2) % n]);
            assert_eq!(o, Orientation::Right);
        }
    }

    #[test]
    fn collinear_points_collapse_to_extremes() {
        let pts = vec![
            Point2::new(1.0, 1.0),
            Point2::new(3.0, 3.0),
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 2.0),
        ];
        let hull = convex_hull(&pts);
        assert_eq!(hull, vec![Point2::new(0.0, 0.0), Point2::new(3.0, 3.0)]);
    }

    #[test]
    fn coincident_points_collapse_to_one() {
        let pts = vec![Point2::new(1.0, 1.0); 5];
        assert_eq!(convex_hull(&pts), vec![Point2::new(1.0, 1.0)]);
    }

    proptest! {
        #[test]
        fn any_cloud_lies_inside_its_clockwise_hull(
            coords in prop::collection::vec((0.0..100.0_f64, 0.0..100.0_f64), 1..120)
        ) {
            let pts: Vec<Point2> = coords.iter().map(|&(x, y)| Point2::new(x, y)).collect();
            let hull = convex_hull(&pts);
            prop_assert!(!hull.is_empty());
            prop_assert!(hull.iter().all(|h| pts.contains(h)));
            let n = hull.len();
            if n >= 3 {
                prop_assert!(signed_area(&hull) < 0.0);
                for i in 0..n {
                    let turn = orientation(&hull[i], &hull[(i + 1) % n], &hull[(i + 2) % n]);
                    prop_assert_eq!(turn, Orientation::Right);
                }
            }
            for p in &pts {
                prop_assert!(contains_convex_cw(&hull, p), "{:?} outside hull", p);
            }
        }
    }
}
