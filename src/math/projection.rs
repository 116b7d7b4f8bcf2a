//! Degeneracy removal by rotation.
//!
//! Point sets taken from grids or hand-made examples are full of axis-aligned
//! and parallel pairs. Sorting keys and orientation tie-breaks downstream are
//! sensitive to exactly those alignments, so the whole set is rotated by the
//! angle that lies furthest from every pairwise direction present.

use nalgebra::Rotation2;

use super::{Point2, Positioned, PRECISION};
use crate::geometry::{Point, PointSet};

/// Picks a rotation angle (radians) that avoids the pairwise directions of
/// `points`.
///
/// Collects the direction angle of every ordered pair of distinct points,
/// sorts them and returns the midpoint of the widest gap between adjacent
/// angles. Returns `0.0` for fewer than three points or when every point
/// coincides.
#[must_use]
pub fn regular_projection<P: Positioned>(points: &[P]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let positions: Vec<Point2> = points.iter().map(Positioned::position).collect();
    let mut angles = Vec::with_capacity(positions.len() * (positions.len() - 1));
    for (i, p) in positions.iter().enumerate() {
        for (j, q) in positions.iter().enumerate() {
            if i == j {
                continue;
            }
            let d = q - p;
            if d.norm() < PRECISION {
                continue;
            }
            angles.push(d.y.atan2(d.x));
        }
    }
    if angles.len() < 2 {
        return 0.0;
    }
    angles.sort_by(f64::total_cmp);

    let mut best = 0;
    let mut best_gap = f64::NEG_INFINITY;
    for (k, pair) in angles.windows(2).enumerate() {
        let gap = pair[1] - pair[0];
        if gap > best_gap {
            best_gap = gap;
            best = k;
        }
    }
    (angles[best] + angles[best + 1]) * 0.5
}

/// Rotates a position counter-clockwise about the origin.
#[must_use]
pub fn rotate_point(p: &Point2, angle: f64) -> Point2 {
    Rotation2::new(angle) * p
}

/// Rotates every point of `source` by `angle` about the origin.
///
/// Each rotated point keeps its type label and refers back to its source
/// point through [`Point::original`]. Points of the returned set appear in the
/// same order as in `source`.
#[must_use]
pub fn transform_points(source: &PointSet, angle: f64) -> PointSet {
    let mut rotated = PointSet::with_capacity(source.len());
    for (id, point) in source.iter() {
        rotated.insert(Point::derived(
            rotate_point(&point.position, angle),
            point.kind,
            id,
        ));
    }
    rotated
}
