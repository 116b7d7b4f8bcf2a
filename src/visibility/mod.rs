//! Visibility of one island's boundary from another island.
//!
//! Each boundary piece of island A (whole circle, anchored arc or straight
//! segment) is clipped to the part not shadowed by the tangent lines of
//! island B. Intervals are expressed in the piece's own parameter range
//! `[0, 1]`; an interval that collapses is reported as `None` and the piece is
//! skipped.

use std::f64::consts::TAU;

use crate::geometry::{Arc, Circle, Contour, LineSegment};
use crate::island::{BoundaryPiece, Island};
use crate::math::{left_normal, orientation, signed_angle, Orientation, Point2, PRECISION};

/// The two outer tangent points of an island as seen from an external point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentPair {
    /// Counter-clockwise extreme.
    pub left: Point2,
    /// Clockwise extreme.
    pub right: Point2,
}

/// Outer tangent points of the union of `island`'s circles as seen from `v`.
///
/// Every circle contributes its two tangent points; the angularly extreme
/// ones around `v`, measured from the direction to the first circle, bound
/// the visibility cone. Among points in the same direction the farther one
/// wins. Returns `None` if `v` lies inside any of the circles.
#[must_use]
pub fn tangents(island: &Island, v: &Point2) -> Option<TangentPair> {
    let circles = island.circles();
    let reference = circles.first()?.center() - v;

    // (angle, squared distance, point)
    let mut left: Option<(f64, f64, Point2)> = None;
    let mut right: Option<(f64, f64, Point2)> = None;
    for circle in circles {
        let Some(points) = circle.tangent_points(v) else {
            tracing::trace!(?v, "tangent query from inside an island circle");
            return None;
        };
        for p in points {
            let angle = signed_angle(&reference, &(p - v));
            let dist_sq = (p - v).norm_squared();
            let candidate = (angle, dist_sq, p);
            if left.map_or(true, |(a, d, _)| {
                angle > a + PRECISION || ((angle - a).abs() <= PRECISION && dist_sq > d)
            }) {
                left = Some(candidate);
            }
            if right.map_or(true, |(a, d, _)| {
                angle < a - PRECISION || ((angle - a).abs() <= PRECISION && dist_sq > d)
            }) {
                right = Some(candidate);
            }
        }
    }

    Some(TangentPair {
        left: left?.2,
        right: right?.2,
    })
}

/// Visible part of the whole circle `circle` as seen from `other`.
///
/// The lines through `other`'s two extreme tangent points (taken from the
/// circle's center) that touch `circle` bound the visible arc. Returns
/// contour parameters `(t1, t2)` of the circle; the visible part runs from
/// `t1` to `t2` along the clockwise contour and wraps through the seam when
/// `t2 < t1`.
#[must_use]
pub fn circle_interval(circle: &Circle, other: &Island) -> Option<(f64, f64)> {
    let cone = tangents(other, circle.center())?;
    let [upper, _] = circle.tangent_points(&cone.left)?;
    let [_, lower] = circle.tangent_points(&cone.right)?;
    Some((
        circle.contour_parameter(&upper),
        circle.contour_parameter(&lower),
    ))
}

/// Visible part of `arc`, a sub-arc of `circle`, as seen from `other`.
///
/// The circle's visible range is intersected with the arc's angular range.
/// When the two overlap in two disjoint pieces the longer one is kept. The
/// result is in arc parameters with `s1 < s2`.
#[must_use]
pub fn arc_interval(circle: &Circle, arc: &Arc, other: &Island) -> Option<(f64, f64)> {
    if arc.sweep() > 0.0 {
        let (s1, s2) = arc_interval(circle, &arc.reversed(), other)?;
        return Some((1.0 - s2, 1.0 - s1));
    }

    let (t1, t2) = circle_interval(circle, other)?;
    // Work in clockwise angular offsets from the first visible direction.
    let theta1 = -t1 * TAU;
    let theta2 = -t2 * TAU;
    let width = (theta1 - theta2).rem_euclid(TAU);
    let extent = -arc.sweep();
    let offset = (theta1 - arc.start_angle()).rem_euclid(TAU);

    let mut best: Option<(f64, f64)> = None;
    for shift in [offset, offset - TAU] {
        let lo = shift.max(0.0);
        let hi = (shift + extent).min(width);
        if hi - lo > best.map_or(0.0, |(a, b)| b - a) {
            best = Some(((lo - shift) / extent, (hi - shift) / extent));
        }
    }

    let (s1, s2) = best?;
    if s2 - s1 < PRECISION {
        return None;
    }
    Some((s1.clamp(0.0, 1.0), s2.clamp(0.0, 1.0)))
}

/// Visible part of a boundary segment as seen from `other`.
///
/// Each circle of `other` in front of the segment (on its outward, left
/// side) contributes its extreme point toward the segment, where a line
/// parallel to the segment touches the circle's near side. That point
/// projects onto the segment, or onto the nearer end when it lies beyond
/// either end. The nearest and farthest projections from the segment start
/// bound the visible interval, so a single circle leaves the segment
/// shadowed.
#[must_use]
pub fn segment_interval(segment: &LineSegment, other: &Island) -> Option<(f64, f64)> {
    let length = segment.length();
    let dir = segment.unit_direction().ok()?;
    let outward = left_normal(&dir);
    let (start, end) = (*segment.start(), *segment.end());
    let start_normal = start + outward;
    let end_normal = end + outward;

    let mut nearest: Option<f64> = None;
    let mut farthest: Option<f64> = None;
    for circle in other.circles() {
        let center = *circle.center();
        let r = circle.radius();
        if outward.dot(&(center - start)) + r <= PRECISION {
            continue;
        }
        let Some([_, extreme]) = segment.tangent_points(circle) else {
            continue;
        };
        let candidate = if orientation(&start, &start_normal, &extreme) == Orientation::Left {
            start
        } else if orientation(&end, &end_normal, &extreme) == Orientation::Right {
            end
        } else {
            segment.nearest(&extreme).1
        };
        let dist_sq = (candidate - start).norm_squared();
        if nearest.map_or(true, |d| dist_sq < d) {
            nearest = Some(dist_sq);
        }
        if farthest.map_or(true, |d| dist_sq > d) {
            farthest = Some(dist_sq);
        }
    }

    let t1 = nearest?.sqrt() / length;
    let t2 = farthest?.sqrt() / length;
    if t1 >= t2 - PRECISION {
        return None;
    }
    Some((t1, t2))
}

/// Visible interval of any boundary piece.
#[must_use]
pub fn visibility_interval(piece: &BoundaryPiece<'_>, other: &Island) -> Option<(f64, f64)> {
    match piece {
        BoundaryPiece::Circle(circle) => circle_interval(circle, other),
        BoundaryPiece::CircleArc { circle, arc } => arc_interval(circle, arc, other),
        BoundaryPiece::Segment(segment) => segment_interval(segment, other),
    }
}

/// The visible part of `piece` as an open contour.
///
/// A whole circle wraps through its seam when the interval does; arcs and
/// segments never wrap.
#[must_use]
pub fn visibility_contour(piece: &BoundaryPiece<'_>, other: &Island) -> Option<Contour> {
    let (a, b) = visibility_interval(piece, other)?;
    let contour = match piece {
        BoundaryPiece::Circle(circle) => circle.contour().sub(a, b),
        BoundaryPiece::CircleArc { arc, .. } => Contour::from_arc(**arc, false).sub(a, b),
        BoundaryPiece::Segment(segment) => Contour::from_segment(**segment).sub(a, b),
    };
    (!contour.is_empty()).then_some(contour)
}

/// Visible parts of `island`'s boundary as seen from `other`, one contour per
/// boundary piece that is not fully shadowed.
///
/// Identity is not checked here; [`Island::visibility_contours`] returns
/// nothing for an island paired with itself.
#[must_use]
pub fn visibility_contours(island: &Island, other: &Island) -> Vec<Contour> {
    let pieces = island.pieces();
    let contours: Vec<Contour> = pieces
        .iter()
        .filter_map(|piece| {
            let contour = visibility_contour(piece, other);
            if contour.is_none() {
                tracing::trace!(?piece, "boundary piece shadowed");
            }
            contour
        })
        .collect();
    tracing::debug!(
        pieces = pieces.len(),
        visible = contours.len(),
        "visibility computed"
    );
    contours
}
