//! Rounded outline of a closed vertex cycle: the boundary of the cycle's
//! Minkowski sum with a disk.
//!
//! Every edge is offset to its left by the radius. At a vertex where the
//! offsets turn clockwise (an outer corner) they are joined by a clockwise arc
//! around the vertex spanning the true exterior angle. Where they turn
//! counter-clockwise (an inner corner, only possible on bend paths) the two
//! offset segments are trimmed at their intersection instead.

use std::f64::consts::{PI, TAU};

use crate::error::{IslandError, Result};
use crate::geometry::{Arc, Contour, LineSegment, Piece};
use crate::math::intersect_2d::line_line_intersect_2d;
use crate::math::{left_normal, Point2, Vector2, PRECISION};

/// Turning angles below this are treated as straight continuations.
const STRAIGHT_TURN: f64 = 1e-9;

/// Exterior angles up to `π + HAIRPIN_SLACK` are joined with an arc, so exact
/// U-turns (bend end caps) round off instead of trimming parallel lines.
const HAIRPIN_SLACK: f64 = 1e-6;

/// An arc of the outline together with the index of the anchor it wraps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchoredArc {
    pub anchor: usize,
    pub arc: Arc,
}

/// Arcs, connecting segments and the closed contour built from them.
#[derive(Debug, Clone)]
pub struct RoundedOutline {
    pub arcs: Vec<AnchoredArc>,
    pub segments: Vec<LineSegment>,
    pub contour: Contour,
}

/// Builds the rounded outline of `cycle`.
///
/// `anchors[j]` names the anchor (circle) index of `cycle[j]`. Consecutive
/// cycle vertices must be distinct and the cycle must have at least two
/// vertices. A clockwise cycle yields a clockwise contour that starts with the
/// arc (or segment) at `cycle[0]`.
///
/// # Errors
///
/// Returns [`IslandError::RadiusTooLarge`] if trimming at an inner corner
/// would invert or swallow a segment.
pub fn rounded_outline(cycle: &[Point2], anchors: &[usize], radius: f64) -> Result<RoundedOutline> {
    let m = cycle.len();
    debug_assert!(m >= 2 && anchors.len() == m);

    let normals: Vec<Vector2> = (0..m)
        .map(|j| {
            let d = cycle[(j + 1) % m] - cycle[j];
            let len = d.norm();
            if len < PRECISION {
                Vector2::zeros()
            } else {
                left_normal(&(d / len))
            }
        })
        .collect();
    let angles: Vec<f64> = normals.iter().map(|n| n.y.atan2(n.x)).collect();

    // Offset segment per edge, as (start parameter, end parameter) trims over
    // the raw offset.
    let raw: Vec<LineSegment> = (0..m)
        .map(|j| {
            let offset = normals[j] * radius;
            LineSegment::new(cycle[j] + offset, cycle[(j + 1) % m] + offset)
        })
        .collect();
    let mut trims = vec![(0.0_f64, 1.0_f64); m];
    let mut vertex_arcs: Vec<Option<AnchoredArc>> = vec![None; m];

    for j in 0..m {
        let prev = (j + m - 1) % m;
        let exterior = (angles[prev] - angles[j]).rem_euclid(TAU);
        if exterior < STRAIGHT_TURN || TAU - exterior < STRAIGHT_TURN {
            continue;
        }
        if exterior <= PI + HAIRPIN_SLACK {
            vertex_arcs[j] = Some(AnchoredArc {
                anchor: anchors[j],
                arc: Arc::new(cycle[j], radius, angles[prev], -exterior)?,
            });
            continue;
        }
        let (incoming, outgoing) = (&raw[prev], &raw[j]);
        let (t, u) = line_line_intersect_2d(
            incoming.start(),
            incoming.end(),
            outgoing.start(),
            outgoing.end(),
        )
        .ok_or(IslandError::RadiusTooLarge { radius })?;
        trims[prev].1 = t;
        trims[j].0 = u;
    }

    let mut segments = Vec::with_capacity(m);
    for (segment, &(s0, s1)) in raw.iter().zip(&trims) {
        if s0 < -PRECISION || s1 > 1.0 + PRECISION || s1 - s0 < PRECISION {
            return Err(IslandError::RadiusTooLarge { radius }.into());
        }
        segments.push(segment.sub(s0, s1));
    }

    let mut pieces = Vec::with_capacity(2 * m);
    for (vertex_arc, segment) in vertex_arcs.iter().zip(&segments) {
        if let Some(anchored) = vertex_arc {
            pieces.push(Piece::Arc(anchored.arc));
        }
        pieces.push(Piece::Line(*segment));
    }

    Ok(RoundedOutline {
        arcs: vertex_arcs.into_iter().flatten().collect(),
        segments,
        contour: Contour::new(pieces, true),
    })
}
