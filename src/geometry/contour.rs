//! Piecewise line/arc contours with normalized arc-length parametrization.
//!
//! A contour is an ordered run of [`Piece`]s, each starting where the previous
//! one ends. Parameter `t` in `[0, 1]` maps linearly onto arc length, so
//! `t = 0.5` is always halfway along the contour regardless of how the pieces
//! are sized.

use std::ops::Add;

use crate::math::intersect_2d::{
    arc_arc_intersect_2d, line_arc_intersect_2d, segment_segment_intersect_2d,
};
use crate::math::{Point2, PRECISION};

use super::{Arc, LineSegment};

/// Distance under which an intersection counts as the shared joint of two
/// consecutive pieces.
const JOINT_TOLERANCE: f64 = 1e-6;

/// One curve piece of a contour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Piece {
    Line(LineSegment),
    Arc(Arc),
}

impl Piece {
    /// Returns the start point of the piece.
    #[must_use]
    pub fn start_point(&self) -> Point2 {
        match self {
            Piece::Line(line) => *line.start(),
            Piece::Arc(arc) => arc.start_point(),
        }
    }

    /// Returns the end point of the piece.
    #[must_use]
    pub fn end_point(&self) -> Point2 {
        match self {
            Piece::Line(line) => *line.end(),
            Piece::Arc(arc) => arc.end_point(),
        }
    }

    /// Returns the arc length of the piece.
    #[must_use]
    pub fn length(&self) -> f64 {
        match self {
            Piece::Line(line) => line.length(),
            Piece::Arc(arc) => arc.length(),
        }
    }

    /// Point at the piece parameter `s`.
    #[must_use]
    pub fn point_at(&self, s: f64) -> Point2 {
        match self {
            Piece::Line(line) => line.point_at(s),
            Piece::Arc(arc) => arc.point_at(s),
        }
    }

    /// Closest point of the piece to `p`, with its local parameter.
    #[must_use]
    pub fn nearest(&self, p: &Point2) -> (f64, Point2) {
        match self {
            Piece::Line(line) => line.nearest(p),
            Piece::Arc(arc) => arc.nearest(p),
        }
    }

    /// The part of the piece between parameters `s0` and `s1`.
    #[must_use]
    pub fn sub(&self, s0: f64, s1: f64) -> Self {
        match self {
            Piece::Line(line) => Piece::Line(line.sub(s0, s1)),
            Piece::Arc(arc) => Piece::Arc(arc.sub(s0, s1)),
        }
    }

    /// The same piece traversed backwards.
    #[must_use]
    pub fn reversed(&self) -> Self {
        match self {
            Piece::Line(line) => Piece::Line(line.reversed()),
            Piece::Arc(arc) => Piece::Arc(arc.reversed()),
        }
    }

    /// Intersection points between two pieces.
    #[must_use]
    pub fn intersections(&self, other: &Piece) -> Vec<Point2> {
        match (self, other) {
            (Piece::Line(a), Piece::Line(b)) => {
                segment_segment_intersect_2d(a.start(), a.end(), b.start(), b.end())
                    .map(|(p, _, _)| p)
                    .into_iter()
                    .collect()
            }
            (Piece::Line(line), Piece::Arc(arc)) | (Piece::Arc(arc), Piece::Line(line)) => {
                line_arc_intersect_2d(
                    line.start(),
                    line.end(),
                    arc.center(),
                    arc.radius(),
                    arc.start_angle(),
                    arc.sweep(),
                )
                .into_iter()
                .map(|(p, _, _)| p)
                .collect()
            }
            (Piece::Arc(a), Piece::Arc(b)) => arc_arc_intersect_2d(
                a.center(),
                a.radius(),
                a.start_angle(),
                a.sweep(),
                b.center(),
                b.radius(),
                b.start_angle(),
                b.sweep(),
            )
            .into_iter()
            .map(|(p, _, _)| p)
            .collect(),
        }
    }

    /// Parity contribution of this piece to a `+x` ray cast from `p`.
    fn ray_crossings_odd(&self, p: &Point2) -> bool {
        let (a, b) = (self.start_point(), self.end_point());
        let chord = if (a.y > p.y) == (b.y > p.y) {
            false
        } else {
            let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            p.x < x
        };
        match self {
            Piece::Line(_) => chord,
            // The arc crosses the ray as often (mod 2) as its chord, plus one
            // if `p` sits between chord and arc.
            Piece::Arc(arc) => chord != arc.region_contains(p),
        }
    }
}

/// A point on a contour together with its contour parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourPoint {
    pub t: f64,
    pub point: Point2,
    pub distance: f64,
}

/// An open or closed piecewise contour.
#[derive(Debug, Clone, Default)]
pub struct Contour {
    pieces: Vec<Piece>,
    closed: bool,
    /// Arc length at the end of each piece.
    cumulative: Vec<f64>,
}

impl Contour {
    /// Creates a contour from consecutive pieces.
    ///
    /// Pieces are taken as given; callers make each piece start where the
    /// previous one ends (and, if `closed`, the last end at the first start).
    #[must_use]
    pub fn new(pieces: Vec<Piece>, closed: bool) -> Self {
        let mut total = 0.0;
        let cumulative = pieces
            .iter()
            .map(|piece| {
                total += piece.length();
                total
            })
            .collect();
        Self {
            pieces,
            closed,
            cumulative,
        }
    }

    /// A contour made of a single arc.
    #[must_use]
    pub fn from_arc(arc: Arc, closed: bool) -> Self {
        Self::new(vec![Piece::Arc(arc)], closed)
    }

    /// An open contour made of a single segment.
    #[must_use]
    pub fn from_segment(segment: LineSegment) -> Self {
        Self::new(vec![Piece::Line(segment)], false)
    }

    /// Returns the pieces in walking order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Returns `true` if the contour is closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns `true` if the contour has no pieces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Total arc length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Returns the start point, if any.
    #[must_use]
    pub fn start(&self) -> Option<Point2> {
        self.pieces.first().map(Piece::start_point)
    }

    /// Returns the end point, if any.
    #[must_use]
    pub fn end(&self) -> Option<Point2> {
        self.pieces.last().map(Piece::end_point)
    }

    /// Point at contour parameter `t` (clamped to `[0, 1]`).
    ///
    /// An empty contour has no points; it reports the origin.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        match self.locate(t, true) {
            Some((i, s)) => self.pieces[i].point_at(s),
            None => Point2::origin(),
        }
    }

    /// Closest point of the contour to `p`. `None` for an empty contour.
    #[must_use]
    pub fn nearest(&self, p: &Point2) -> Option<ContourPoint> {
        let total = self.length();
        let mut best: Option<ContourPoint> = None;
        let mut before = 0.0;
        for (piece, &after) in self.pieces.iter().zip(&self.cumulative) {
            let (s, point) = piece.nearest(p);
            let distance = (p - point).norm();
            if best.map_or(true, |b| distance < b.distance) {
                let t = if total < PRECISION {
                    0.0
                } else {
                    (before + s * (after - before)) / total
                };
                best = Some(ContourPoint { t, point, distance });
            }
            before = after;
        }
        best
    }

    /// The part of the contour between parameters `a` and `b`, as an open
    /// contour.
    ///
    /// On a closed contour `b < a` wraps through the seam: the result is
    /// `sub(a, 1) + sub(0, b)`. On an open contour the bounds are swapped
    /// instead. Equal bounds give an empty contour.
    #[must_use]
    pub fn sub(&self, a: f64, b: f64) -> Contour {
        let (a, b) = (a.clamp(0.0, 1.0), b.clamp(0.0, 1.0));
        if b < a {
            if self.closed {
                return self.sub(a, 1.0) + self.sub(0.0, b);
            }
            return self.sub(b, a);
        }
        if b - a < PRECISION {
            return Contour::default();
        }
        let (Some((ia, sa)), Some((ib, sb))) = (self.locate(a, true), self.locate(b, false))
        else {
            return Contour::default();
        };

        let mut pieces = Vec::with_capacity(ib.saturating_sub(ia) + 1);
        if ia == ib {
            pieces.push(self.pieces[ia].sub(sa, sb));
        } else {
            pieces.push(self.pieces[ia].sub(sa, 1.0));
            pieces.extend_from_slice(&self.pieces[ia + 1..ib]);
            pieces.push(self.pieces[ib].sub(0.0, sb));
        }
        pieces.retain(|piece| piece.length() >= PRECISION);
        Contour::new(pieces, false)
    }

    /// Concatenates two contours into an open contour.
    ///
    /// A gap between the end of `self` and the start of `other` is bridged
    /// with a line; an arc continuing on the same circle is merged into the
    /// preceding arc.
    #[must_use]
    pub fn concat(&self, other: &Contour) -> Contour {
        let mut pieces = self.pieces.clone();
        let mut rest = other.pieces.iter().copied();
        if let Some(first) = rest.next() {
            match (pieces.last().copied(), first) {
                (None, _) => pieces.push(first),
                (Some(Piece::Arc(prev)), Piece::Arc(next)) if prev.continues_into(&next) => {
                    let merged = prev.extended(next.sweep());
                    if let Some(last) = pieces.last_mut() {
                        *last = Piece::Arc(merged);
                    }
                }
                (Some(prev), _) => {
                    let (from, to) = (prev.end_point(), first.start_point());
                    if (to - from).norm() >= PRECISION {
                        pieces.push(Piece::Line(LineSegment::new(from, to)));
                    }
                    pieces.push(first);
                }
            }
        }
        pieces.extend(rest);
        Contour::new(pieces, false)
    }

    /// Closes the contour, adding a line back to the start if needed.
    #[must_use]
    pub fn close(&self) -> Contour {
        let mut pieces = self.pieces.clone();
        if let (Some(start), Some(end)) = (self.start(), self.end()) {
            if (start - end).norm() >= PRECISION {
                pieces.push(Piece::Line(LineSegment::new(end, start)));
            }
        }
        Contour::new(pieces, true)
    }

    /// The same contour walked in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Contour {
        let pieces = self.pieces.iter().rev().map(Piece::reversed).collect();
        Contour::new(pieces, self.closed)
    }

    /// Returns `true` if `p` lies strictly inside a closed contour.
    ///
    /// Open contours contain nothing.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        if !self.closed {
            return false;
        }
        self.pieces
            .iter()
            .fold(false, |inside, piece| inside != piece.ray_crossings_odd(p))
    }

    /// All points where a piece of `self` meets a piece of `other`.
    #[must_use]
    pub fn intersections(&self, other: &Contour) -> Vec<Point2> {
        self.pieces
            .iter()
            .flat_map(|a| other.pieces.iter().flat_map(move |b| a.intersections(b)))
            .collect()
    }

    /// Returns `true` if the contours cross, or if either one's start point
    /// lies inside the other.
    #[must_use]
    pub fn overlaps(&self, other: &Contour) -> bool {
        if !self.intersections(other).is_empty() {
            return true;
        }
        let self_in_other = self.start().is_some_and(|p| other.contains(&p));
        let other_in_self = other.start().is_some_and(|p| self.contains(&p));
        self_in_other || other_in_self
    }

    /// Returns `true` if no two pieces meet except consecutive pieces at
    /// their shared joint.
    #[must_use]
    pub fn is_simple(&self) -> bool {
        let n = self.pieces.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let joint = if j == i + 1 {
                    Some(self.pieces[i].end_point())
                } else if self.closed && i == 0 && j == n - 1 {
                    Some(self.pieces[0].start_point())
                } else {
                    None
                };
                let crossing = self.pieces[i]
                    .intersections(&self.pieces[j])
                    .into_iter()
                    .any(|p| joint.map_or(true, |q| (p - q).norm() > JOINT_TOLERANCE));
                if crossing {
                    return false;
                }
            }
        }
        true
    }

    /// Flattens the contour into a polyline.
    ///
    /// `tolerance` bounds the deviation between each arc and its chords. The
    /// start point of a closed contour is not repeated at the end.
    #[must_use]
    pub fn to_points(&self, tolerance: f64) -> Vec<Point2> {
        let Some(first) = self.start() else {
            return Vec::new();
        };
        let mut points = Vec::with_capacity(self.pieces.len() * 2);
        points.push(first);
        for piece in &self.pieces {
            if let Piece::Arc(arc) = piece {
                let n_sub = arc.subdivision_count(tolerance);
                for j in 1..n_sub {
                    points.push(arc.point_at(f64::from(j) / f64::from(n_sub)));
                }
            }
            points.push(piece.end_point());
        }
        if self.closed && points.len() > 1 {
            points.pop();
        }
        points
    }

    /// Maps `t` to `(piece index, local parameter)`.
    ///
    /// At a joint between two pieces, `prefer_next` picks the later piece.
    /// Zero-length pieces are never selected.
    fn locate(&self, t: f64, prefer_next: bool) -> Option<(usize, f64)> {
        let last = self.pieces.iter().rposition(|p| p.length() > 0.0)?;
        let total = self.length();
        let target = t.clamp(0.0, 1.0) * total;
        let mut before = 0.0;
        for (i, &after) in self.cumulative.iter().enumerate() {
            let len = after - before;
            let inside = if prefer_next {
                target < after
            } else {
                target <= after
            };
            if inside && len > 0.0 {
                return Some((i, ((target - before) / len).clamp(0.0, 1.0)));
            }
            before = after;
        }
        Some((last, 1.0))
    }
}

impl Add for Contour {
    type Output = Contour;

    fn add(self, rhs: Contour) -> Self::Output {
        self.concat(&rhs)
    }
}

impl Add<&Contour> for &Contour {
    type Output = Contour;

    fn add(self, rhs: &Contour) -> Self::Output {
        self.concat(rhs)
    }
}
