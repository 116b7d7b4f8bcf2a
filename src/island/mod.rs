//! Islands: rounded regions grown around groups of same-typed points.
//!
//! An island's boundary is the Minkowski sum of its anchor points (a single
//! point, a convex hull or a path) with a disk of the expansion radius. All
//! geometry is built once at construction; islands are immutable afterwards.

pub mod bend;
pub mod convex;
pub mod outline;
pub mod point;
pub mod store;

pub use bend::BendIsland;
pub use convex::ConvexIsland;
pub use outline::AnchoredArc;
pub use point::PointIsland;
pub use store::{IslandId, IslandStore, Visibility};

use crate::error::{IslandError, Result};
use crate::geometry::{Arc, Circle, Contour, LineSegment, Point};
use crate::math::{Point2, PRECISION};

/// Which construction an [`Island`] was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IslandVariant {
    Point,
    Convex,
    Bend,
}

/// One piece of an island boundary, as seen by the visibility computation.
#[derive(Debug, Clone, Copy)]
pub enum BoundaryPiece<'a> {
    /// A whole circle (point islands and collapsed hulls or paths).
    Circle(&'a Circle),
    /// A sub-arc of one anchor circle.
    CircleArc { circle: &'a Circle, arc: &'a Arc },
    /// A straight connecting segment between two arcs.
    Segment(&'a LineSegment),
}

/// A rounded island around one or more points of the same type.
#[derive(Debug, Clone)]
pub enum Island {
    Point(PointIsland),
    Convex(ConvexIsland),
    Bend(BendIsland),
}

impl Island {
    /// Builds a point island: a single circle around `point`.
    ///
    /// # Errors
    ///
    /// Returns [`IslandError::InvalidRadius`] if `radius` is not a positive
    /// finite number.
    pub fn point(point: Point, radius: f64) -> Result<Self> {
        check_radius(radius)?;
        let island = Self::Point(PointIsland::build(point, radius)?);
        island.log_built();
        Ok(island)
    }

    /// Builds a convex island: the rounded convex hull of `points`.
    ///
    /// # Errors
    ///
    /// Returns an error if `points` is empty, mixes point types, or `radius`
    /// is not a positive finite number.
    pub fn convex(points: &[Point], radius: f64) -> Result<Self> {
        check_points(points)?;
        check_radius(radius)?;
        let island = Self::Convex(ConvexIsland::build(points.to_vec(), radius)?);
        island.log_built();
        Ok(island)
    }

    /// Builds a bend island: the rounded stroke of the path through `points`.
    ///
    /// # Errors
    ///
    /// Returns an error if `points` is empty, mixes point types, `radius` is
    /// not a positive finite number, or `radius` is too large for the path's
    /// inner corners.
    pub fn bend(points: &[Point], radius: f64) -> Result<Self> {
        check_points(points)?;
        check_radius(radius)?;
        let island = Self::Bend(BendIsland::build(points.to_vec(), radius)?);
        island.log_built();
        Ok(island)
    }

    /// Returns which construction built the island.
    #[must_use]
    pub fn variant(&self) -> IslandVariant {
        match self {
            Self::Point(_) => IslandVariant::Point,
            Self::Convex(_) => IslandVariant::Convex,
            Self::Bend(_) => IslandVariant::Bend,
        }
    }

    /// Type label shared by all points of the island.
    #[must_use]
    pub fn kind(&self) -> i32 {
        match self {
            Self::Point(island) => island.point().kind,
            Self::Convex(island) => island.points()[0].kind,
            Self::Bend(island) => island.path()[0].kind,
        }
    }

    /// Points the circles are centered on, in boundary order.
    #[must_use]
    pub fn anchors(&self) -> &[Point] {
        match self {
            Self::Point(island) => std::slice::from_ref(island.point()),
            Self::Convex(island) => island.hull(),
            Self::Bend(island) => island.path(),
        }
    }

    /// One circle per anchor, in anchor order.
    #[must_use]
    pub fn circles(&self) -> &[Circle] {
        match self {
            Self::Point(island) => island.circles(),
            Self::Convex(island) => island.circles(),
            Self::Bend(island) => island.circles(),
        }
    }

    /// Closed clockwise boundary.
    #[must_use]
    pub fn contour(&self) -> &Contour {
        match self {
            Self::Point(island) => island.contour(),
            Self::Convex(island) => island.contour(),
            Self::Bend(island) => island.contour(),
        }
    }

    /// Returns the expansion radius shared by all circles.
    #[must_use]
    pub fn expand_radius(&self) -> f64 {
        self.circles()[0].radius()
    }

    /// Boundary pieces: every anchored arc with its circle, then every
    /// connecting segment. An island without arcs yields its single circle.
    #[must_use]
    pub fn pieces(&self) -> Vec<BoundaryPiece<'_>> {
        let (circles, arcs, segments) = match self {
            Self::Point(island) => return vec![BoundaryPiece::Circle(island.circle())],
            Self::Convex(island) => (island.circles(), island.arcs(), island.segments()),
            Self::Bend(island) => (island.circles(), island.arcs(), island.segments()),
        };
        if arcs.is_empty() && segments.is_empty() {
            return circles.iter().map(BoundaryPiece::Circle).collect();
        }
        arcs.iter()
            .map(|anchored| BoundaryPiece::CircleArc {
                circle: &circles[anchored.anchor],
                arc: &anchored.arc,
            })
            .chain(segments.iter().map(BoundaryPiece::Segment))
            .collect()
    }

    /// Whether `p` lies inside the island or on its boundary.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        self.circles().iter().any(|c| c.contains(p)) || self.contour().contains(p)
    }

    /// Whether the boundaries of the two islands cross or one lies inside
    /// the other.
    #[must_use]
    pub fn overlaps(&self, other: &Island) -> bool {
        self.contour().overlaps(other.contour())
    }

    /// Parts of this island's boundary visible from `other`.
    ///
    /// Empty when `other` is this very island.
    #[must_use]
    pub fn visibility_contours(&self, other: &Island) -> Vec<Contour> {
        if std::ptr::eq(self, other) {
            return Vec::new();
        }
        crate::visibility::visibility_contours(self, other)
    }

    fn log_built(&self) {
        tracing::debug!(
            variant = ?self.variant(),
            kind = self.kind(),
            anchors = self.anchors().len(),
            pieces = self.contour().pieces().len(),
            "island built"
        );
    }
}

/// Expansion radius shared by the islands of one group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IslandConfig {
    expand_radius: f64,
}

impl IslandConfig {
    /// # Errors
    ///
    /// Returns [`IslandError::InvalidRadius`] if `expand_radius` is not a
    /// positive finite number.
    pub fn new(expand_radius: f64) -> Result<Self> {
        check_radius(expand_radius)?;
        Ok(Self { expand_radius })
    }

    /// Returns the configured expansion radius.
    #[must_use]
    pub fn expand_radius(&self) -> f64 {
        self.expand_radius
    }

    /// # Errors
    ///
    /// See [`Island::point`].
    pub fn point_island(&self, point: Point) -> Result<Island> {
        Island::point(point, self.expand_radius)
    }

    /// # Errors
    ///
    /// See [`Island::convex`].
    pub fn convex_island(&self, points: &[Point]) -> Result<Island> {
        Island::convex(points, self.expand_radius)
    }

    /// # Errors
    ///
    /// See [`Island::bend`].
    pub fn bend_island(&self, points: &[Point]) -> Result<Island> {
        Island::bend(points, self.expand_radius)
    }
}

fn check_radius(radius: f64) -> Result<()> {
    if !radius.is_finite() || radius <= PRECISION {
        return Err(IslandError::InvalidRadius(radius).into());
    }
    Ok(())
}

fn check_points(points: &[Point]) -> Result<()> {
    let Some(first) = points.first() else {
        return Err(IslandError::EmptyPointSet.into());
    };
    if let Some(odd) = points.iter().find(|p| p.kind != first.kind) {
        return Err(IslandError::MixedTypes {
            expected: first.kind,
            found: odd.kind,
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ArchipelagoError;
    use approx::assert_relative_eq;
    use std::f64::consts::{PI, TAU};

    fn pts(kind: i32, coords: &[(f64, f64)]) -> Vec<Point> {
        coords
            .iter()
            .map(|&(x, y)| Point::new(Point2::new(x, y), kind))
            .collect()
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            Island::convex(&[], 1.0),
            Err(ArchipelagoError::Island(IslandError::EmptyPointSet))
        ));
        assert!(matches!(
            Island::point(Point::new(Point2::origin(), 0), 0.0),
            Err(ArchipelagoError::Island(IslandError::InvalidRadius(_)))
        ));
        assert!(matches!(
            IslandConfig::new(f64::NAN),
            Err(ArchipelagoError::Island(IslandError::InvalidRadius(_)))
        ));
        let mut mixed = pts(0, &[(0.0, 0.0), (1.0, 0.0)]);
        mixed.push(Point::new(Point2::new(2.0, 2.0), 3));
        assert!(matches!(
            Island::bend(&mixed, 1.0),
            Err(ArchipelagoError::Island(IslandError::MixedTypes {
                expected: 0,
                found: 3
            }))
        ));
    }

    #[test]
    fn point_island_is_one_circle() {
        let island = Island::point(Point::new(Point2::new(2.0, 3.0), 7), 1.5).unwrap();
        assert_eq!(island.variant(), IslandVariant::Point);
        assert_eq!(island.kind(), 7);
        assert_eq!(island.circles().len(), 1);
        assert_relative_eq!(island.expand_radius(), 1.5);
        assert_relative_eq!(island.contour().length(), TAU * 1.5, epsilon = 1e-9);
        assert!(matches!(island.pieces()[..], [BoundaryPiece::Circle(_)]));
    }

    #[test]
    fn convex_square_pieces() {
        let points = pts(
            2,
            &[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (2.0, 2.0)],
        );
        let island = Island::convex(&points, 1.0).unwrap();
        assert_eq!(island.anchors().len(), 4);
        assert_eq!(island.circles().len(), 4);
        let pieces = island.pieces();
        let arcs = pieces
            .iter()
            .filter(|p| matches!(p, BoundaryPiece::CircleArc { .. }))
            .count();
        let segments = pieces
            .iter()
            .filter(|p| matches!(p, BoundaryPiece::Segment(_)))
            .count();
        assert_eq!((arcs, segments), (4, 4));
        assert_relative_eq!(island.contour().length(), 16.0 + TAU, epsilon = 1e-9);
        for p in &points {
            assert!(island.contains(&p.position));
        }
        assert!(!island.contains(&Point2::new(5.5, 2.0)));
    }

    #[test]
    fn arc_pieces_pair_with_their_anchor_circle() {
        let points = pts(0, &[(0.0, 0.0), (6.0, 1.0), (3.0, 5.0)]);
        let island = Island::convex(&points, 0.5).unwrap();
        for piece in island.pieces() {
            if let BoundaryPiece::CircleArc { circle, arc } = piece {
                assert!((circle.center() - arc.center()).norm() < 1e-12);
            }
        }
    }

    #[test]
    fn coincident_points_collapse_to_circle() {
        let points = pts(1, &[(3.0, 3.0), (3.0, 3.0)]);
        let island = Island::convex(&points, 2.0).unwrap();
        assert_eq!(island.circles().len(), 1);
        assert!(matches!(island.pieces()[..], [BoundaryPiece::Circle(_)]));
        assert_relative_eq!(island.contour().length(), TAU * 2.0, epsilon = 1e-9);
    }

    #[test]
    fn bend_around_a_corner() {
        let points = pts(4, &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        let island = Island::bend(&points, 1.0).unwrap();
        assert_eq!(island.variant(), IslandVariant::Bend);
        assert_eq!(island.circles().len(), 3);
        let Island::Bend(bend) = &island else {
            panic!("expected bend island");
        };
        // Two end caps and the outer corner.
        assert_eq!(bend.arcs().len(), 3);
        assert_eq!(bend.segments().len(), 4);
        let caps = bend
            .arcs()
            .iter()
            .filter(|a| (a.arc.sweep() + PI).abs() < 1e-9)
            .count();
        assert_eq!(caps, 2);
        assert!(island.contour().is_closed());
        assert!(island.contour().is_simple());
        assert!(island.contains(&Point2::new(5.0, 0.5)));
        assert!(island.contains(&Point2::new(10.5, 5.0)));
        assert!(!island.contains(&Point2::new(5.0, 5.0)));
    }

    #[test]
    fn bend_pieces_follow_the_stroke() {
        let points = pts(1, &[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        let island = Island::bend(&points, 1.0).unwrap();
        let Island::Bend(bend) = &island else {
            panic!("expected bend island");
        };
        assert_eq!(bend.circles().len(), 4);
        // Caps at both ends and the outer side of the one turn; the straight
        // vertex at (5, 0) carries no arc.
        assert_eq!(bend.arcs().len(), 3);
        assert!(bend.arcs().iter().all(|a| a.anchor != 1));
        // Each leg is walked out and back.
        assert_eq!(bend.segments().len(), 6);

        let pieces = island.pieces();
        assert_eq!(pieces.len(), 9);
        for piece in &pieces {
            if let BoundaryPiece::CircleArc { circle, arc } = piece {
                assert!((circle.center() - arc.center()).norm() < 1e-12);
            }
        }
    }

    #[test]
    fn straight_bend_is_a_stadium() {
        let points = pts(0, &[(0.0, 0.0), (5.0, 0.0), (5.0, 0.0), (10.0, 0.0)]);
        let island = Island::bend(&points, 1.0).unwrap();
        assert_eq!(island.anchors().len(), 3);
        assert_relative_eq!(island.contour().length(), 20.0 + TAU, epsilon = 1e-9);
    }

    #[test]
    fn config_builds_each_variant() {
        let config = IslandConfig::new(0.75).unwrap();
        let points = pts(0, &[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0)]);
        let a = config.point_island(points[0]).unwrap();
        let b = config.convex_island(&points).unwrap();
        let c = config
            .bend_island(&pts(0, &[(2.0, -3.0), (2.0, 6.0)]))
            .unwrap();
        for island in [&a, &b, &c] {
            assert_relative_eq!(island.expand_radius(), 0.75);
        }
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn separated_islands_do_not_overlap() {
        let a = Island::point(Point::new(Point2::new(0.0, 0.0), 0), 1.0).unwrap();
        let b = Island::point(Point::new(Point2::new(5.0, 0.0), 0), 1.0).unwrap();
        assert!(!a.overlaps(&b));
        assert!(a.visibility_contours(&a).is_empty());
    }
}
