use crate::error::Result;
use crate::geometry::{Circle, Contour, LineSegment, Point};
use crate::math::convex_hull;

use super::outline::{rounded_outline, AnchoredArc};

/// An island wrapping a set of same-typed points in their rounded convex hull.
///
/// Anchors are the clockwise hull vertices. `circles[i]`, `arcs[i]` and
/// `segments[i]` all belong to hull vertex `i`: the arc wraps the vertex and
/// the segment runs from it toward vertex `i + 1`. A hull that collapses to a
/// single point has one circle, no arcs and no segments.
#[derive(Debug, Clone)]
pub struct ConvexIsland {
    points: Vec<Point>,
    hull: Vec<Point>,
    circles: Vec<Circle>,
    arcs: Vec<AnchoredArc>,
    segments: Vec<LineSegment>,
    contour: Contour,
}

impl ConvexIsland {
    /// Builds the island from a non-empty, single-typed point list.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive.
    pub(crate) fn build(points: Vec<Point>, radius: f64) -> Result<Self> {
        let hull = convex_hull(&points);
        let circles = hull
            .iter()
            .map(|p| Circle::new(p.position, radius))
            .collect::<Result<Vec<_>>>()?;

        let (arcs, segments, contour) = if hull.len() == 1 {
            (Vec::new(), Vec::new(), circles[0].contour())
        } else {
            let cycle: Vec<_> = hull.iter().map(|p| p.position).collect();
            let anchors: Vec<usize> = (0..hull.len()).collect();
            let outline = rounded_outline(&cycle, &anchors, radius)?;
            (outline.arcs, outline.segments, outline.contour)
        };

        Ok(Self {
            points,
            hull,
            circles,
            arcs,
            segments,
            contour,
        })
    }

    /// The input points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Clockwise convex hull vertices (the anchors).
    #[must_use]
    pub fn hull(&self) -> &[Point] {
        &self.hull
    }

    /// One circle per hull vertex.
    #[must_use]
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// One arc per hull vertex.
    #[must_use]
    pub fn arcs(&self) -> &[AnchoredArc] {
        &self.arcs
    }

    /// One segment per hull edge.
    #[must_use]
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// Returns the closed clockwise boundary.
    #[must_use]
    pub fn contour(&self) -> &Contour {
        &self.contour
    }
}
