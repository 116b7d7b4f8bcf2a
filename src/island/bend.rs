use crate::error::Result;
use crate::geometry::{Circle, Contour, LineSegment, Point};
use crate::math::PRECISION;

use super::outline::{rounded_outline, AnchoredArc};

/// An island following a path of same-typed points.
///
/// Anchors are the path points in order (consecutive duplicates dropped). The
/// boundary is the round-capped stroke of the path: the outline walks out
/// along one side and back along the other, so it carries a half-turn cap
/// arc at each end, one arc on the outer side of every interior turn and two
/// connecting segments per path leg. Arcs refer to their anchor by index.
#[derive(Debug, Clone)]
pub struct BendIsland {
    path: Vec<Point>,
    circles: Vec<Circle>,
    arcs: Vec<AnchoredArc>,
    segments: Vec<LineSegment>,
    contour: Contour,
}

impl BendIsland {
    /// Builds the island from a non-empty, single-typed path.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive, or
    /// [`crate::error::IslandError::RadiusTooLarge`] if the radius is too
    /// large for the path's inner corners.
    pub(crate) fn build(points: Vec<Point>, radius: f64) -> Result<Self> {
        let mut path = points;
        path.dedup_by(|a, b| (a.position - b.position).norm() < PRECISION);

        let circles = path
            .iter()
            .map(|p| Circle::new(p.position, radius))
            .collect::<Result<Vec<_>>>()?;

        let (arcs, segments, contour) = if path.len() == 1 {
            (Vec::new(), Vec::new(), circles[0].contour())
        } else {
            // Out along the path and back: p0 .. pk .. p1.
            let k = path.len() - 1;
            let anchors: Vec<usize> = (0..=k).chain((1..k).rev()).collect();
            let cycle: Vec<_> = anchors.iter().map(|&i| path[i].position).collect();
            let outline = rounded_outline(&cycle, &anchors, radius)?;
            (outline.arcs, outline.segments, outline.contour)
        };

        Ok(Self {
            path,
            circles,
            arcs,
            segments,
            contour,
        })
    }

    /// Path points in order (the anchors).
    #[must_use]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// One circle per path point, in path order.
    #[must_use]
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// End caps and outer-corner arcs, in outline order.
    #[must_use]
    pub fn arcs(&self) -> &[AnchoredArc] {
        &self.arcs
    }

    /// Connecting segments, two per path leg, in outline order.
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
