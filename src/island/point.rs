use crate::error::Result;
use crate::geometry::{Circle, Contour, Point};

/// An island around a single point: one circle, whose boundary is the contour.
#[derive(Debug, Clone)]
pub struct PointIsland {
    point: Point,
    circles: [Circle; 1],
    contour: Contour,
}

impl PointIsland {
    /// Builds the island.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive.
    pub(crate) fn build(point: Point, radius: f64) -> Result<Self> {
        let circle = Circle::new(point.position, radius)?;
        Ok(Self {
            point,
            circles: [circle],
            contour: circle.contour(),
        })
    }

    /// Returns the anchor point.
    #[must_use]
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Returns the circle around the anchor.
    #[must_use]
    pub fn circle(&self) -> &Circle {
        &self.circles[0]
    }

    /// The circle as a one-element slice.
    #[must_use]
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Returns the circle's clockwise boundary.
    #[must_use]
    pub fn contour(&self) -> &Contour {
        &self.contour
    }
}
