use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::line_arc_intersect_2d;
use crate::math::{left_normal, Point2, Vector2, PRECISION};

use super::Circle;

/// A straight segment `start -> end`, parametrized linearly over `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    start: Point2,
    end: Point2,
}

impl LineSegment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the start point of the segment.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point of the segment.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    /// Unit direction from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] for a zero-length segment.
    pub fn unit_direction(&self) -> Result<Vector2> {
        let d = self.vector();
        let len = d.norm();
        if len < PRECISION {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(d / len)
    }

    /// Unit normal pointing to the left of the walking direction.
    ///
    /// On a clockwise boundary this is the outward normal.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] for a zero-length segment.
    pub fn left_normal(&self) -> Result<Vector2> {
        Ok(left_normal(&self.unit_direction()?))
    }

    /// Point at parameter `t`; not clamped.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.start + self.vector() * t
    }

    /// Closest point of the segment to `p`, with its parameter.
    #[must_use]
    pub fn nearest(&self, p: &Point2) -> (f64, Point2) {
        let d = self.vector();
        let len_sq = d.norm_squared();
        if len_sq < PRECISION * PRECISION {
            return (0.0, self.start);
        }
        let t = ((p - self.start).dot(&d) / len_sq).clamp(0.0, 1.0);
        (t, self.point_at(t))
    }

    /// The part of the segment between parameters `t0` and `t1`.
    #[must_use]
    pub fn sub(&self, t0: f64, t1: f64) -> Self {
        Self::new(self.point_at(t0), self.point_at(t1))
    }

    /// The same segment traversed from end to start.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Points where lines parallel to the segment touch `circle`.
    ///
    /// Returns `[left, right]`, the touching points on the left and right
    /// side of the walking direction. `None` for a zero-length segment.
    #[must_use]
    pub fn tangent_points(&self, circle: &Circle) -> Option<[Point2; 2]> {
        let normal = self.left_normal().ok()? * circle.radius();
        let center = circle.center();
        Some([center + normal, center - normal])
    }

    /// Points where the segment meets the circle, as `(point, t)` pairs.
    #[must_use]
    pub fn circle_intersections(&self, circle: &Circle) -> Vec<(Point2, f64)> {
        line_arc_intersect_2d(
            &self.start,
            &self.end,
            circle.center(),
            circle.radius(),
            0.0,
            std::f64::consts::TAU,
        )
        .into_iter()
        .map(|(p, t, _)| (p, t))
        .collect()
    }
}
