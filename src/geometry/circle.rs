use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::{rotate_vector, Point2, Vector2, PRECISION};

use super::{Arc, Contour};

/// A circle in the plane.
///
/// The boundary contour of a circle runs clockwise (y-up frame) and starts at
/// angle 0, so contour parameter `t` corresponds to angle `-t * 2π`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not a positive finite number.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < PRECISION {
            return Err(
                GeometryError::Degenerate("circle radius must be positive".into()).into(),
            );
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns `true` if `p` lies inside the circle or on its boundary.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        (p - self.center).norm() <= self.radius + PRECISION
    }

    /// Point on the circle at absolute `angle`.
    #[must_use]
    pub fn point_at_angle(&self, angle: f64) -> Point2 {
        self.center + Vector2::new(angle.cos(), angle.sin()) * self.radius
    }

    /// Tangent points of the circle as seen from the external point `v`.
    ///
    /// Returns `[ccw, cw]`: the touching point reached by turning
    /// counter-clockwise (resp. clockwise) around the center from the
    /// direction of `v`. Returns `None` when `v` lies inside or on the circle.
    #[must_use]
    pub fn tangent_points(&self, v: &Point2) -> Option<[Point2; 2]> {
        let to_v = v - self.center;
        let dist = to_v.norm();
        if dist <= self.radius + PRECISION {
            return None;
        }
        let half_angle = (self.radius / dist).acos();
        let radial = to_v / dist * self.radius;
        Some([
            self.center + rotate_vector(&radial, half_angle),
            self.center + rotate_vector(&radial, -half_angle),
        ])
    }

    /// Parameter of the point on the boundary contour closest to `p`.
    #[must_use]
    pub fn contour_parameter(&self, p: &Point2) -> f64 {
        let d = p - self.center;
        if d.norm() < PRECISION {
            return 0.0;
        }
        let t = (-d.y.atan2(d.x)).rem_euclid(TAU) / TAU;
        // rem_euclid may round up to exactly TAU.
        if t >= 1.0 {
            0.0
        } else {
            t
        }
    }

    /// The full clockwise boundary as a single arc.
    #[must_use]
    pub fn to_arc(&self) -> Arc {
        Arc::on_circle(self, 0.0, -TAU)
    }

    /// The closed boundary contour.
    #[must_use]
    pub fn contour(&self) -> Contour {
        Contour::from_arc(self.to_arc(), true)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const TOL: f64 = 1e-9;

    #[test]
    fn invalid_radius() {
        assert!(Circle::new(Point2::origin(), 0.0).is_err());
        assert!(Circle::new(Point2::origin(), -1.0).is_err());
        assert!(Circle::new(Point2::origin(), f64::NAN).is_err());
    }

    #[test]
    fn tangent_points_touch_circle() {
        let c = Circle::new(Point2::new(1.0, 1.0), 2.0).unwrap();
        let v = Point2::new(7.0, 3.0);
        let [ccw, cw] = c.tangent_points(&v).unwrap();
        for t in [ccw, cw] {
            assert!(((t - c.center()).norm() - 2.0).abs() < TOL);
            // Radius is perpendicular to the tangent line through v.
            assert!((t - c.center()).dot(&(v - t)).abs() < 1e-8);
        }
        let base = (v - c.center()).y.atan2((v - c.center()).x);
        let a_ccw = (ccw - c.center()).y.atan2((ccw - c.center()).x);
        let a_cw = (cw - c.center()).y.atan2((cw - c.center()).x);
        assert!(a_ccw > base);
        assert!(a_cw < base);
    }

    #[test]
    fn tangent_points_far_away_approach_quarter_turns() {
        let c = Circle::new(Point2::origin(), 1.0).unwrap();
        let [ccw, cw] = c.tangent_points(&Point2::new(1e6, 0.0)).unwrap();
        assert!(ccw.x.abs() < 1e-5 && (ccw.y - 1.0).abs() < 1e-9);
        assert!(cw.x.abs() < 1e-5 && (cw.y + 1.0).abs() < 1e-9);
    }

    #[test]
    fn tangent_points_from_inside_is_none() {
        let c = Circle::new(Point2::origin(), 1.0).unwrap();
        assert!(c.tangent_points(&Point2::new(0.5, 0.0)).is_none());
        assert!(c.tangent_points(&Point2::new(1.0, 0.0)).is_none());
    }

    #[test]
    fn contour_runs_clockwise() {
        let c = Circle::new(Point2::origin(), 5.0).unwrap();
        let contour = c.contour();
        assert!(contour.is_closed());
        let quarter = contour.point_at(0.25);
        assert!(quarter.x.abs() < TOL);
        assert!((quarter.y + 5.0).abs() < TOL);
        assert!((contour.length() - TAU * 5.0).abs() < TOL);
    }

    #[test]
    fn contour_parameter_matches_contour() {
        let c = Circle::new(Point2::new(2.0, -1.0), 3.0).unwrap();
        let p = c.point_at_angle(FRAC_PI_2);
        let t = c.contour_parameter(&p);
        assert!((t - 0.75).abs() < TOL);
        let back = c.contour().point_at(t);
        assert!((back - p).norm() < TOL);
    }
}
