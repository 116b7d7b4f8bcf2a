use std::f64::consts::{PI, TAU};

use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::angle_to_arc_param;
use crate::math::{orientation, Point2, Vector2, PRECISION};

use super::Circle;

/// A circular arc in center-radius-angle form.
///
/// `P(s) = center + radius * (cos θ, sin θ)` with `θ = start_angle + sweep * s`
/// for `s` in `[0, 1]`. A negative sweep runs clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    center: Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
}

impl Arc {
    /// Creates a new arc. `sweep` is clamped to `[-2π, 2π]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not a positive finite number.
    pub fn new(center: Point2, radius: f64, start_angle: f64, sweep: f64) -> Result<Self> {
        if !radius.is_finite() || radius < PRECISION {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }
        Ok(Self::from_parts(center, radius, start_angle, sweep))
    }

    /// Arc along an existing circle, starting at `start_angle`.
    #[must_use]
    pub fn on_circle(circle: &Circle, start_angle: f64, sweep: f64) -> Self {
        Self::from_parts(*circle.center(), circle.radius(), start_angle, sweep)
    }

    fn from_parts(center: Point2, radius: f64, start_angle: f64, sweep: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            sweep: sweep.clamp(-TAU, TAU),
        }
    }

    /// Returns the center of the supporting circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the angle of the start point, in radians.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Signed sweep in radians; negative is clockwise.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    /// Returns the angle of the end point, `start_angle + sweep`.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep
    }

    /// Returns the arc length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius * self.sweep.abs()
    }

    /// Returns `true` if the arc sweeps the whole circle.
    #[must_use]
    pub fn is_full_circle(&self) -> bool {
        (self.sweep.abs() - TAU).abs() < PRECISION
    }

    /// Point at parameter `s`; not clamped.
    #[must_use]
    pub fn point_at(&self, s: f64) -> Point2 {
        let angle = self.start_angle + self.sweep * s;
        self.center + Vector2::new(angle.cos(), angle.sin()) * self.radius
    }

    /// Returns the start point of the arc.
    #[must_use]
    pub fn start_point(&self) -> Point2 {
        self.point_at(0.0)
    }

    /// Returns the end point of the arc.
    #[must_use]
    pub fn end_point(&self) -> Point2 {
        self.point_at(1.0)
    }

    /// Closest point of the arc to `p`, with its parameter.
    ///
    /// Inside the arc's angular range this is the radial projection; outside
    /// it, the nearer endpoint.
    #[must_use]
    pub fn nearest(&self, p: &Point2) -> (f64, Point2) {
        let d = p - self.center;
        if d.norm() >= PRECISION {
            if let Some(s) = angle_to_arc_param(d.y.atan2(d.x), self.start_angle, self.sweep) {
                return (s, self.point_at(s));
            }
        }
        let (p0, p1) = (self.start_point(), self.end_point());
        if (p - p0).norm_squared() <= (p - p1).norm_squared() {
            (0.0, p0)
        } else {
            (1.0, p1)
        }
    }

    /// The part of the arc between parameters `s0` and `s1`.
    #[must_use]
    pub fn sub(&self, s0: f64, s1: f64) -> Self {
        Self::from_parts(
            self.center,
            self.radius,
            self.start_angle + self.sweep * s0,
            self.sweep * (s1 - s0),
        )
    }

    /// The same arc traversed from end to start.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::from_parts(self.center, self.radius, self.end_angle(), -self.sweep)
    }

    /// The arc extended by `extra` radians of sweep past its end.
    #[must_use]
    pub fn extended(&self, extra: f64) -> Self {
        Self::from_parts(self.center, self.radius, self.start_angle, self.sweep + extra)
    }

    /// Returns `true` if `other` lies on the same circle and starts where
    /// `self` ends, turning the same way.
    #[must_use]
    pub fn continues_into(&self, other: &Arc) -> bool {
        (self.center - other.center).norm() < PRECISION
            && (self.radius - other.radius).abs() < PRECISION
            && self.sweep.signum() == other.sweep.signum()
            && (self.end_point() - other.start_point()).norm() < PRECISION
            && (self.sweep + other.sweep).abs() <= TAU + PRECISION
    }

    /// Returns `true` if `p` lies strictly inside the region bounded by the
    /// arc and its chord.
    #[must_use]
    pub fn region_contains(&self, p: &Point2) -> bool {
        if (p - self.center).norm() >= self.radius {
            return false;
        }
        if self.is_full_circle() {
            return true;
        }
        let (p0, p1) = (self.start_point(), self.end_point());
        let mid = self.point_at(0.5);
        let side = orientation(&p0, &p1, &mid);
        side == orientation(&p0, &p1, p)
    }

    /// Number of chords needed to stay within `tolerance` of the arc.
    #[must_use]
    pub fn subdivision_count(&self, tolerance: f64) -> u32 {
        let abs_sweep = self.sweep.abs();
        if self.radius < PRECISION || abs_sweep < PRECISION || tolerance <= 0.0 {
            return 1;
        }
        // Sagitta: s = r * (1 - cos(θ/2))  =>  θ = 2 * acos(1 - s/r)
        let max_angle = if tolerance >= self.radius {
            PI
        } else {
            2.0 * (1.0 - tolerance / self.radius).acos()
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = (abs_sweep / max_angle).ceil() as u32;
        n.max(1)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const TOL: f64 = 1e-10;

    fn quarter_cw() -> Arc {
        // From (0, 1) clockwise to (1, 0).
        Arc::new(Point2::origin(), 1.0, FRAC_PI_2, -FRAC_PI_2).unwrap()
    }

    #[test]
    fn endpoints_and_length() {
        let arc = quarter_cw();
        assert!((arc.start_point() - Point2::new(0.0, 1.0)).norm() < TOL);
        assert!((arc.end_point() - Point2::new(1.0, 0.0)).norm() < TOL);
        assert!((arc.length() - FRAC_PI_2).abs() < TOL);
    }

    #[test]
    fn nearest_inside_range_projects_radially() {
        let arc = quarter_cw();
        let (s, p) = arc.nearest(&Point2::new(3.0, 3.0));
        assert!((s - 0.5).abs() < TOL);
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert!((p - Point2::new(h, h)).norm() < TOL);
    }

    #[test]
    fn nearest_outside_range_picks_endpoint() {
        let arc = quarter_cw();
        let (s, _) = arc.nearest(&Point2::new(-1.0, 0.5));
        assert!(s.abs() < TOL);
        let (s, _) = arc.nearest(&Point2::new(0.5, -2.0));
        assert!((s - 1.0).abs() < TOL);
    }

    #[test]
    fn sub_arc_keeps_direction() {
        let arc = quarter_cw();
        let part = arc.sub(0.5, 1.0);
        assert!((part.sweep() + FRAC_PI_2 / 2.0).abs() < TOL);
        assert!((part.end_point() - arc.end_point()).norm() < TOL);
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let arc = quarter_cw();
        let rev = arc.reversed();
        assert!((rev.start_point() - arc.end_point()).norm() < TOL);
        assert!((rev.end_point() - arc.start_point()).norm() < TOL);
    }

    #[test]
    fn continuation_on_same_circle() {
        let arc = quarter_cw();
        let next = Arc::new(Point2::origin(), 1.0, 0.0, -FRAC_PI_2).unwrap();
        assert!(arc.continues_into(&next));
        assert!(!next.continues_into(&arc));
        let other_way = Arc::new(Point2::origin(), 1.0, 0.0, FRAC_PI_2).unwrap();
        assert!(!arc.continues_into(&other_way));
    }

    #[test]
    fn region_between_arc_and_chord() {
        let arc = quarter_cw();
        assert!(arc.region_contains(&Point2::new(0.6, 0.6)));
        assert!(!arc.region_contains(&Point2::new(0.2, 0.2)));
        assert!(!arc.region_contains(&Point2::new(2.0, 2.0)));
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        assert!(Arc::new(Point2::origin(), 0.0, 0.0, PI).is_err());
        assert!(Arc::new(Point2::origin(), -1.0, 0.0, PI).is_err());
        assert!(Arc::new(Point2::origin(), f64::NAN, 0.0, PI).is_err());

        let circle = Circle::new(Point2::new(1.0, 2.0), 3.0).unwrap();
        let arc = Arc::on_circle(&circle, 0.0, -TAU);
        assert!(arc.is_full_circle());
        assert!((arc.radius() - 3.0).abs() < TOL);
    }

    #[test]
    fn subdivision_count_tightens_with_tolerance() {
        let half = Arc::new(Point2::origin(), 1.0, 0.0, PI).unwrap();
        assert_eq!(half.subdivision_count(10.0), 1);
        assert!(half.subdivision_count(0.001) > 10);
    }
}
