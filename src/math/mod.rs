pub mod convex_hull;
pub mod intersect_2d;
pub mod projection;

pub use convex_hull::convex_hull;
pub use projection::{regular_projection, rotate_point, transform_points};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global numeric tolerance for orientation tests and interval degeneracy checks.
///
/// Coordinates are expected to be in the `1e-3 ..= 1e5` range; cross products
/// and normalized contour parameters below this magnitude are treated as zero.
pub const PRECISION: f64 = 1e-9;

/// Anything with a planar position, so hull and projection code can carry
/// labeled points through without losing their labels.
pub trait Positioned {
    fn position(&self) -> Point2;
}

impl Positioned for Point2 {
    fn position(&self) -> Point2 {
        *self
    }
}

/// Turn direction of a point triple `(p, q, r)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// `r` lies to the left of the directed line `p -> q` (counter-clockwise turn).
    Left,
    /// `r` lies to the right of the directed line `p -> q` (clockwise turn).
    Right,
    Collinear,
}

/// Classifies the turn `p -> q -> r` by the sign of `(q - p) x (r - p)`.
///
/// Cross products with magnitude below [`PRECISION`] count as collinear.
#[must_use]
pub fn orientation(p: &Point2, q: &Point2, r: &Point2) -> Orientation {
    let cross = cross_2d(&(q - p), &(r - p));
    if cross > PRECISION {
        Orientation::Left
    } else if cross < -PRECISION {
        Orientation::Right
    } else {
        Orientation::Collinear
    }
}

/// Z component of the 3D cross product of two planar vectors.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: &Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

/// Rotates a vector counter-clockwise by `angle` radians.
#[must_use]
pub fn rotate_vector(v: &Vector2, angle: f64) -> Vector2 {
    nalgebra::Rotation2::new(angle) * v
}

/// Signed angle from `a` to `b` in `(-pi, pi]`, positive when counter-clockwise.
#[must_use]
pub fn signed_angle(a: &Vector2, b: &Vector2) -> f64 {
    cross_2d(a, b).atan2(a.dot(b))
}
