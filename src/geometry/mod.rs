pub mod arc;
pub mod circle;
pub mod contour;
pub mod point;
pub mod segment;

pub use arc::Arc;
pub use circle::Circle;
pub use contour::{Contour, ContourPoint, Piece};
pub use point::{Point, PointId, PointSet};
pub use segment::LineSegment;
