use std::collections::BTreeMap;

use slotmap::SlotMap;

use crate::error::IslandError;
use crate::math::{Point2, Positioned};

slotmap::new_key_type! {
    /// Unique identifier for a point in a [`PointSet`].
    pub struct PointId;
}

/// A labeled input point.
///
/// `kind` is the color/type label that decides island membership. A point
/// produced by a transformation (e.g. rotation) refers back to its source
/// through `original`, an id into the source [`PointSet`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub position: Point2,
    pub kind: i32,
    pub original: Option<PointId>,
}

impl Point {
    /// Creates an untransformed point.
    #[must_use]
    pub fn new(position: Point2, kind: i32) -> Self {
        Self {
            position,
            kind,
            original: None,
        }
    }

    /// Creates a transformed copy of the point stored under `original`.
    #[must_use]
    pub fn derived(position: Point2, kind: i32, original: PointId) -> Self {
        Self {
            position,
            kind,
            original: Some(original),
        }
    }
}

impl Positioned for Point {
    fn position(&self) -> Point2 {
        self.position
    }
}

/// Arena owning a collection of points.
///
/// Iteration follows insertion order; points are never removed.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    points: SlotMap<PointId, Point>,
}

impl PointSet {
    /// Creates a new, empty point set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty point set with room for `capacity` points.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Inserts a point and returns its ID.
    pub fn insert(&mut self, point: Point) -> PointId {
        self.points.insert(point)
    }

    /// Returns a reference to the point, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`IslandError::PointNotFound`] if `id` does not belong to this set.
    pub fn get(&self, id: PointId) -> Result<&Point, IslandError> {
        self.points.get(id).ok_or(IslandError::PointNotFound)
    }

    /// Number of points in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the set holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over `(id, point)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PointId, &Point)> {
        self.points.iter()
    }

    /// Copies out every point in insertion order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Point> {
        self.points.values().copied().collect()
    }

    /// Splits the set into per-type point lists, ordered by type label.
    #[must_use]
    pub fn group_by_kind(&self) -> BTreeMap<i32, Vec<Point>> {
        let mut groups: BTreeMap<i32, Vec<Point>> = BTreeMap::new();
        for point in self.points.values() {
            groups.entry(point.kind).or_default().push(*point);
        }
        groups
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut set = Self::new();
        for point in iter {
            set.insert(point);
        }
        set
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut set = PointSet::new();
        let id = set.insert(Point::new(Point2::new(1.0, 2.0), 7));
        let p = set.get(id).unwrap();
        assert_eq!(p.position, Point2::new(1.0, 2.0));
        assert_eq!(p.kind, 7);
        assert!(p.original.is_none());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn foreign_id_is_not_found() {
        let mut other = PointSet::new();
        other.insert(Point::new(Point2::origin(), 0));
        let foreign = other.insert(Point::new(Point2::new(1.0, 1.0), 0));

        let mut set = PointSet::new();
        set.insert(Point::new(Point2::origin(), 0));
        assert!(matches!(set.get(foreign), Err(IslandError::PointNotFound)));
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let set: PointSet = (0..5)
            .map(|i| Point::new(Point2::new(f64::from(i), 0.0), i))
            .collect();
        let kinds: Vec<i32> = set.iter().map(|(_, p)| p.kind).collect();
        assert_eq!(kinds, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn group_by_kind_splits_labels() {
        let set: PointSet = [
            Point::new(Point2::new(0.0, 0.0), 1),
            Point::new(Point2::new(1.0, 0.0), 0),
            Point::new(Point2::new(2.0, 0.0), 1),
        ]
        .into_iter()
        .collect();
        let groups = set.group_by_kind();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&0].len(), 1);
        assert_eq!(groups[&1].len(), 2);
        assert_eq!(groups[&1][1].position, Point2::new(2.0, 0.0));
    }
}
