use slotmap::SlotMap;

use crate::error::IslandError;
use crate::geometry::Contour;

use super::Island;

slotmap::new_key_type! {
    /// Unique identifier for an island in an [`IslandStore`].
    pub struct IslandId;
}

/// Visible boundary of `from` as seen from `to`.
#[derive(Debug, Clone)]
pub struct Visibility {
    pub from: IslandId,
    pub to: IslandId,
    pub contours: Vec<Contour>,
}

/// Arena owning the islands of one scene.
///
/// Islands are referenced by [`IslandId`]; iteration follows insertion order.
#[derive(Debug, Default)]
pub struct IslandStore {
    islands: SlotMap<IslandId, Island>,
}

impl IslandStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an island and returns its ID.
    pub fn insert(&mut self, island: Island) -> IslandId {
        self.islands.insert(island)
    }

    /// Returns the island, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`IslandError::IslandNotFound`] for an unknown ID.
    pub fn get(&self, id: IslandId) -> Result<&Island, IslandError> {
        self.islands.get(id).ok_or(IslandError::IslandNotFound)
    }

    /// Returns the number of islands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.islands.len()
    }

    /// Returns `true` if the store holds no islands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.islands.is_empty()
    }

    /// Iterates over all islands with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (IslandId, &Island)> {
        self.islands.iter()
    }

    /// Parts of island `from`'s boundary visible from island `to`.
    ///
    /// # Errors
    ///
    /// Returns [`IslandError::IslandNotFound`] if either ID is unknown.
    pub fn visibility_contours(
        &self,
        from: IslandId,
        to: IslandId,
    ) -> Result<Vec<Contour>, IslandError> {
        let (a, b) = (self.get(from)?, self.get(to)?);
        Ok(a.visibility_contours(b))
    }

    /// Visibility for every ordered pair of distinct islands.
    #[must_use]
    pub fn all_visibility_contours(&self) -> Vec<Visibility> {
        let mut result = Vec::new();
        for (from, a) in &self.islands {
            for (to, b) in &self.islands {
                if from == to {
                    continue;
                }
                if a.overlaps(b) {
                    tracing::warn!(?from, ?to, "computing visibility between overlapping islands");
                }
                result.push(Visibility {
                    from,
                    to,
                    contours: a.visibility_contours(b),
                });
            }
        }
        result
    }

    /// Unordered pairs of islands whose regions overlap.
    #[must_use]
    pub fn overlapping_pairs(&self) -> Vec<(IslandId, IslandId)> {
        let entries: Vec<_> = self.islands.iter().collect();
        let mut pairs = Vec::new();
        for (i, &(id_a, a)) in entries.iter().enumerate() {
            for &(id_b, b) in &entries[i + 1..] {
                if a.overlaps(b) {
                    pairs.push((id_a, id_b));
                }
            }
        }
        pairs
    }
}
