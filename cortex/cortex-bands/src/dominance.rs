//! Per-vertex dominant-band labels.

use hashbrown::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The per-vertex dominant-band assignment of one surface.
///
/// One signed integer label per vertex, produced by the external
/// decomposition: negative labels are sulcal-dominant bands, positive
/// labels gyral-dominant bands, and 0 means no dominant band. The map is
/// read-only input; every statistic derived from it is a pure function.
///
/// # Example
///
/// ```
/// use cortex_bands::DominanceMap;
///
/// let map = DominanceMap::new(vec![1, 1, -2, 0, 1]);
/// assert_eq!(map.vertex_count_for(1), 3);
/// assert_eq!(map.distinct_bands(), vec![-2, 1]);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DominanceMap {
    labels: Vec<i32>,
}

impl DominanceMap {
    /// Label value meaning "no dominant band".
    pub const UNASSIGNED: i32 = 0;

    /// Wrap a per-vertex label array.
    #[inline]
    #[must_use]
    pub const fn new(labels: Vec<i32>) -> Self {
        Self { labels }
    }

    /// Number of labelled vertices.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check whether the map covers no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The raw label array.
    #[inline]
    #[must_use]
    pub fn labels(&self) -> &[i32] {
        &self.labels
    }

    /// Label of one vertex, if in range.
    #[inline]
    #[must_use]
    pub fn label(&self, vertex: u32) -> Option<i32> {
        self.labels.get(vertex as usize).copied()
    }

    /// The distinct non-zero band labels present, sorted ascending.
    #[must_use]
    pub fn distinct_bands(&self) -> Vec<i32> {
        let mut bands: Vec<i32> = self
            .labels
            .iter()
            .copied()
            .filter(|&label| label != Self::UNASSIGNED)
            .collect::<HashSet<i32>>()
            .into_iter()
            .collect();
        bands.sort_unstable();
        bands
    }

    /// Number of vertices carrying a given label.
    #[must_use]
    pub fn vertex_count_for(&self, band: i32) -> usize {
        self.labels.iter().filter(|&&label| label == band).count()
    }

    /// Boolean per-vertex mask for a given label.
    #[must_use]
    pub fn mask(&self, band: i32) -> Vec<bool> {
        self.labels.iter().map(|&label| label == band).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_bands_excludes_unassigned() {
        let map = DominanceMap::new(vec![0, 3, -1, 3, 0, -4]);
        assert_eq!(map.distinct_bands(), vec![-4, -1, 3]);
    }

    #[test]
    fn vertex_counts() {
        let map = DominanceMap::new(vec![2, 2, -2, 0]);
        assert_eq!(map.vertex_count_for(2), 2);
        assert_eq!(map.vertex_count_for(-2), 1);
        assert_eq!(map.vertex_count_for(DominanceMap::UNASSIGNED), 1);
        assert_eq!(map.vertex_count_for(7), 0);
    }

    #[test]
    fn mask_matches_labels() {
        let map = DominanceMap::new(vec![1, 0, 1]);
        assert_eq!(map.mask(1), vec![true, false, true]);
    }

    #[test]
    fn empty_map() {
        let map = DominanceMap::new(vec![]);
        assert!(map.is_empty());
        assert!(map.distinct_bands().is_empty());
    }
}
