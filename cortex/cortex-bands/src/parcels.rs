//! Parcel counting: connected regions sharing a dominant-band label.
//!
//! A parcel is a maximal set of vertices that carry the same label and
//! are mutually reachable through mesh edges. Connectivity comes from
//! [`VertexAdjacency`], never from label-array storage order: generic
//! run-length or image-style region labelling over the flat label array
//! finds storage runs, not surface regions, and silently miscounts.

use std::collections::VecDeque;

use cortex_surface::VertexAdjacency;
use hashbrown::HashMap;
use tracing::debug;

use crate::DominanceMap;

/// Count the connected parcels carrying one band label.
///
/// Breadth-first search over the adjacency graph restricted to vertices
/// with the target label; each unvisited root opens a new parcel. The
/// count depends only on the graph topology and the labels, so any
/// visitation order gives the same result. O(vertices + edges).
///
/// A label carried by no vertex yields 0, not an error.
///
/// # Example
///
/// ```
/// use cortex_surface::VertexAdjacency;
/// use cortex_bands::{count_parcels, DominanceMap};
///
/// // Two triangles sharing an edge; one labelled band 1, the other band 2
/// let adjacency = VertexAdjacency::build(4, &[[0, 1, 2], [1, 3, 2]]);
/// let map = DominanceMap::new(vec![1, 1, 1, 2]);
///
/// assert_eq!(count_parcels(&adjacency, &map, 1), 1);
/// assert_eq!(count_parcels(&adjacency, &map, 2), 1);
/// assert_eq!(count_parcels(&adjacency, &map, 3), 0);
/// ```
#[must_use]
pub fn count_parcels(adjacency: &VertexAdjacency, dominance: &DominanceMap, band: i32) -> usize {
    let labels = dominance.labels();
    let vertex_count = labels.len().min(adjacency.vertex_count());

    let mut visited = vec![false; vertex_count];
    let mut frontier: VecDeque<u32> = VecDeque::new();
    let mut parcels = 0usize;

    for root in 0..vertex_count {
        if visited[root] || labels[root] != band {
            continue;
        }

        parcels += 1;
        visited[root] = true;
        #[allow(clippy::cast_possible_truncation)]
        frontier.push_back(root as u32);

        while let Some(vertex) = frontier.pop_front() {
            for &neighbor in adjacency.neighbors(vertex) {
                let index = neighbor as usize;
                if index < vertex_count && !visited[index] && labels[index] == band {
                    visited[index] = true;
                    frontier.push_back(neighbor);
                }
            }
        }
    }

    parcels
}

/// Parcel counts for every distinct non-zero band in one pass each.
///
/// Returns a map from signed band label to parcel count; absent bands
/// are simply absent (their count is 0 by definition).
#[must_use]
pub fn parcels_per_band(
    adjacency: &VertexAdjacency,
    dominance: &DominanceMap,
) -> HashMap<i32, usize> {
    let bands = dominance.distinct_bands();
    debug!(bands = bands.len(), "counting parcels per band");

    bands
        .into_iter()
        .map(|band| (band, count_parcels(adjacency, dominance, band)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two triangle patches with no shared vertices.
    fn disjoint_patches() -> VertexAdjacency {
        VertexAdjacency::build(6, &[[0, 1, 2], [3, 4, 5]])
    }

    #[test]
    fn absent_band_counts_zero() {
        let adjacency = disjoint_patches();
        let map = DominanceMap::new(vec![1, 1, 1, 2, 2, 2]);
        assert_eq!(count_parcels(&adjacency, &map, 5), 0);
    }

    #[test]
    fn disjoint_patches_one_parcel_each() {
        let adjacency = disjoint_patches();
        let map = DominanceMap::new(vec![1, 1, 1, 2, 2, 2]);

        assert_eq!(count_parcels(&adjacency, &map, 1), 1);
        assert_eq!(count_parcels(&adjacency, &map, 2), 1);
    }

    #[test]
    fn same_label_across_disconnected_patches() {
        let adjacency = disjoint_patches();
        let map = DominanceMap::new(vec![1, 1, 1, 1, 1, 1]);

        // Same label, but the mesh itself is disconnected
        assert_eq!(count_parcels(&adjacency, &map, 1), 2);
    }

    #[test]
    fn label_break_splits_parcel() {
        // Chain of triangles: 0-1-2, 1-2-3, 2-3-4
        let adjacency = VertexAdjacency::build(5, &[[0, 1, 2], [1, 3, 2], [2, 3, 4]]);
        // Vertex 2 carries another band, cutting 0,1 off from 3,4?
        // 1 and 3 share an edge, so the band-1 region stays connected.
        let map = DominanceMap::new(vec![1, 1, 2, 1, 1]);
        assert_eq!(count_parcels(&adjacency, &map, 1), 1);

        // Cutting both middle vertices separates the ends.
        let map = DominanceMap::new(vec![1, 2, 2, 2, 1]);
        assert_eq!(count_parcels(&adjacency, &map, 1), 2);
    }

    #[test]
    fn storage_order_runs_are_not_parcels() {
        // Labels form one contiguous storage run, but vertices 0..2 and
        // 3..5 are not connected on the surface.
        let adjacency = disjoint_patches();
        let map = DominanceMap::new(vec![7, 7, 7, 7, 7, 7]);
        assert_eq!(count_parcels(&adjacency, &map, 7), 2);
    }

    #[test]
    fn count_invariant_under_vertex_permutation() {
        // Same surface with vertex storage reversed (v -> 5 - v) and the
        // face list reordered; labels permuted to match.
        let original = VertexAdjacency::build(6, &[[0, 1, 2], [3, 4, 5]]);
        let permuted = VertexAdjacency::build(6, &[[2, 1, 0], [5, 4, 3]]);

        let labels_original = DominanceMap::new(vec![1, 1, 2, 2, 2, 1]);
        let labels_permuted = DominanceMap::new(vec![1, 2, 2, 2, 1, 1]);

        for band in [1, 2] {
            assert_eq!(
                count_parcels(&original, &labels_original, band),
                count_parcels(&permuted, &labels_permuted, band),
            );
        }
    }

    #[test]
    fn negative_bands_are_distinct() {
        let adjacency = disjoint_patches();
        let map = DominanceMap::new(vec![-1, -1, -1, 1, 1, 1]);

        assert_eq!(count_parcels(&adjacency, &map, -1), 1);
        assert_eq!(count_parcels(&adjacency, &map, 1), 1);
    }

    #[test]
    fn per_band_counts() {
        let adjacency = disjoint_patches();
        let map = DominanceMap::new(vec![1, 1, 1, -2, -2, 0]);

        let counts = parcels_per_band(&adjacency, &map);
        assert_eq!(counts.get(&1), Some(&1));
        assert_eq!(counts.get(&-2), Some(&1));
        // Unassigned vertices are not a band
        assert_eq!(counts.get(&0), None);
    }
}
