//! Vertex adjacency derived from the triangulation.
//!
//! Connectivity on an unstructured surface is defined by its faces, not
//! by vertex storage order. This module builds, once per mesh, the
//! vertex-to-vertex neighbourhood used by all connected-region analysis.

use hashbrown::HashSet;

use crate::SurfaceMesh;

/// Vertex-to-vertex connectivity of a triangulated surface.
///
/// Two vertices are neighbours when they appear together in some face.
/// The relation is symmetric by construction and independent of vertex
/// and face ordering: permuting the face list or relabelling storage
/// order produces the same graph.
///
/// Construction is O(faces); each face contributes its three undirected
/// edges.
///
/// # Example
///
/// ```
/// use cortex_surface::VertexAdjacency;
///
/// // Two triangles sharing the edge (1, 2)
/// let adjacency = VertexAdjacency::build(4, &[[0, 1, 2], [1, 3, 2]]);
///
/// assert_eq!(adjacency.edge_count(), 5);
/// assert_eq!(adjacency.degree(1), 3);
/// assert!(adjacency.neighbors(1).contains(&2));
/// assert!(adjacency.neighbors(2).contains(&1));
/// ```
#[derive(Debug, Clone)]
pub struct VertexAdjacency {
    /// Sorted neighbour lists, indexed by vertex.
    neighbors: Vec<Vec<u32>>,
    /// Number of undirected edges.
    edge_count: usize,
}

impl VertexAdjacency {
    /// Build the adjacency graph from a face list.
    ///
    /// Faces referencing vertices outside `[0, vertex_count)` are skipped;
    /// validate the surface first to reject them as a contract violation.
    #[must_use]
    pub fn build(vertex_count: usize, faces: &[[u32; 3]]) -> Self {
        let mut sets: Vec<HashSet<u32>> = vec![HashSet::new(); vertex_count];

        for face in faces {
            if face.iter().any(|&v| v as usize >= vertex_count) {
                continue;
            }
            let edges = [
                (face[0], face[1]),
                (face[1], face[2]),
                (face[2], face[0]),
            ];
            for (a, b) in edges {
                if a != b {
                    sets[a as usize].insert(b);
                    sets[b as usize].insert(a);
                }
            }
        }

        let neighbors: Vec<Vec<u32>> = sets
            .into_iter()
            .map(|set| {
                let mut list: Vec<u32> = set.into_iter().collect();
                list.sort_unstable();
                list
            })
            .collect();

        let edge_count = neighbors.iter().map(Vec::len).sum::<usize>() / 2;

        Self {
            neighbors,
            edge_count,
        }
    }

    /// Build the adjacency graph for a surface.
    #[inline]
    #[must_use]
    pub fn from_mesh(mesh: &SurfaceMesh) -> Self {
        Self::build(mesh.vertex_count(), &mesh.faces)
    }

    /// Neighbours of a vertex, sorted ascending.
    ///
    /// Returns an empty slice for isolated or out-of-range vertices.
    #[must_use]
    pub fn neighbors(&self, vertex: u32) -> &[u32] {
        self.neighbors
            .get(vertex as usize)
            .map_or(&[], Vec::as_slice)
    }

    /// Number of neighbours of a vertex.
    #[inline]
    #[must_use]
    pub fn degree(&self, vertex: u32) -> usize {
        self.neighbors(vertex).len()
    }

    /// Number of vertices the graph was built over.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Number of undirected edges.
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_triangle() -> Vec<[u32; 3]> {
        vec![[0, 1, 2]]
    }

    fn two_triangles_sharing_edge() -> Vec<[u32; 3]> {
        vec![[0, 1, 2], [1, 3, 2]]
    }

    #[test]
    fn build_single_triangle() {
        let adj = VertexAdjacency::build(3, &single_triangle());

        assert_eq!(adj.vertex_count(), 3);
        assert_eq!(adj.edge_count(), 3);
        assert_eq!(adj.degree(0), 2);
    }

    #[test]
    fn symmetry() {
        let adj = VertexAdjacency::build(4, &two_triangles_sharing_edge());

        for v in 0..4u32 {
            for &n in adj.neighbors(v) {
                assert!(
                    adj.neighbors(n).contains(&v),
                    "edge ({v}, {n}) not symmetric"
                );
            }
        }
    }

    #[test]
    fn shared_edge_counted_once() {
        let adj = VertexAdjacency::build(4, &two_triangles_sharing_edge());

        // 3 + 3 edges with (1, 2) shared
        assert_eq!(adj.edge_count(), 5);
    }

    #[test]
    fn face_order_does_not_matter() {
        let mut faces = two_triangles_sharing_edge();
        let forward = VertexAdjacency::build(4, &faces);
        faces.reverse();
        let reversed = VertexAdjacency::build(4, &faces);

        assert_eq!(forward.edge_count(), reversed.edge_count());
        for v in 0..4u32 {
            assert_eq!(forward.neighbors(v), reversed.neighbors(v));
        }
    }

    #[test]
    fn storage_adjacency_is_not_topology() {
        // Vertices 1 and 2 are adjacent in storage order but the faces
        // never put them in the same triangle.
        let faces = vec![[0, 1, 3], [0, 2, 4]];
        let adj = VertexAdjacency::build(5, &faces);

        assert!(!adj.neighbors(1).contains(&2));
        assert!(!adj.neighbors(2).contains(&1));
    }

    #[test]
    fn isolated_vertex_has_no_neighbors() {
        let adj = VertexAdjacency::build(4, &single_triangle());
        assert_eq!(adj.degree(3), 0);
    }

    #[test]
    fn out_of_range_face_skipped() {
        let adj = VertexAdjacency::build(3, &[[0, 1, 2], [0, 1, 9]]);
        assert_eq!(adj.edge_count(), 3);
    }

    #[test]
    fn out_of_range_vertex_query() {
        let adj = VertexAdjacency::build(3, &single_triangle());
        assert_eq!(adj.neighbors(99).len(), 0);
    }

    #[test]
    fn degenerate_face_edges_skipped() {
        let adj = VertexAdjacency::build(3, &[[0, 0, 1]]);
        // Only the (0, 1) edge exists; the self-edge is dropped.
        assert_eq!(adj.edge_count(), 1);
    }
}
