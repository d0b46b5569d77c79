//! Indexed triangulated surface.

use crate::{SurfaceError, SurfaceResult, Triangle};
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle surface.
///
/// This is the primary mesh type for cortical folding analysis. Vertex
/// positions and faces are stored separately, with faces referencing
/// vertices by index. The surface is treated as immutable for the
/// duration of an analysis: every statistic is a pure function of it.
///
/// # Memory Layout
///
/// - `positions`: `Vec<Point3<f64>>` - Vertex positions in mm
/// - `faces`: `Vec<[u32; 3]>` - Triangle faces as vertex indices
///
/// # Example
///
/// ```
/// use cortex_surface::{SurfaceMesh, Point3};
///
/// let mesh = SurfaceMesh::from_parts(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     vec![[0, 1, 2]],
/// );
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceMesh {
    /// Vertex positions.
    pub positions: Vec<Point3<f64>>,

    /// Triangle faces as indices into the position array.
    pub faces: Vec<[u32; 3]>,
}

impl SurfaceMesh {
    /// Create a new empty surface.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a surface from vertex positions and faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(positions: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> Self {
        Self { positions, faces }
    }

    /// Create a surface from raw coordinate and index data.
    ///
    /// # Arguments
    ///
    /// * `coords` - Flat array of positions `[x0, y0, z0, x1, y1, z1, ...]`
    /// * `indices` - Flat array of face indices `[a0, b0, c0, a1, b1, c1, ...]`
    ///
    /// Returns an empty surface if either array length is not divisible
    /// by 3.
    ///
    /// # Example
    ///
    /// ```
    /// use cortex_surface::SurfaceMesh;
    ///
    /// let coords = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    /// let indices = [0, 1, 2];
    ///
    /// let mesh = SurfaceMesh::from_raw(&coords, &indices);
    /// assert_eq!(mesh.vertex_count(), 3);
    /// ```
    #[must_use]
    pub fn from_raw(coords: &[f64], indices: &[u32]) -> Self {
        if coords.len() % 3 != 0 || indices.len() % 3 != 0 {
            return Self::new();
        }

        let positions = coords
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();

        let faces = indices.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect();

        Self { positions, faces }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangle faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check whether the surface has no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Check that every face index is in `[0, vertex_count)`.
    ///
    /// This is the input contract for everything downstream; a violation
    /// identifies the offending face and index.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::FaceIndexOutOfRange`] for the first face
    /// referencing a missing vertex.
    pub fn validate(&self) -> SurfaceResult<()> {
        let vertex_count = self.positions.len();
        for (face, indices) in self.faces.iter().enumerate() {
            for &index in indices {
                if index as usize >= vertex_count {
                    return Err(SurfaceError::FaceIndexOutOfRange {
                        face,
                        index,
                        vertex_count,
                    });
                }
            }
        }
        Ok(())
    }

    /// Get the triangle for a face, if the face and its vertices exist.
    #[must_use]
    pub fn triangle(&self, face_index: usize) -> Option<Triangle> {
        let &[i0, i1, i2] = self.faces.get(face_index)?;
        Some(Triangle::new(
            *self.positions.get(i0 as usize)?,
            *self.positions.get(i1 as usize)?,
            *self.positions.get(i2 as usize)?,
        ))
    }

    /// Iterate over all triangles.
    ///
    /// Faces referencing out-of-range vertices are skipped; call
    /// [`SurfaceMesh::validate`] first to reject such surfaces outright.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        (0..self.faces.len()).filter_map(|i| self.triangle(i))
    }

    /// Total surface area: the sum of all triangle areas.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles().map(|tri| tri.area()).sum()
    }

    /// Compute the signed volume of the surface.
    ///
    /// Divergence theorem: sum of signed tetrahedra volumes formed by each
    /// face and the origin. Positive for a closed surface with outward
    /// CCW winding; not meaningful for open surfaces.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let mut volume = 0.0;

        for tri in self.triangles() {
            let cross = tri.v1.coords.cross(&tri.v2.coords);
            volume += tri.v0.coords.dot(&cross);
        }

        volume / 6.0
    }

    /// Compute the absolute volume of the surface.
    #[inline]
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.signed_volume().abs()
    }
}

/// Helper function to create a regular tetrahedron.
///
/// The smallest closed convex surface; its convex hull is itself, so its
/// gyrification index is exactly 1.
#[must_use]
pub fn tetrahedron() -> SurfaceMesh {
    let h = (2.0_f64 / 3.0).sqrt();
    let positions = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.5, 3.0_f64.sqrt() / 2.0, 0.0),
        Point3::new(0.5, 3.0_f64.sqrt() / 6.0, h),
    ];
    let faces = vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
    SurfaceMesh::from_parts(positions, faces)
}

/// Helper function to create a unit cube surface.
///
/// Cube from (0,0,0) to (1,1,1) with outward CCW winding.
#[must_use]
pub fn unit_cube() -> SurfaceMesh {
    let positions = vec![
        Point3::new(0.0, 0.0, 0.0), // 0
        Point3::new(1.0, 0.0, 0.0), // 1
        Point3::new(1.0, 1.0, 0.0), // 2
        Point3::new(0.0, 1.0, 0.0), // 3
        Point3::new(0.0, 0.0, 1.0), // 4
        Point3::new(1.0, 0.0, 1.0), // 5
        Point3::new(1.0, 1.0, 1.0), // 6
        Point3::new(0.0, 1.0, 1.0), // 7
    ];

    let faces = vec![
        // Bottom face (z=0)
        [0, 2, 1],
        [0, 3, 2],
        // Top face (z=1)
        [4, 5, 6],
        [4, 6, 7],
        // Front face (y=0)
        [0, 1, 5],
        [0, 5, 4],
        // Back face (y=1)
        [3, 7, 6],
        [3, 6, 2],
        // Left face (x=0)
        [0, 4, 7],
        [0, 7, 3],
        // Right face (x=1)
        [1, 2, 6],
        [1, 6, 5],
    ];

    SurfaceMesh::from_parts(positions, faces)
}

/// Helper function to create a unit cube with its top face folded inward.
///
/// The top quad is replaced by four triangles meeting at an interior apex,
/// so the surface area exceeds the convex hull's while the hull stays the
/// unit cube. Useful as a minimal non-convex test surface.
#[must_use]
pub fn dented_cube() -> SurfaceMesh {
    let mut mesh = unit_cube();

    // Apex sunk halfway into the cube
    mesh.positions.push(Point3::new(0.5, 0.5, 0.5)); // 8

    // Replace the two top-face triangles with four around the apex
    mesh.faces.retain(|f| *f != [4, 5, 6] && *f != [4, 6, 7]);
    mesh.faces.push([4, 5, 8]);
    mesh.faces.push([5, 6, 8]);
    mesh.faces.push([6, 7, 8]);
    mesh.faces.push([7, 4, 8]);

    mesh
}
