//! Triangulated cortical surface types and mesh-topology adjacency.
//!
//! This crate provides the geometric foundation for cortical folding
//! analysis: an indexed triangle surface, per-triangle geometry, and a
//! vertex adjacency graph derived from the triangulation.
//!
//! # Overview
//!
//! - [`SurfaceMesh`] - Indexed triangle surface (vertex positions + faces)
//! - [`Triangle`] - Concrete triangle for area/normal/centroid computations
//! - [`VertexAdjacency`] - Vertex-to-vertex connectivity from the face list
//!
//! The adjacency graph exists because an unstructured triangulation has no
//! implicit grid ordering: two vertices adjacent in storage order are not
//! necessarily adjacent on the surface, and vice versa. Every
//! connected-region computation downstream must go through
//! [`VertexAdjacency`], never through array order.
//!
//! # Example
//!
//! ```
//! use cortex_surface::{SurfaceMesh, VertexAdjacency, Point3};
//!
//! let mesh = SurfaceMesh::from_parts(
//!     vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     ],
//!     vec![[0, 1, 2]],
//! );
//! assert!(mesh.validate().is_ok());
//! assert!((mesh.surface_area() - 0.5).abs() < 1e-10);
//!
//! let adjacency = VertexAdjacency::from_mesh(&mesh);
//! assert_eq!(adjacency.edge_count(), 3);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod adjacency;
mod error;
mod mesh;
mod triangle;

pub use adjacency::VertexAdjacency;
pub use error::{SurfaceError, SurfaceResult};
pub use mesh::{dented_cube, tetrahedron, unit_cube, SurfaceMesh};
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
