//! Error types for surface operations.

use thiserror::Error;

/// Result type for surface operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Errors that can occur while working with a surface mesh.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SurfaceError {
    /// A face references a vertex index outside the vertex array.
    #[error("face {face} references vertex {index} (surface has {vertex_count} vertices)")]
    FaceIndexOutOfRange {
        /// Index of the offending face.
        face: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Total number of vertices in the surface.
        vertex_count: usize,
    },
}
