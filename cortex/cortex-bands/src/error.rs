//! Error types for spectral-band operations.

use thiserror::Error;

/// Result type for spectral-band operations.
pub type BandResult<T> = Result<T, BandError>;

/// Errors that can occur during spectral-band analysis.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BandError {
    /// A band group references an eigenvalue index outside the spectrum.
    #[error("band {band} references eigenvalue index {index} (spectrum has {eigenvalue_count} eigenvalues)")]
    EigenIndexOutOfRange {
        /// The offending band.
        band: usize,
        /// The out-of-range eigenvalue index.
        index: usize,
        /// Length of the eigenvalue sequence.
        eigenvalue_count: usize,
    },

    /// Two band groups claim the same eigenvalue index.
    #[error("eigenvalue index {index} appears in more than one band group")]
    OverlappingBandGroups {
        /// The doubly-claimed eigenvalue index.
        index: usize,
    },

    /// An eigenvalue index is not covered by any band group.
    #[error("eigenvalue index {index} is not covered by any band group")]
    UncoveredEigenvalue {
        /// The uncovered eigenvalue index.
        index: usize,
    },

    /// The convex hull area is zero or negative, so the gyrification
    /// ratio is undefined.
    #[error("convex hull area {hull_area} is not positive; gyrification index is undefined")]
    DegenerateHull {
        /// The reported hull area.
        hull_area: f64,
    },
}
