//! Error types for surface summarization.

use cortex_bands::BandError;
use cortex_surface::SurfaceError;
use thiserror::Error;

/// Result type for summarization.
pub type SummaryResult<T> = Result<T, SummaryError>;

/// Errors that make one surface unprocessable.
///
/// Every variant is fatal for its own surface only; batch processing of
/// sibling surfaces continues. Degenerate geometry (zero area, empty
/// bands, zero-power spectra) is deliberately *not* represented here -
/// those resolve to neutral values downstream instead of failing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SummaryError {
    /// A required upstream pipeline product was not supplied. Distinct
    /// from an invalid surface: it indicates a break earlier in the
    /// pipeline.
    #[error("upstream {artifact} result is missing")]
    MissingUpstream {
        /// Which upstream product is absent.
        artifact: &'static str,
    },

    /// The dominance map does not cover the surface's vertices.
    #[error("dominance map has {labels} labels but surface has {vertices} vertices")]
    LabelLengthMismatch {
        /// Length of the label array.
        labels: usize,
        /// Vertex count of the surface.
        vertices: usize,
    },

    /// The band power spectrum does not match the decomposition's bands.
    #[error("band power spectrum has {powers} entries but decomposition has {bands} bands")]
    BandPowerLengthMismatch {
        /// Length of the power array.
        powers: usize,
        /// Number of bands in the decomposition.
        bands: usize,
    },

    /// The curvature texture does not cover the surface's vertices.
    #[error("curvature texture has {samples} samples but surface has {vertices} vertices")]
    CurvatureLengthMismatch {
        /// Length of the curvature array.
        samples: usize,
        /// Vertex count of the surface.
        vertices: usize,
    },

    /// The surface itself violates its input contract.
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    /// A spectral-band computation failed.
    #[error(transparent)]
    Band(#[from] BandError),
}

impl SummaryError {
    /// Whether this failure indicates a missing upstream stage rather
    /// than an invalid input.
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(self, Self::MissingUpstream { .. })
    }
}
