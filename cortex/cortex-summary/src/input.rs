//! Per-surface input bundle.

use cortex_bands::{DominanceMap, EigenSpectrum};
use cortex_surface::SurfaceMesh;

use crate::SurfaceKey;

/// Everything one surface needs for summarization, gathered from the
/// external collaborators.
///
/// The mesh is mandatory; the decomposition products and the hull area
/// are optional here so that a broken upstream stage can be reported as
/// a typed [`MissingUpstream`](crate::SummaryError::MissingUpstream)
/// failure for that surface alone instead of aborting the batch.
#[derive(Debug, Clone)]
pub struct SurfaceInputs {
    /// Surface identity.
    pub key: SurfaceKey,
    /// Externally supplied clinical covariate, in weeks.
    pub gestational_age_weeks: f64,
    /// The triangulated surface.
    pub mesh: SurfaceMesh,
    /// Eigenvalues and band grouping from the decomposition engine.
    pub spectrum: Option<EigenSpectrum>,
    /// Grouped band power spectrum from the decomposition engine.
    pub band_powers: Option<Vec<f64>>,
    /// Per-vertex dominant-band labels.
    pub dominance: Option<DominanceMap>,
    /// Convex-hull surface area from the hull provider, in mm².
    pub hull_area: Option<f64>,
    /// Per-vertex mean-curvature signal, when available.
    pub mean_curvature: Option<Vec<f64>>,
}

impl SurfaceInputs {
    /// Start an input bundle from the mandatory parts.
    #[must_use]
    pub const fn new(key: SurfaceKey, gestational_age_weeks: f64, mesh: SurfaceMesh) -> Self {
        Self {
            key,
            gestational_age_weeks,
            mesh,
            spectrum: None,
            band_powers: None,
            dominance: None,
            hull_area: None,
            mean_curvature: None,
        }
    }

    /// Attach the spectral decomposition products.
    #[must_use]
    pub fn with_decomposition(mut self, spectrum: EigenSpectrum, band_powers: Vec<f64>) -> Self {
        self.spectrum = Some(spectrum);
        self.band_powers = Some(band_powers);
        self
    }

    /// Attach the dominance map.
    #[must_use]
    pub fn with_dominance(mut self, dominance: DominanceMap) -> Self {
        self.dominance = Some(dominance);
        self
    }

    /// Attach the convex-hull area.
    #[must_use]
    pub fn with_hull_area(mut self, hull_area: f64) -> Self {
        self.hull_area = Some(hull_area);
        self
    }

    /// Attach the mean-curvature signal.
    #[must_use]
    pub fn with_mean_curvature(mut self, curvature: Vec<f64>) -> Self {
        self.mean_curvature = Some(curvature);
        self
    }
}
