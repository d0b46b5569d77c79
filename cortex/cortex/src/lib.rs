//! Cortical folding analysis toolkit.
//!
//! This umbrella crate re-exports the cortex-* crates, providing a
//! unified API for quantifying cortical folding on triangulated
//! brain-surface meshes: spectral-band wavelengths, topology-correct
//! parcel counts, band coverage, and the gyrification index.
//!
//! # Quick Start
//!
//! ```
//! use cortex::prelude::*;
//!
//! // A toy surface: the unit cube, fully dominated by gyral band 1
//! let mesh = cortex::surface::unit_cube();
//! let spectrum = EigenSpectrum::new(vec![0.0, 2.0], vec![vec![0], vec![1]]).unwrap();
//!
//! let inputs = SurfaceInputs::new(
//!     SurfaceKey::new("sub-01", "ses-01", Hemisphere::Left),
//!     30.0,
//!     mesh,
//! )
//! .with_decomposition(spectrum, vec![5.0, 2.0])
//! .with_dominance(DominanceMap::new(vec![1; 8]))
//! .with_hull_area(6.0);
//!
//! let summary = summarize_surface(&inputs, &SummaryConfig::default()).unwrap();
//! assert_eq!(summary.band(1).unwrap().parcel_count, 1);
//! ```
//!
//! # Module Organization
//!
//! - [`surface`] - Surface mesh, triangle geometry, vertex adjacency
//! - [`bands`] - Wavelengths, parcels, coverage, power, gyrification
//! - [`summary`] - Summary records, configuration, batch orchestration

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Surface mesh, triangle geometry, vertex adjacency.
pub use cortex_surface as surface;

/// Wavelengths, parcels, coverage, power, gyrification.
pub use cortex_bands as bands;

/// Summary records, configuration, batch orchestration.
pub use cortex_summary as summary;

/// Commonly used types and functions.
pub mod prelude {
    pub use cortex_bands::{
        band_wavelengths, count_parcels, gyrification_index, BandCoverage, CoverageContext,
        DominanceMap, EigenSpectrum,
    };
    pub use cortex_summary::{
        summarize_batch, summarize_surface, Hemisphere, SummaryConfig, SurfaceInputs, SurfaceKey,
        SurfaceSummary,
    };
    pub use cortex_surface::{Point3, SurfaceMesh, Triangle, Vector3, VertexAdjacency};
}
