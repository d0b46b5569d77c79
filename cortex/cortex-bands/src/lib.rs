//! Spectral-band parcellation and coverage statistics for cortical
//! surfaces.
//!
//! Given a triangulated surface, the eigenvalue grouping produced by an
//! external spectral decomposition, and a per-vertex dominant-band label
//! map, this crate computes the band-level folding statistics:
//!
//! - [`band_wavelengths`] - average spatial wavelength per band
//! - [`count_parcels`] / [`parcels_per_band`] - disjoint surface regions
//!   per band, under true mesh adjacency
//! - [`CoverageContext`] - vertex and area coverage per band
//! - [`power_distribution`] / [`analyzed_folding_power`] - band power
//!   normalization
//! - [`gyrification_index`] - surface area over convex-hull area
//!
//! All computations are pure functions of immutable inputs; per-band
//! statistics are independent of each other and may run concurrently
//! against shared borrows.
//!
//! # Example
//!
//! ```
//! use cortex_surface::{SurfaceMesh, VertexAdjacency, Point3};
//! use cortex_bands::{count_parcels, CoverageContext, DominanceMap};
//!
//! let mesh = SurfaceMesh::from_parts(
//!     vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     ],
//!     vec![[0, 1, 2]],
//! );
//! let adjacency = VertexAdjacency::from_mesh(&mesh);
//! let dominance = DominanceMap::new(vec![1, 1, 1]);
//!
//! assert_eq!(count_parcels(&adjacency, &dominance, 1), 1);
//!
//! let coverage = CoverageContext::new(&mesh).band_coverage(&dominance, 1);
//! assert!((coverage.area_percentage - 100.0).abs() < 1e-10);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod coverage;
mod dominance;
mod error;
mod gyrification;
mod parcels;
mod power;
mod spectrum;
mod wavelength;

pub use coverage::{BandCoverage, CoverageContext};
pub use dominance::DominanceMap;
pub use error::{BandError, BandResult};
pub use gyrification::{gyrification_index, Gyrification};
pub use parcels::{count_parcels, parcels_per_band};
pub use power::{analyzed_folding_power, power_distribution, relative_power};
pub use spectrum::EigenSpectrum;
pub use wavelength::{band_wavelength, band_wavelengths};
