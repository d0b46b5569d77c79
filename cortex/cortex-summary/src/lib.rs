//! Per-surface folding summary records and batch orchestration.
//!
//! This crate is the thin assembly layer above `cortex-bands`: it turns
//! one surface's inputs (mesh, spectral decomposition, dominance map,
//! hull area, clinical covariate) into one fixed-shape
//! [`SurfaceSummary`] record, and fans out over independent surfaces in
//! parallel. Records are transient, in-memory values handed to an
//! external aggregator; nothing here touches the filesystem.
//!
//! # Example
//!
//! ```
//! use cortex_bands::{DominanceMap, EigenSpectrum};
//! use cortex_surface::unit_cube;
//! use cortex_summary::{
//!     summarize_surface, Hemisphere, SummaryConfig, SurfaceInputs, SurfaceKey,
//! };
//!
//! let spectrum = EigenSpectrum::new(vec![0.0, 2.0], vec![vec![0], vec![1]]).unwrap();
//! let inputs = SurfaceInputs::new(
//!     SurfaceKey::new("sub-01", "ses-01", Hemisphere::Left),
//!     31.0,
//!     unit_cube(),
//! )
//! .with_decomposition(spectrum, vec![4.0, 2.0])
//! .with_dominance(DominanceMap::new(vec![1; 8]))
//! .with_hull_area(6.0);
//!
//! let summary = summarize_surface(&inputs, &SummaryConfig::default()).unwrap();
//! assert!((summary.gyrification_index - 1.0).abs() < 1e-10);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod analyze;
mod batch;
mod config;
mod error;
mod input;
mod record;

pub use analyze::summarize_surface;
pub use batch::{summarize_batch, BatchOutcome, SurfaceFailure};
pub use config::SummaryConfig;
pub use error::{SummaryError, SummaryResult};
pub use input::SurfaceInputs;
pub use record::{BandSummary, Hemisphere, SurfaceKey, SurfaceSummary};
