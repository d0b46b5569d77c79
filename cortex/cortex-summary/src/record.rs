//! Fixed-shape summary records.
//!
//! One record per processed surface, with named, typed fields per band.
//! The shape is fixed per run so the external aggregator can treat each
//! record as one tabular row; shape mismatches become type errors here
//! instead of runtime surprises in a loosely keyed map.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which hemisphere a surface belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Hemisphere {
    /// Left hemisphere.
    Left,
    /// Right hemisphere.
    Right,
}

impl Hemisphere {
    /// Lowercase name as used in surface file naming.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one surface: subject, session, hemisphere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceKey {
    /// Subject identifier.
    pub subject: String,
    /// Session identifier.
    pub session: String,
    /// Hemisphere.
    pub hemisphere: Hemisphere,
}

impl SurfaceKey {
    /// Create a key from its parts.
    pub fn new(
        subject: impl Into<String>,
        session: impl Into<String>,
        hemisphere: Hemisphere,
    ) -> Self {
        Self {
            subject: subject.into(),
            session: session.into(),
            hemisphere,
        }
    }
}

impl fmt::Display for SurfaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.subject, self.session, self.hemisphere)
    }
}

/// Folding statistics for one signed band on one surface.
///
/// The band label is signed: positive for gyral-dominant bands, negative
/// for sulcal-dominant bands, 0 for the vertices with no dominant band.
/// Wavelength and power describe the band's frequency level (the label's
/// absolute value); parcels and coverage describe the signed label.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BandSummary {
    /// Signed band label.
    pub band: i32,
    /// Average spatial wavelength of the band's eigenvalue group, in mm.
    pub wavelength_mm: f64,
    /// Band power from the grouped spectrum.
    pub power: f64,
    /// Band power as a percentage of total power (0-100).
    pub power_percentage: f64,
    /// Band power relative to the analysed folding power.
    pub relative_power: f64,
    /// Number of disjoint surface parcels carrying the label.
    pub parcel_count: usize,
    /// Number of vertices carrying the label.
    pub vertex_count: usize,
    /// Vertex count as a percentage of all vertices (0-100).
    pub vertex_percentage: f64,
    /// Surface area of faces touched by the label, in mm².
    pub surface_area_mm2: f64,
    /// Touched area as a percentage of total surface area (0-100).
    pub area_percentage: f64,
}

/// Complete folding summary of one surface.
///
/// Assembled once per mesh and handed to the external aggregator; this
/// crate persists nothing itself.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceSummary {
    /// Surface identity.
    pub key: SurfaceKey,
    /// Externally supplied clinical covariate, in weeks.
    pub gestational_age_weeks: f64,
    /// Gyrification index: surface area over convex-hull area.
    pub gyrification_index: f64,
    /// Convex-hull surface area in mm².
    pub hull_area_mm2: f64,
    /// True surface area in mm².
    pub surface_area_mm2: f64,
    /// Enclosed volume in mL, floored to a whole number.
    pub volume_ml: f64,
    /// Surface area in cm², floored to a whole number.
    pub surface_area_cm2: f64,
    /// Total power above the DC band.
    pub analyzed_folding_power: f64,
    /// Sum of the per-vertex mean-curvature signal, when supplied.
    pub total_mean_curvature: Option<f64>,
    /// Per-band statistics, in band order.
    pub bands: Vec<BandSummary>,
    /// Wall-clock seconds spent summarizing this surface.
    pub processing_secs: f64,
}

impl SurfaceSummary {
    /// Find the summary row for a signed band label.
    #[must_use]
    pub fn band(&self, band: i32) -> Option<&BandSummary> {
        self.bands.iter().find(|row| row.band == band)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_display() {
        let key = SurfaceKey::new("sub-01", "ses-02", Hemisphere::Left);
        assert_eq!(key.to_string(), "sub-01_ses-02_left");
    }

    #[test]
    fn hemisphere_names() {
        assert_eq!(Hemisphere::Left.as_str(), "left");
        assert_eq!(Hemisphere::Right.as_str(), "right");
    }
}
