//! Per-surface summary assembly.

// Unit conversions floor to whole mL/cm²; precision loss is intended.
#![allow(clippy::cast_precision_loss)]

use std::time::Instant;

use cortex_bands::{
    analyzed_folding_power, band_wavelengths, count_parcels, gyrification_index,
    power_distribution, relative_power, CoverageContext, DominanceMap,
};
use cortex_surface::VertexAdjacency;
use tracing::{debug, info};

use crate::{BandSummary, SummaryConfig, SummaryError, SummaryResult, SurfaceInputs, SurfaceSummary};

/// Cubic millimetres per millilitre.
const MM3_PER_ML: f64 = 1000.0;
/// Square millimetres per square centimetre.
const MM2_PER_CM2: f64 = 100.0;

/// Assemble the folding summary for one surface.
///
/// Validates the input contracts first (face indices in range, label and
/// power arrays matching the mesh and decomposition), then computes the
/// gyrification index, whole-surface parameters, and one [`BandSummary`]
/// row per band. Per-band statistics only read shared immutable state
/// (adjacency graph, label array, face areas), so the row loop has no
/// data dependencies between rows.
///
/// # Errors
///
/// - [`SummaryError::MissingUpstream`] when the decomposition, dominance
///   map, or hull area was not supplied.
/// - [`SummaryError::Surface`] / length-mismatch variants when an input
///   contract is violated.
/// - [`SummaryError::Band`] when the hull area is degenerate.
///
/// Degenerate geometry (zero surface area, empty bands, zero-power
/// spectra) is not an error; those statistics resolve to 0.
pub fn summarize_surface(
    inputs: &SurfaceInputs,
    config: &SummaryConfig,
) -> SummaryResult<SurfaceSummary> {
    let started = Instant::now();

    let spectrum = inputs
        .spectrum
        .as_ref()
        .ok_or(SummaryError::MissingUpstream {
            artifact: "spectral decomposition",
        })?;
    let band_powers = inputs
        .band_powers
        .as_ref()
        .ok_or(SummaryError::MissingUpstream {
            artifact: "band power spectrum",
        })?;
    let dominance = inputs
        .dominance
        .as_ref()
        .ok_or(SummaryError::MissingUpstream {
            artifact: "dominance map",
        })?;
    let hull_area = inputs.hull_area.ok_or(SummaryError::MissingUpstream {
        artifact: "convex hull",
    })?;

    let mesh = &inputs.mesh;
    mesh.validate()?;

    if dominance.len() != mesh.vertex_count() {
        return Err(SummaryError::LabelLengthMismatch {
            labels: dominance.len(),
            vertices: mesh.vertex_count(),
        });
    }
    if band_powers.len() != spectrum.band_count() {
        return Err(SummaryError::BandPowerLengthMismatch {
            powers: band_powers.len(),
            bands: spectrum.band_count(),
        });
    }

    let total_mean_curvature = match &inputs.mean_curvature {
        Some(curvature) if curvature.len() != mesh.vertex_count() => {
            return Err(SummaryError::CurvatureLengthMismatch {
                samples: curvature.len(),
                vertices: mesh.vertex_count(),
            });
        }
        Some(curvature) => Some(curvature.iter().sum()),
        None => None,
    };

    info!(
        surface = %inputs.key,
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        bands = spectrum.band_count(),
        "summarizing surface"
    );

    let gyrification = gyrification_index(mesh, hull_area)?;

    let adjacency = VertexAdjacency::from_mesh(mesh);
    let context = CoverageContext::new(mesh);
    debug!(
        edges = adjacency.edge_count(),
        total_area = context.total_area(),
        "adjacency graph and face areas ready"
    );

    let wavelengths = band_wavelengths(spectrum);
    let power_percentages = power_distribution(band_powers);
    let folding_power = analyzed_folding_power(band_powers);

    let mut bands = Vec::new();
    for level in 0..spectrum.band_count() {
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let label = level as i32;

        if level == 0 {
            if config.include_unassigned {
                bands.push(band_row(
                    label,
                    level,
                    &wavelengths,
                    band_powers,
                    &power_percentages,
                    adjacency_stats(&adjacency, &context, dominance, label),
                ));
            }
            continue;
        }

        bands.push(band_row(
            label,
            level,
            &wavelengths,
            band_powers,
            &power_percentages,
            adjacency_stats(&adjacency, &context, dominance, label),
        ));

        if config.include_sulcal {
            bands.push(band_row(
                -label,
                level,
                &wavelengths,
                band_powers,
                &power_percentages,
                adjacency_stats(&adjacency, &context, dominance, -label),
            ));
        }
    }

    let surface_area = gyrification.surface_area;

    Ok(SurfaceSummary {
        key: inputs.key.clone(),
        gestational_age_weeks: inputs.gestational_age_weeks,
        gyrification_index: gyrification.index,
        hull_area_mm2: gyrification.hull_area,
        surface_area_mm2: surface_area,
        volume_ml: (mesh.volume() / MM3_PER_ML).floor(),
        surface_area_cm2: (surface_area / MM2_PER_CM2).floor(),
        analyzed_folding_power: folding_power,
        total_mean_curvature,
        bands,
        processing_secs: started.elapsed().as_secs_f64(),
    })
}

/// Parcel and coverage numbers for one signed label.
struct SurfaceBandStats {
    parcel_count: usize,
    coverage: cortex_bands::BandCoverage,
}

fn adjacency_stats(
    adjacency: &VertexAdjacency,
    context: &CoverageContext,
    dominance: &DominanceMap,
    label: i32,
) -> SurfaceBandStats {
    SurfaceBandStats {
        parcel_count: count_parcels(adjacency, dominance, label),
        coverage: context.band_coverage(dominance, label),
    }
}

fn band_row(
    band: i32,
    level: usize,
    wavelengths: &[f64],
    band_powers: &[f64],
    power_percentages: &[f64],
    stats: SurfaceBandStats,
) -> BandSummary {
    BandSummary {
        band,
        wavelength_mm: wavelengths.get(level).copied().unwrap_or(0.0),
        power: band_powers.get(level).copied().unwrap_or(0.0),
        power_percentage: power_percentages.get(level).copied().unwrap_or(0.0),
        relative_power: relative_power(band_powers, level),
        parcel_count: stats.parcel_count,
        vertex_count: stats.coverage.vertex_count,
        vertex_percentage: stats.coverage.vertex_percentage,
        surface_area_mm2: stats.coverage.surface_area,
        area_percentage: stats.coverage.area_percentage,
    }
}
