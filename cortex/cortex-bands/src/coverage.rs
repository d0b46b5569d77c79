//! Band coverage: vertex and surface-area share per dominant band.

// Mesh statistics divide counts by counts; precision loss is irrelevant
// at practical mesh sizes.
#![allow(clippy::cast_precision_loss)]

use cortex_surface::SurfaceMesh;
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::DominanceMap;

/// Coverage of one band over one surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BandCoverage {
    /// Number of vertices carrying the band's label.
    pub vertex_count: usize,
    /// Vertex count as a percentage of all vertices (0-100).
    pub vertex_percentage: f64,
    /// Total area of faces touched by the band, in mm².
    pub surface_area: f64,
    /// Touched area as a percentage of total surface area (0-100).
    pub area_percentage: f64,
}

/// Precomputed per-face geometry for repeated coverage queries.
///
/// Face areas are computed once per surface; each band query is then a
/// masked reduction over the face list rather than a per-face geometric
/// recomputation. Face counts reach the hundreds of thousands on real
/// cortical surfaces and coverage is queried once per band, so the
/// reduction is parallelized over faces with rayon.
///
/// # Area attribution
///
/// A face contributes its full area to a band when **any** of its three
/// vertices carries the band's label. A face whose vertices carry
/// different dominant bands is therefore counted toward each of them.
/// This overlapping attribution is part of the reported statistic's
/// definition; do not deduplicate it.
///
/// # Example
///
/// ```
/// use cortex_surface::{SurfaceMesh, Point3};
/// use cortex_bands::{CoverageContext, DominanceMap};
///
/// let mesh = SurfaceMesh::from_parts(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     vec![[0, 1, 2]],
/// );
/// let context = CoverageContext::new(&mesh);
/// let coverage = context.band_coverage(&DominanceMap::new(vec![1, 1, 1]), 1);
///
/// assert_eq!(coverage.vertex_count, 3);
/// assert!((coverage.vertex_percentage - 100.0).abs() < 1e-10);
/// assert!((coverage.surface_area - 0.5).abs() < 1e-10);
/// assert!((coverage.area_percentage - 100.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct CoverageContext {
    faces: Vec<[u32; 3]>,
    face_areas: Vec<f64>,
    vertex_count: usize,
    total_area: f64,
}

impl CoverageContext {
    /// Precompute face areas for a surface.
    #[must_use]
    pub fn new(mesh: &SurfaceMesh) -> Self {
        let face_areas: Vec<f64> = (0..mesh.face_count())
            .into_par_iter()
            .map(|face| mesh.triangle(face).map_or(0.0, |tri| tri.area()))
            .collect();

        let total_area = face_areas.iter().sum();

        Self {
            faces: mesh.faces.clone(),
            face_areas,
            vertex_count: mesh.vertex_count(),
            total_area,
        }
    }

    /// Total surface area of the underlying mesh.
    #[inline]
    #[must_use]
    pub fn total_area(&self) -> f64 {
        self.total_area
    }

    /// Coverage statistics for one band label.
    ///
    /// Degenerate inputs resolve to neutral values: a surface with zero
    /// total area or zero vertices reports 0 percentages rather than
    /// propagating a division error.
    #[must_use]
    pub fn band_coverage(&self, dominance: &DominanceMap, band: i32) -> BandCoverage {
        let mask = dominance.mask(band);

        let vertex_count = mask.iter().filter(|&&m| m).count();
        let vertex_percentage = if self.vertex_count == 0 {
            0.0
        } else {
            vertex_count as f64 / self.vertex_count as f64 * 100.0
        };

        // Any-of-3 masked reduction over faces. The map runs in parallel;
        // the final sum stays sequential in face order so repeated runs
        // are bit-identical (float addition is not associative).
        let masked_areas: Vec<f64> = self
            .faces
            .par_iter()
            .zip(self.face_areas.par_iter())
            .map(|(face, &area)| {
                let touched = face
                    .iter()
                    .any(|&v| mask.get(v as usize).copied().unwrap_or(false));
                if touched {
                    area
                } else {
                    0.0
                }
            })
            .collect();
        let surface_area: f64 = masked_areas.iter().sum();

        let area_percentage = if self.total_area > 0.0 {
            surface_area / self.total_area * 100.0
        } else {
            0.0
        };

        BandCoverage {
            vertex_count,
            vertex_percentage,
            surface_area,
            area_percentage,
        }
    }
}
