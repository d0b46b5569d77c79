//! Gyrification index: surface area relative to convex-hull area.

use cortex_surface::SurfaceMesh;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{BandError, BandResult};

/// Gyrification measurement of one surface.
///
/// The index is the ratio of true surface area to convex-hull area; it
/// is at least 1 for any closed non-convex surface and exactly 1 for a
/// convex one. Hull construction is an external collaborator; only the
/// hull area enters here.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Gyrification {
    /// True surface area in mm².
    pub surface_area: f64,
    /// Convex-hull surface area in mm².
    pub hull_area: f64,
    /// Gyrification index: `surface_area / hull_area`.
    pub index: f64,
}

/// Compute the gyrification index of a surface given its hull area.
///
/// # Errors
///
/// Returns [`BandError::DegenerateHull`] when `hull_area <= 0`; the
/// ratio is undefined there and must not silently become infinity or
/// NaN.
///
/// # Example
///
/// ```
/// use cortex_surface::unit_cube;
/// use cortex_bands::gyrification_index;
///
/// let cube = unit_cube();
/// let gyr = gyrification_index(&cube, cube.surface_area()).unwrap();
/// assert!((gyr.index - 1.0).abs() < 1e-10);
/// ```
pub fn gyrification_index(mesh: &SurfaceMesh, hull_area: f64) -> BandResult<Gyrification> {
    if hull_area <= 0.0 {
        return Err(BandError::DegenerateHull { hull_area });
    }

    let surface_area = mesh.surface_area();
    Ok(Gyrification {
        surface_area,
        hull_area,
        index: surface_area / hull_area,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cortex_surface::{dented_cube, tetrahedron, unit_cube};

    #[test]
    fn convex_surface_has_index_one() {
        // A convex mesh is its own hull.
        let tet = tetrahedron();
        let gyr = gyrification_index(&tet, tet.surface_area()).unwrap();
        assert!((gyr.index - 1.0).abs() < 1e-10);
    }

    #[test]
    fn folded_surface_exceeds_one() {
        // The dented cube's hull is the original unit cube.
        let folded = dented_cube();
        let gyr = gyrification_index(&folded, unit_cube().surface_area()).unwrap();
        assert!(gyr.index > 1.0);
        assert!((gyr.hull_area - 6.0).abs() < 1e-10);
    }

    #[test]
    fn zero_hull_area_is_an_error() {
        let err = gyrification_index(&unit_cube(), 0.0).unwrap_err();
        assert!(matches!(err, BandError::DegenerateHull { .. }));
    }

    #[test]
    fn negative_hull_area_is_an_error() {
        assert!(gyrification_index(&unit_cube(), -4.0).is_err());
    }
}
