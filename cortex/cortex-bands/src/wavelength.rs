//! Band wavelength estimation.
//!
//! Maps each band's eigenvalue group to an average spatial wavelength via
//! the dispersion relation between a Laplacian eigenvalue and a spatial
//! frequency on the folded surface. The relation is asymptotic for large
//! eigenvalue index; the formula is fixed and must match the reference
//! statistics, so keep it as written.

use crate::EigenSpectrum;

/// Average wavelength in mm for one band's eigenvalue index group.
///
/// Per index, the spatial frequency is `f = sqrt(lambda / (2*pi))`; the
/// band wavelength is the reciprocal of the mean frequency.
///
/// Returns 0 for an empty group and 0 when the mean frequency is 0 (the
/// DC band), so no division by zero can occur. Small negative round-off
/// eigenvalues are treated as zero.
///
/// # Example
///
/// ```
/// use cortex_bands::band_wavelength;
/// use std::f64::consts::PI;
///
/// // lambda = 8*pi  =>  f = 2  =>  wavelength = 0.5
/// let wavelength = band_wavelength(&[0.0, 8.0 * PI], &[1]);
/// assert!((wavelength - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn band_wavelength(eigenvalues: &[f64], group: &[usize]) -> f64 {
    if group.is_empty() {
        return 0.0;
    }

    let mut sum = 0.0;
    let mut count = 0usize;
    for &index in group {
        let Some(&eigenvalue) = eigenvalues.get(index) else {
            continue;
        };
        sum += (eigenvalue.max(0.0) / (2.0 * std::f64::consts::PI)).sqrt();
        count += 1;
    }

    if count == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let mean_frequency = sum / count as f64;
    if mean_frequency > 0.0 {
        1.0 / mean_frequency
    } else {
        0.0
    }
}

/// Average wavelength for every band of a spectrum, in band order.
#[must_use]
pub fn band_wavelengths(spectrum: &EigenSpectrum) -> Vec<f64> {
    spectrum
        .band_groups()
        .map(|group| band_wavelength(spectrum.eigenvalues(), group))
        .collect()
}
