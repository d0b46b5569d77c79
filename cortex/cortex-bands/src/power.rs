//! Band power normalization.
//!
//! The grouped power spectrum itself comes from the external
//! decomposition; this module only normalizes it for reporting.

/// Normalize a grouped power spectrum to percentages of total power.
///
/// A zero (or negative) total resolves to an all-zero distribution
/// rather than a division error.
///
/// # Example
///
/// ```
/// use cortex_bands::power_distribution;
///
/// let pct = power_distribution(&[1.0, 3.0]);
/// assert!((pct[0] - 25.0).abs() < 1e-10);
/// assert!((pct[1] - 75.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn power_distribution(grouped_spectrum: &[f64]) -> Vec<f64> {
    let total: f64 = grouped_spectrum.iter().sum();
    if total > 0.0 {
        grouped_spectrum
            .iter()
            .map(|&power| power / total * 100.0)
            .collect()
    } else {
        vec![0.0; grouped_spectrum.len()]
    }
}

/// Analysed folding power: the total power above the DC band.
///
/// Sum of every band's power except band 0.
#[must_use]
pub fn analyzed_folding_power(grouped_spectrum: &[f64]) -> f64 {
    grouped_spectrum.iter().skip(1).sum()
}

/// One band's power as a fraction of the analysed folding power.
///
/// Returns 0 when the folding power is 0 or the band does not exist.
#[must_use]
pub fn relative_power(grouped_spectrum: &[f64], band: usize) -> f64 {
    let afp = analyzed_folding_power(grouped_spectrum);
    if afp > 0.0 {
        grouped_spectrum.get(band).copied().unwrap_or(0.0) / afp
    } else {
        0.0
    }
}
