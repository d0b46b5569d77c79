//! Eigen-spectrum and band partition.

use crate::{BandError, BandResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A Laplacian eigen-spectrum partitioned into frequency bands.
///
/// Holds the ascending eigenvalue sequence produced by the external
/// decomposition engine together with the partition of eigenvalue
/// indices into one index group per band. The partition invariant -
/// groups pairwise disjoint, union covering the whole index range -
/// is checked at construction; downstream code relies on it.
///
/// # Example
///
/// ```
/// use cortex_bands::EigenSpectrum;
///
/// let spectrum = EigenSpectrum::new(
///     vec![0.0, 0.8, 1.4, 3.9],
///     vec![vec![0], vec![1, 2], vec![3]],
/// )
/// .unwrap();
///
/// assert_eq!(spectrum.band_count(), 3);
/// assert_eq!(spectrum.band_group(1), Some(&[1, 2][..]));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EigenSpectrum {
    eigenvalues: Vec<f64>,
    band_groups: Vec<Vec<usize>>,
}

impl EigenSpectrum {
    /// Create a spectrum from eigenvalues and per-band index groups.
    ///
    /// # Errors
    ///
    /// - [`BandError::EigenIndexOutOfRange`] if a group references an
    ///   index past the eigenvalue sequence.
    /// - [`BandError::OverlappingBandGroups`] if two groups share an index.
    /// - [`BandError::UncoveredEigenvalue`] if some index belongs to no
    ///   group.
    pub fn new(eigenvalues: Vec<f64>, band_groups: Vec<Vec<usize>>) -> BandResult<Self> {
        let eigenvalue_count = eigenvalues.len();
        let mut claimed = vec![false; eigenvalue_count];

        for (band, group) in band_groups.iter().enumerate() {
            for &index in group {
                if index >= eigenvalue_count {
                    return Err(BandError::EigenIndexOutOfRange {
                        band,
                        index,
                        eigenvalue_count,
                    });
                }
                if claimed[index] {
                    return Err(BandError::OverlappingBandGroups { index });
                }
                claimed[index] = true;
            }
        }

        if let Some(index) = claimed.iter().position(|&c| !c) {
            return Err(BandError::UncoveredEigenvalue { index });
        }

        Ok(Self {
            eigenvalues,
            band_groups,
        })
    }

    /// The ascending eigenvalue sequence.
    #[inline]
    #[must_use]
    pub fn eigenvalues(&self) -> &[f64] {
        &self.eigenvalues
    }

    /// Number of frequency bands (levels).
    #[inline]
    #[must_use]
    pub fn band_count(&self) -> usize {
        self.band_groups.len()
    }

    /// Eigenvalue index group for one band.
    #[must_use]
    pub fn band_group(&self, band: usize) -> Option<&[usize]> {
        self.band_groups.get(band).map(Vec::as_slice)
    }

    /// Iterate over all band index groups in band order.
    pub fn band_groups(&self) -> impl Iterator<Item = &[usize]> {
        self.band_groups.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_partition() {
        let spectrum =
            EigenSpectrum::new(vec![0.0, 1.0, 2.0], vec![vec![0], vec![2, 1]]).unwrap();
        assert_eq!(spectrum.band_count(), 2);
        assert_eq!(spectrum.eigenvalues().len(), 3);
    }

    #[test]
    fn accepts_empty_group() {
        let spectrum =
            EigenSpectrum::new(vec![0.0, 1.0], vec![vec![0, 1], vec![]]).unwrap();
        assert_eq!(spectrum.band_group(1), Some(&[][..]));
    }

    #[test]
    fn rejects_out_of_range_index() {
        let err = EigenSpectrum::new(vec![0.0, 1.0], vec![vec![0, 1, 5]]).unwrap_err();
        assert!(matches!(
            err,
            BandError::EigenIndexOutOfRange { index: 5, .. }
        ));
    }

    #[test]
    fn rejects_overlapping_groups() {
        let err = EigenSpectrum::new(vec![0.0, 1.0], vec![vec![0, 1], vec![1]]).unwrap_err();
        assert!(matches!(err, BandError::OverlappingBandGroups { index: 1 }));
    }

    #[test]
    fn rejects_uncovered_index() {
        let err = EigenSpectrum::new(vec![0.0, 1.0, 2.0], vec![vec![0], vec![2]]).unwrap_err();
        assert!(matches!(err, BandError::UncoveredEigenvalue { index: 1 }));
    }

    #[test]
    fn empty_spectrum_is_valid() {
        let spectrum = EigenSpectrum::new(vec![], vec![]).unwrap();
        assert_eq!(spectrum.band_count(), 0);
    }
}
