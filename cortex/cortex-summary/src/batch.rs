//! Batch summarization over independent surfaces.
//!
//! One surface is the unit of parallelism: subjects and hemispheres have
//! no data dependency on each other, so the fan-out is a plain parallel
//! map. A failed surface is logged and omitted from the output; it never
//! aborts or pads the rows of its siblings.

use rayon::prelude::*;
use tracing::{info, warn};

use crate::{
    summarize_surface, SummaryConfig, SummaryError, SurfaceInputs, SurfaceKey, SurfaceSummary,
};

/// One surface that could not be summarized, with its typed failure.
#[derive(Debug)]
pub struct SurfaceFailure {
    /// Identity of the failed surface.
    pub key: SurfaceKey,
    /// Why it failed.
    pub error: SummaryError,
}

/// Result of a batch run: the successful rows plus the failures.
///
/// Summaries keep the input order of their surfaces; failed surfaces are
/// omitted from `summaries`, not padded with placeholder rows.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Summaries of the surfaces that processed cleanly, in input order.
    pub summaries: Vec<SurfaceSummary>,
    /// Surfaces that failed, in input order.
    pub failures: Vec<SurfaceFailure>,
}

impl BatchOutcome {
    /// Whether every surface in the batch was summarized.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Summarize a batch of surfaces in parallel.
///
/// Each surface is processed independently; failures are isolated,
/// logged with their surface key, and collected rather than propagated.
///
/// # Example
///
/// ```
/// use cortex_summary::{summarize_batch, SummaryConfig};
///
/// let outcome = summarize_batch(&[], &SummaryConfig::default());
/// assert!(outcome.is_complete());
/// ```
#[must_use]
pub fn summarize_batch(inputs: &[SurfaceInputs], config: &SummaryConfig) -> BatchOutcome {
    info!(surfaces = inputs.len(), "starting batch summarization");

    let results: Vec<Result<SurfaceSummary, SurfaceFailure>> = inputs
        .par_iter()
        .map(|input| match summarize_surface(input, config) {
            Ok(summary) => {
                info!(
                    surface = %input.key,
                    secs = summary.processing_secs,
                    "surface summarized"
                );
                Ok(summary)
            }
            Err(error) => {
                warn!(surface = %input.key, error = %error, "surface skipped");
                Err(SurfaceFailure {
                    key: input.key.clone(),
                    error,
                })
            }
        })
        .collect();

    let mut outcome = BatchOutcome::default();
    for result in results {
        match result {
            Ok(summary) => outcome.summaries.push(summary),
            Err(failure) => outcome.failures.push(failure),
        }
    }

    info!(
        summarized = outcome.summaries.len(),
        failed = outcome.failures.len(),
        "batch summarization finished"
    );

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hemisphere;
    use cortex_bands::{DominanceMap, EigenSpectrum};
    use cortex_surface::unit_cube;

    fn good_inputs(subject: &str) -> SurfaceInputs {
        let spectrum = EigenSpectrum::new(vec![0.0, 2.0], vec![vec![0], vec![1]]).unwrap();
        SurfaceInputs::new(
            SurfaceKey::new(subject, "ses-01", Hemisphere::Right),
            40.0,
            unit_cube(),
        )
        .with_decomposition(spectrum, vec![1.0, 1.0])
        .with_dominance(DominanceMap::new(vec![1; 8]))
        .with_hull_area(6.0)
    }

    #[test]
    fn all_surfaces_summarized() {
        let inputs = vec![good_inputs("sub-01"), good_inputs("sub-02")];
        let outcome = summarize_batch(&inputs, &SummaryConfig::default());

        assert!(outcome.is_complete());
        assert_eq!(outcome.summaries.len(), 2);
        assert_eq!(outcome.summaries[0].key.subject, "sub-01");
        assert_eq!(outcome.summaries[1].key.subject, "sub-02");
    }

    #[test]
    fn failure_is_isolated() {
        let mut broken = good_inputs("sub-02");
        broken.dominance = None;

        let inputs = vec![good_inputs("sub-01"), broken, good_inputs("sub-03")];
        let outcome = summarize_batch(&inputs, &SummaryConfig::default());

        assert!(!outcome.is_complete());
        assert_eq!(outcome.summaries.len(), 2);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].key.subject, "sub-02");
        assert!(outcome.failures[0].error.is_upstream());

        // Siblings keep their order, no placeholder row in between
        assert_eq!(outcome.summaries[0].key.subject, "sub-01");
        assert_eq!(outcome.summaries[1].key.subject, "sub-03");
    }

    #[test]
    fn empty_batch_is_complete() {
        let outcome = summarize_batch(&[], &SummaryConfig::default());
        assert!(outcome.is_complete());
        assert!(outcome.summaries.is_empty());
    }
}
