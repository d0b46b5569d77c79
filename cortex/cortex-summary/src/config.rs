//! Summarization configuration.
//!
//! All run-level choices live in one explicit structure resolved by the
//! caller at process start. The core takes no filesystem paths at all;
//! where results go is the aggregator's concern.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for assembling surface summaries.
///
/// # Example
///
/// ```
/// use cortex_summary::SummaryConfig;
///
/// let config = SummaryConfig::default().with_sulcal_bands(true);
/// assert!(config.include_sulcal);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SummaryConfig {
    /// Emit a row for label 0 (vertices with no dominant band).
    pub include_unassigned: bool,

    /// Emit rows for the negative (sulcal-dominant) labels in addition
    /// to the positive (gyral-dominant) ones.
    pub include_sulcal: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            include_unassigned: true,
            include_sulcal: false,
        }
    }
}

impl SummaryConfig {
    /// Set whether the label-0 row is emitted.
    #[must_use]
    pub const fn with_unassigned_band(mut self, include: bool) -> Self {
        self.include_unassigned = include;
        self
    }

    /// Set whether sulcal (negative-label) rows are emitted.
    #[must_use]
    pub const fn with_sulcal_bands(mut self, include: bool) -> Self {
        self.include_sulcal = include;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_emits_gyral_rows_only() {
        let config = SummaryConfig::default();
        assert!(config.include_unassigned);
        assert!(!config.include_sulcal);
    }

    #[test]
    fn builders_toggle_fields() {
        let config = SummaryConfig::default()
            .with_unassigned_band(false)
            .with_sulcal_bands(true);
        assert!(!config.include_unassigned);
        assert!(config.include_sulcal);
    }
}
