use hotelmerge_supplier::SupplierError;
use thiserror::Error;

use crate::report::LoadReport;

/// A supplier source that was abandoned as a whole: unknown supplier key,
/// unreachable feed, or a body that is not a JSON array.
#[derive(Debug, Error)]
#[error("supplier source {supplier}:{url} failed: {error}")]
pub struct SourceFailure {
    pub supplier: String,
    pub url: String,
    #[source]
    pub error: SupplierError,
}

#[derive(Debug, Error)]
pub enum LoadError {
    /// At least one source failed. The sources that succeeded were still
    /// merged and are counted in `report`.
    #[error(
        "{} of {} supplier sources failed",
        .failures.len(),
        .failures.len() + .report.sources.len()
    )]
    SourcesFailed {
        failures: Vec<SourceFailure>,
        report: LoadReport,
    },
}

impl LoadError {
    /// Returns `true` when no source could be loaded at all.
    #[must_use]
    pub fn all_failed(&self) -> bool {
        match self {
            LoadError::SourcesFailed { report, .. } => report.sources.is_empty(),
        }
    }

    #[must_use]
    pub fn failures(&self) -> &[SourceFailure] {
        match self {
            LoadError::SourcesFailed { failures, .. } => failures,
        }
    }

    #[must_use]
    pub fn report(&self) -> &LoadReport {
        match self {
            LoadError::SourcesFailed { report, .. } => report,
        }
    }
}
