use serde::Serialize;

/// Counts for one supplier source that was fetched successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    pub supplier: String,
    pub url: String,
    /// Elements adapted and merged into the store.
    pub merged: usize,
    /// Elements that did not fit the supplier's shape and were dropped.
    pub skipped: usize,
}

/// Outcome of one [`crate::Loader::load_all`] run, in configured source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub sources: Vec<SourceReport>,
    /// Store size once the run finished.
    pub hotels: usize,
}

impl LoadReport {
    #[must_use]
    pub fn merged(&self) -> usize {
        self.sources.iter().map(|s| s.merged).sum()
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.sources.iter().map(|s| s.skipped).sum()
    }
}
