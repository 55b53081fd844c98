use std::pin::pin;
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use hotelmerge_core::{HotelFields, SupplierSource};
use hotelmerge_reconcile::{merge_hotel, MergePolicy};
use hotelmerge_store::HotelStore;
use hotelmerge_supplier::{PayloadFetcher, SupplierError, SupplierKind};
use serde_json::Value;

use crate::error::{LoadError, SourceFailure};
use crate::report::{LoadReport, SourceReport};

/// Loads every configured supplier source into a shared [`HotelStore`].
///
/// Feeds are fetched with bounded concurrency but merged strictly in
/// configured order, so a later source always reconciles on top of an
/// earlier one. A source is merged as soon as its feed and every earlier
/// feed have arrived; a stalled feed only holds back the sources after it. A `Loader` can run any number of times; each run merges on
/// top of what the store already holds.
pub struct Loader<F> {
    sources: Vec<SupplierSource>,
    fetcher: F,
    store: Arc<HotelStore>,
    policy: MergePolicy,
    max_concurrent: usize,
}

impl<F: PayloadFetcher> Loader<F> {
    #[must_use]
    pub fn new(sources: Vec<SupplierSource>, fetcher: F, store: Arc<HotelStore>) -> Self {
        Self {
            sources,
            fetcher,
            store,
            policy: MergePolicy::default(),
            max_concurrent: 1,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: MergePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Number of feeds fetched at once. Values below 1 are treated as 1.
    #[must_use]
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    /// Runs one load over every configured source.
    ///
    /// Individual elements that do not fit their supplier's shape are skipped
    /// and counted. A source that cannot be resolved, fetched or decoded is
    /// abandoned without affecting the others.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::SourcesFailed`] if any source was abandoned. The
    /// error still carries the report for the sources that were merged.
    pub async fn load_all(&self) -> Result<LoadReport, LoadError> {
        // Borrowed stream items defeat `Send` inference under `tokio::spawn`.
        let mut fetched = pin!(stream::iter(self.sources.clone())
            .map(|source| async move {
                let outcome = self.fetch_source(&source).await;
                (source, outcome)
            })
            .buffered(self.max_concurrent));

        let mut report = LoadReport::default();
        let mut failures = Vec::new();

        // Each source merges as soon as it and every source before it are in.
        while let Some((source, outcome)) = fetched.next().await {
            match outcome {
                Ok((kind, payloads)) => {
                    let source_report = self.merge_source(&source, kind, payloads);
                    tracing::info!(
                        supplier = %source.key,
                        url = %source.url,
                        merged = source_report.merged,
                        skipped = source_report.skipped,
                        "supplier source loaded"
                    );
                    report.sources.push(source_report);
                }
                Err(error) => {
                    tracing::error!(
                        supplier = %source.key,
                        url = %source.url,
                        error = %error,
                        "supplier source failed"
                    );
                    failures.push(SourceFailure {
                        supplier: source.key,
                        url: source.url,
                        error,
                    });
                }
            }
        }

        report.hotels = self.store.len();

        if failures.is_empty() {
            Ok(report)
        } else {
            tracing::warn!(
                failed_sources = failures.len(),
                total_sources = self.sources.len(),
                "some supplier sources failed during load"
            );
            Err(LoadError::SourcesFailed { failures, report })
        }
    }

    async fn fetch_source(
        &self,
        source: &SupplierSource,
    ) -> Result<(SupplierKind, Vec<Value>), SupplierError> {
        let kind: SupplierKind = source.key.parse()?;
        let payloads = self.fetcher.fetch(&source.url).await?;
        Ok((kind, payloads))
    }

    fn merge_source(
        &self,
        source: &SupplierSource,
        kind: SupplierKind,
        payloads: Vec<Value>,
    ) -> SourceReport {
        let mut merged = 0;
        let mut skipped = 0;

        for raw in payloads {
            match kind.decode(raw) {
                Ok(record) => {
                    self.store.upsert(record.id(), |existing| {
                        merge_hotel(existing, &record, &self.policy)
                    });
                    merged += 1;
                }
                Err(error) => {
                    tracing::warn!(
                        supplier = %source.key,
                        url = %source.url,
                        error = %error,
                        "skipping supplier record"
                    );
                    skipped += 1;
                }
            }
        }

        SourceReport {
            supplier: source.key.clone(),
            url: source.url.clone(),
            merged,
            skipped,
        }
    }
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
