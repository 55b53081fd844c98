//! `load` command: one pass over every supplier source, then print.
//!
//! Partial failures are reported on stderr and still print whatever was
//! merged. Only a run where every source failed exits non-zero.

use std::sync::Arc;

use hotelmerge_core::{AppConfig, Hotel};
use hotelmerge_loader::Loader;
use hotelmerge_store::HotelStore;
use hotelmerge_supplier::SupplierClient;

pub(crate) async fn run_load(
    config: &AppConfig,
    ids: &[String],
    destination: Option<i64>,
) -> anyhow::Result<()> {
    let client = SupplierClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build supplier client: {e}"))?;
    let store = Arc::new(HotelStore::new());
    let loader = Loader::new(config.supplier_sources.clone(), client, Arc::clone(&store))
        .with_max_concurrent(config.max_concurrent_fetches);

    let all_failed = match loader.load_all().await {
        Ok(report) => {
            tracing::info!(
                sources = report.sources.len(),
                merged = report.merged(),
                skipped = report.skipped(),
                hotels = report.hotels,
                "load complete"
            );
            false
        }
        Err(err) => {
            for failure in err.failures() {
                eprintln!("error: {failure}");
            }
            tracing::warn!(error = %err, "load finished with failures");
            err.all_failed()
        }
    };

    let hotels = select_hotels(&store, ids, destination);
    println!("{}", serde_json::to_string_pretty(&hotels)?);

    if all_failed {
        anyhow::bail!(
            "all {} supplier sources failed",
            config.supplier_sources.len()
        );
    }
    Ok(())
}

/// Ids win over the destination; with neither filter every hotel is returned.
pub(crate) fn select_hotels(store: &HotelStore, ids: &[String], destination: Option<i64>) -> Vec<Hotel> {
    if !ids.is_empty() {
        store.get_by_ids(ids)
    } else if let Some(destination_id) = destination {
        store.get_by_destination(destination_id)
    } else {
        store.all()
    }
}
