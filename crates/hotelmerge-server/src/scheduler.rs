//! Background job scheduler.
//!
//! Initialises a [`JobScheduler`] at server startup and, when a reload cron
//! expression is configured, registers the recurring supplier reload.

use std::sync::Arc;

use hotelmerge_loader::Loader;
use hotelmerge_supplier::SupplierClient;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

/// Builds and starts the background job scheduler.
///
/// Returns the running [`JobScheduler`] handle, which must be kept alive
/// for the lifetime of the process. Dropping it shuts down all jobs.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised,
/// `reload_cron` is not a valid cron expression, or the scheduler fails to
/// start.
pub async fn build_scheduler(
    loader: Arc<Loader<SupplierClient>>,
    reload_cron: Option<&str>,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;

    if let Some(cron) = reload_cron {
        register_reload_job(&scheduler, loader, cron).await?;
    } else {
        tracing::info!("scheduler: no reload cron configured; suppliers load at startup only");
    }

    scheduler.start().await?;
    Ok(scheduler)
}

async fn register_reload_job(
    scheduler: &JobScheduler,
    loader: Arc<Loader<SupplierClient>>,
    cron: &str,
) -> Result<(), JobSchedulerError> {
    let job = Job::new_async(cron, move |_uuid, _lock| {
        let loader = Arc::clone(&loader);
        Box::pin(async move {
            run_load(&loader, "scheduled").await;
        })
    })?;

    scheduler.add(job).await?;
    tracing::info!(cron, "scheduler: registered supplier reload job");
    Ok(())
}

/// Runs one full load and logs its outcome. Load failures are never fatal to
/// the server; the store keeps whatever was merged.
pub async fn run_load(loader: &Loader<SupplierClient>, trigger: &'static str) {
    tracing::info!(trigger, "starting supplier load");
    match loader.load_all().await {
        Ok(report) => tracing::info!(
            trigger,
            merged = report.merged(),
            skipped = report.skipped(),
            hotels = report.hotels,
            "supplier load complete"
        ),
        Err(err) => tracing::error!(
            trigger,
            error = %err,
            failed_sources = err.failures().len(),
            hotels = err.report().hotels,
            "supplier load finished with failures"
        ),
    }
}
