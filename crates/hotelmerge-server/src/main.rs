mod api;
mod middleware;
mod scheduler;

use std::sync::Arc;

use hotelmerge_loader::Loader;
use hotelmerge_store::HotelStore;
use hotelmerge_supplier::SupplierClient;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = hotelmerge_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(
        env = %config.env,
        sources = config.supplier_sources.len(),
        "starting hotelmerge-server"
    );

    let store = Arc::new(HotelStore::new());
    let client = SupplierClient::from_config(&config)?;
    let loader = Arc::new(
        Loader::new(config.supplier_sources.clone(), client, Arc::clone(&store))
            .with_max_concurrent(config.max_concurrent_fetches),
    );

    let startup_loader = Arc::clone(&loader);
    tokio::spawn(async move {
        scheduler::run_load(&startup_loader, "startup").await;
    });

    let _scheduler =
        scheduler::build_scheduler(Arc::clone(&loader), config.reload_cron.as_deref()).await?;

    let app = build_app(AppState { store, loader });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
