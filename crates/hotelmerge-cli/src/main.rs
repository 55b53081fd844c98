mod load;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "hotelmerge-cli")]
#[command(about = "Hotel supplier reconciliation command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load every supplier source once and print the reconciled hotels.
    Load {
        /// Supplier sources as `supplierKey:url[,supplierKey:url...]`.
        /// Defaults to `HOTELMERGE_SUPPLIER_CONFIG`.
        #[arg(long)]
        suppliers: Option<String>,
        /// Only print these hotel ids (comma-separated).
        #[arg(long, value_delimiter = ',')]
        ids: Vec<String>,
        /// Only print hotels in this destination. Ignored when `--ids` is set.
        #[arg(long)]
        destination: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Load {
            suppliers,
            ids,
            destination,
        } => {
            let config = hotelmerge_core::load_app_config_with_sources(suppliers.as_deref())?;
            init_tracing(&config.log_level)?;
            load::run_load(&config, &ids, destination).await
        }
    }
}

/// Logs go to stderr so stdout carries only the JSON result.
fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
