pub mod app_config;
pub mod config;
pub mod hotel;
pub mod sources;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, load_app_config_with_sources};
pub use hotel::{Amenities, Hotel, HotelFields, Image, Images, Location};
pub use sources::{parse_supplier_sources, SupplierSource};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
