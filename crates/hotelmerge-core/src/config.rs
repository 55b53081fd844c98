use crate::app_config::{AppConfig, Environment};
use crate::sources::{parse_supplier_sources, SUPPLIER_CONFIG_VAR};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Like [`load_app_config`], but `supplier_sources`, when given, replaces
/// the `HOTELMERGE_SUPPLIER_CONFIG` environment variable.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_with_sources(
    supplier_sources: Option<&str>,
) -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(|key| match supplier_sources {
        Some(raw) if key == SUPPLIER_CONFIG_VAR => Ok(raw.to_string()),
        _ => std::env::var(key),
    })
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let supplier_sources = parse_supplier_sources(&require(SUPPLIER_CONFIG_VAR)?)?;

    let env = parse_environment(&or_default("HOTELMERGE_ENV", "development"))?;

    let bind_addr = or_default("HOTELMERGE_BIND_ADDR", "0.0.0.0:8080")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("HOTELMERGE_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("HOTELMERGE_LOG_LEVEL", "info");

    let fetch_timeout_secs = parse_u64("HOTELMERGE_FETCH_TIMEOUT_SECS", "30")?;
    let fetch_user_agent = or_default(
        "HOTELMERGE_FETCH_USER_AGENT",
        "hotelmerge/0.1 (supplier-ingest)",
    );
    let fetch_max_retries = parse_u32("HOTELMERGE_FETCH_MAX_RETRIES", "0")?;
    let fetch_retry_backoff_base_secs = parse_u64("HOTELMERGE_FETCH_RETRY_BACKOFF_BASE_SECS", "1")?;
    let max_concurrent_fetches = parse_usize("HOTELMERGE_MAX_CONCURRENT_FETCHES", "1")?;
    if max_concurrent_fetches == 0 {
        return Err(invalid(
            "HOTELMERGE_MAX_CONCURRENT_FETCHES",
            "must be at least 1".to_string(),
        ));
    }

    let reload_cron = lookup("HOTELMERGE_RELOAD_CRON")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        supplier_sources,
        fetch_timeout_secs,
        fetch_user_agent,
        fetch_max_retries,
        fetch_retry_backoff_base_secs,
        max_concurrent_fetches,
        reload_cron,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "HOTELMERGE_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
