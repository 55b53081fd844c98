//! HTTP client for supplier feeds. Each feed URL serves one JSON array of
//! hotel objects in that supplier's shape.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::error::SupplierError;
use crate::retry::retry_with_backoff;

/// Fetches and decodes a supplier feed into its raw, still-untyped elements.
///
/// This is the network seam of the load pipeline: [`SupplierClient`] is the
/// production implementation and tests substitute in-memory fixtures.
pub trait PayloadFetcher: Send + Sync {
    /// # Errors
    ///
    /// Returns [`SupplierError::Http`] or [`SupplierError::UnexpectedStatus`]
    /// when the source cannot be reached, and [`SupplierError::Decode`] when
    /// the body is not a JSON array.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<Value>, SupplierError>> + Send;
}

/// reqwest-backed [`PayloadFetcher`].
///
/// Non-2xx responses become [`SupplierError::UnexpectedStatus`]. Network
/// failures, 429 and 5xx are retried with exponential backoff up to
/// `max_retries` additional attempts.
#[derive(Debug, Clone)]
pub struct SupplierClient {
    client: Client,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl SupplierClient {
    /// Creates a `SupplierClient` with configured timeout, `User-Agent`, and retry policy.
    ///
    /// # Errors
    ///
    /// Returns [`SupplierError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, SupplierError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Builds a client from the fetch settings of [`hotelmerge_core::AppConfig`].
    ///
    /// # Errors
    ///
    /// See [`SupplierClient::new`].
    pub fn from_config(config: &hotelmerge_core::AppConfig) -> Result<Self, SupplierError> {
        Self::new(
            config.fetch_timeout_secs,
            &config.fetch_user_agent,
            config.fetch_max_retries,
            config.fetch_retry_backoff_base_secs,
        )
    }

    /// Fetches one supplier feed and splits it into raw elements.
    ///
    /// # Errors
    ///
    /// - [`SupplierError::UnexpectedStatus`] — any non-2xx status (429/5xx retried first).
    /// - [`SupplierError::Http`] — network or TLS failure after all retries exhausted.
    /// - [`SupplierError::Decode`] — body is not a JSON array (not retried).
    pub async fn fetch_payloads(&self, url: &str) -> Result<Vec<Value>, SupplierError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || async move {
            let response = self
                .client
                .get(url)
                .header(reqwest::header::ACCEPT, "application/json")
                .send()
                .await?;
            let status = response.status();

            if !status.is_success() {
                return Err(SupplierError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: url.to_owned(),
                });
            }

            let body = response.text().await?;
            decode_payload_array(&body, url)
        })
        .await
    }
}

impl PayloadFetcher for SupplierClient {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<Value>, SupplierError>> + Send {
        self.fetch_payloads(url)
    }
}

/// Decodes a whole feed body. Individual elements are left untyped so one
/// malformed hotel does not reject the rest of the feed.
fn decode_payload_array(body: &str, url: &str) -> Result<Vec<Value>, SupplierError> {
    serde_json::from_str::<Vec<Value>>(body).map_err(|e| SupplierError::Decode {
        context: format!("supplier feed from {url}"),
        source: e,
    })
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
