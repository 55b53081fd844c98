use thiserror::Error;

#[derive(Debug, Error)]
pub enum SupplierError {
    /// Transport failure reaching a supplier source.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// Malformed payload, either a whole source body or a single record.
    #[error("JSON deserialization error for {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{supplier} record has an empty hotel id")]
    EmptyId { supplier: &'static str },

    #[error("unknown supplier key \"{0}\"")]
    UnknownSupplierKey(String),
}
