pub mod adapter;
pub mod client;
pub mod error;
pub mod normalize;
mod retry;
pub mod types;

pub use adapter::{SupplierKind, SupplierRecord};
pub use client::{PayloadFetcher, SupplierClient};
pub use error::SupplierError;
