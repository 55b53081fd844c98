//! Load pipeline: fetch every configured supplier feed, adapt each element,
//! and reconcile it into the shared [`hotelmerge_store::HotelStore`].

pub mod error;
pub mod loader;
pub mod report;

pub use error::{LoadError, SourceFailure};
pub use loader::Loader;
pub use report::{LoadReport, SourceReport};
