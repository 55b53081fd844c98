//! Field-by-field reconciliation of supplier hotel records into one
//! canonical [`hotelmerge_core::Hotel`].

pub mod case;
pub mod dedup;
pub mod engine;
pub mod rules;

pub use case::CaseTransform;
pub use dedup::DedupSet;
pub use engine::{merge_hotel, MergePolicy};
