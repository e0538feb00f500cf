//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod text;

// Re-exports
pub use aggregate_id::AggregateId;
pub use text::{format_number, loose_key, non_blank, normalize_key};
