//! Common types and traits for all aggregates

pub mod address;
pub mod aggregate_root;
pub mod base_aggregate;

// Re-exports
pub use address::Address;
pub use aggregate_root::AggregateRoot;
pub use base_aggregate::BaseAggregate;
