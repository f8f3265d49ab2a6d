//! Hermes Resolution
//!
//! Selection algorithm implementations for the Hermes price resolution
//! service, plus the conflict checks run before a new tariff is registered.

pub mod conflict;
mod priority_recency;

pub use priority_recency::PriorityRecencyResolver;
