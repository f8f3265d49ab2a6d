//! Hermes Core Domain
//!
//! Pure domain types for the Hermes price resolution service.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod error;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{PriceRecord, PriceRecordId};
pub use error::{DomainError, DomainResult};
pub use values::{BrandId, Money, Priority, ProductId, Timestamp, ValidityPeriod};
