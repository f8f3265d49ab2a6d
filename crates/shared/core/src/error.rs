//! Domain validation errors
//!
//! Raised when a value object or entity rejects its input at construction.
//! Validation is local and immediate: the boundary creating the value fails
//! fast, nothing half-built crosses into the domain.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::values::Timestamp;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("validity period start {start} must not be after end {end}")]
    InvalidRange { start: Timestamp, end: Timestamp },

    #[error("{field} must be a positive integer")]
    NonPositiveIdentifier { field: &'static str },

    #[error("monetary amount must be non-negative, got {amount}")]
    NegativeAmount { amount: Decimal },

    #[error("currency must be a three-letter code, got {code:?}")]
    InvalidCurrency { code: String },

    #[error("cannot combine amounts in {left} with {right}")]
    CurrencyMismatch { left: String, right: String },

    #[error("price list tag must be a positive integer")]
    InvalidPriceList,
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;
