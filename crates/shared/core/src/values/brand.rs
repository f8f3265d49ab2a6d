use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of a brand (retail chain)
///
/// Zero is not a valid identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrandId(u64);

impl BrandId {
    /// Create a brand id, rejecting zero
    pub fn new(value: u64) -> DomainResult<Self> {
        if value == 0 {
            return Err(DomainError::NonPositiveIdentifier { field: "brand id" });
        }
        Ok(Self(value))
    }

    /// Get the raw numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for BrandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
