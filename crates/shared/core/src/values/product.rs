use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of a product in the catalog
///
/// Wraps the raw numeric id so it cannot be swapped with a brand id at a
/// call site. Zero is not a valid identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(u64);

impl ProductId {
    /// Create a product id, rejecting zero
    pub fn new(value: u64) -> DomainResult<Self> {
        if value == 0 {
            return Err(DomainError::NonPositiveIdentifier {
                field: "product id",
            });
        }
        Ok(Self(value))
    }

    /// Get the raw numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_creation() {
        let id = ProductId::new(35455).unwrap();
        assert_eq!(id.value(), 35455);
        assert_eq!(format!("{}", id), "35455");
    }

    #[test]
    fn test_zero_product_id_rejected() {
        assert_eq!(
            ProductId::new(0),
            Err(DomainError::NonPositiveIdentifier {
                field: "product id"
            })
        );
    }

    #[test]
    fn test_product_id_value_equality() {
        assert_eq!(ProductId::new(7).unwrap(), ProductId::new(7).unwrap());
        assert_ne!(ProductId::new(7).unwrap(), ProductId::new(8).unwrap());
    }
}
