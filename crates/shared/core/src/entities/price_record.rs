use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::values::{BrandId, Money, Priority, ProductId, Timestamp, ValidityPeriod};

/// Unique identifier for a persisted price record
pub type PriceRecordId = Uuid;

/// One priced, time-bounded, prioritized offer for a (product, brand,
/// price list) triple
///
/// Records are immutable once constructed. The identity is assigned by the
/// persistence boundary when a stored row is materialized; a record that has
/// not been persisted carries none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRecord {
    id: Option<PriceRecordId>,
    product_id: ProductId,
    brand_id: BrandId,
    /// Tariff this price belongs to (base price, promotion, regional
    /// override, ...)
    price_list: u32,
    validity: ValidityPeriod,
    priority: Priority,
    price: Money,
}

impl PriceRecord {
    /// Construct a record, validating the price list tag
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Option<PriceRecordId>,
        product_id: ProductId,
        brand_id: BrandId,
        price_list: u32,
        validity: ValidityPeriod,
        priority: Priority,
        price: Money,
    ) -> DomainResult<Self> {
        if price_list == 0 {
            return Err(DomainError::InvalidPriceList);
        }
        Ok(Self {
            id,
            product_id,
            brand_id,
            price_list,
            validity,
            priority,
            price,
        })
    }

    pub fn id(&self) -> Option<PriceRecordId> {
        self.id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn brand_id(&self) -> BrandId {
        self.brand_id
    }

    pub fn price_list(&self) -> u32 {
        self.price_list
    }

    pub fn validity(&self) -> ValidityPeriod {
        self.validity
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    /// Whether this record prices the given product for the given brand
    pub fn belongs_to(&self, product_id: ProductId, brand_id: BrandId) -> bool {
        self.product_id == product_id && self.brand_id == brand_id
    }

    /// Whether the record's validity window covers the instant
    pub fn is_applicable_at(&self, at: Timestamp) -> bool {
        self.validity.contains(at)
    }

    /// Whether the record answers a (product, brand, instant) query
    pub fn is_applicable_for(&self, product_id: ProductId, brand_id: BrandId, at: Timestamp) -> bool {
        self.belongs_to(product_id, brand_id) && self.is_applicable_at(at)
    }

    /// Strictly higher precedence than `other`
    ///
    /// Equal priorities yield false in both directions.
    pub fn has_higher_priority_than(&self, other: &PriceRecord) -> bool {
        self.priority.is_higher_than(&other.priority)
    }
}

/// Identity equality: two records are interchangeable only once both are
/// persisted under the same id. A record without an id never compares equal,
/// not even to itself, so `Eq` is deliberately left unimplemented.
impl PartialEq for PriceRecord {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    fn record(id: Option<PriceRecordId>, product: u64, brand: u64) -> PriceRecord {
        record_with_priority(id, product, brand, 0)
    }

    fn record_with_priority(
        id: Option<PriceRecordId>,
        product: u64,
        brand: u64,
        priority: u32,
    ) -> PriceRecord {
        PriceRecord::new(
            id,
            ProductId::new(product).unwrap(),
            BrandId::new(brand).unwrap(),
            1,
            ValidityPeriod::new(ts("2020-06-14T00:00:00Z"), ts("2020-12-31T23:59:59Z")).unwrap(),
            Priority::new(priority),
            Money::new(dec!(35.50), "EUR").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_zero_price_list_rejected() {
        let result = PriceRecord::new(
            None,
            ProductId::new(35455).unwrap(),
            BrandId::new(1).unwrap(),
            0,
            ValidityPeriod::new(ts("2020-06-14T00:00:00Z"), ts("2020-12-31T23:59:59Z")).unwrap(),
            Priority::new(0),
            Money::new(dec!(35.50), "EUR").unwrap(),
        );
        assert_eq!(result.unwrap_err(), DomainError::InvalidPriceList);
    }

    #[test]
    fn test_applicability_needs_ids_and_window() {
        let rec = record(None, 35455, 1);
        let product = ProductId::new(35455).unwrap();
        let brand = BrandId::new(1).unwrap();
        let inside = ts("2020-06-14T10:00:00Z");

        assert!(rec.is_applicable_for(product, brand, inside));
        // Wrong product
        assert!(!rec.is_applicable_for(ProductId::new(99).unwrap(), brand, inside));
        // Wrong brand
        assert!(!rec.is_applicable_for(product, BrandId::new(2).unwrap(), inside));
        // Outside the window
        assert!(!rec.is_applicable_for(product, brand, ts("2021-01-01T00:00:00Z")));
    }

    #[test]
    fn test_priority_predicate_is_strict() {
        let base = record_with_priority(None, 35455, 1, 0);
        let promo = record_with_priority(None, 35455, 1, 1);
        let other_promo = record_with_priority(None, 35455, 1, 1);

        assert!(promo.has_higher_priority_than(&base));
        assert!(!base.has_higher_priority_than(&promo));
        // Equal priorities: false both ways
        assert!(!promo.has_higher_priority_than(&other_promo));
        assert!(!other_promo.has_higher_priority_than(&promo));
    }

    #[test]
    fn test_equality_is_identity_based() {
        let id = Uuid::new_v4();
        let persisted = record(Some(id), 35455, 1);
        let same_id_other_fields = record(Some(id), 99999, 2);
        let other_id = record(Some(Uuid::new_v4()), 35455, 1);

        // Same identity, even with different business fields
        assert_eq!(persisted, same_id_other_fields);
        assert_ne!(persisted, other_id);
    }

    #[test]
    fn test_unpersisted_records_never_equal() {
        let a = record(None, 35455, 1);
        let b = record(None, 35455, 1);
        let persisted = record(Some(Uuid::new_v4()), 35455, 1);

        assert_ne!(a, b);
        assert_ne!(a, persisted);
        // Not even reflexively
        assert_ne!(a, a.clone());
    }
}
