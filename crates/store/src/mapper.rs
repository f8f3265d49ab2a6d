//! Row-to-domain mapping
//!
//! All value-object validation runs here: a malformed row cannot cross into
//! the domain, it surfaces as a materialization fault instead.

use hermes_core::{
    BrandId, DomainResult, Money, PriceRecord, Priority, ProductId, ValidityPeriod,
};

use crate::row::StoredPrice;

/// Materialize a domain record from a stored row
///
/// The record carries the row's identity; this is the lifecycle point where
/// a price record becomes "persisted".
pub fn materialize(row: &StoredPrice) -> DomainResult<PriceRecord> {
    let product_id = ProductId::new(row.product_id)?;
    let brand_id = BrandId::new(row.brand_id)?;
    let validity = ValidityPeriod::new(row.start_date, row.end_date)?;
    let price = Money::new(row.amount, &row.currency)?;

    PriceRecord::new(
        Some(row.id),
        product_id,
        brand_id,
        row.price_list,
        validity,
        Priority::new(row.priority),
        price,
    )
}
