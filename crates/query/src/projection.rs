use hermes_core::PriceRecord;
use rust_decimal::Decimal;
use serde::Serialize;

/// Output shape for a resolved price
///
/// Exposes what callers consume and nothing else: record identity and the
/// validity window stay internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceProjection {
    pub product_id: u64,
    pub brand_id: u64,
    pub price_list: u32,
    pub price: Decimal,
    pub currency: String,
}

impl From<&PriceRecord> for PriceProjection {
    fn from(record: &PriceRecord) -> Self {
        Self {
            product_id: record.product_id().value(),
            brand_id: record.brand_id().value(),
            price_list: record.price_list(),
            price: record.price().amount(),
            currency: record.price().currency().to_string(),
        }
    }
}
