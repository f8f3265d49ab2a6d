use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw persisted shape of a price record
///
/// Plain primitives, no domain invariants enforced yet. Whatever engine
/// backs the adapter, this is the row it returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredPrice {
    pub id: Uuid,
    pub brand_id: u64,
    pub product_id: u64,
    pub price_list: u32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub priority: u32,
    pub amount: Decimal,
    pub currency: String,
}
