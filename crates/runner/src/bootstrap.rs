//! Reference tariff catalog
//!
//! The seed data the storage engine would normally carry: four tariffs for
//! product 35455 of brand 1, with higher-priority overlays overlapping a
//! year-long base price.

use hermes_core::Timestamp;
use hermes_store::{InMemoryPriceStore, StoredPrice};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

fn row(
    price_list: u32,
    priority: u32,
    start: Timestamp,
    end: Timestamp,
    amount: Decimal,
) -> StoredPrice {
    StoredPrice {
        id: Uuid::new_v4(),
        brand_id: 1,
        product_id: 35455,
        price_list,
        start_date: start,
        end_date: end,
        priority,
        amount,
        currency: "EUR".to_string(),
    }
}

/// Seed the in-memory store with the reference catalog
pub fn seed_reference_catalog() -> Result<InMemoryPriceStore, chrono::ParseError> {
    let year_start: Timestamp = "2020-06-14T00:00:00Z".parse()?;
    let year_end: Timestamp = "2020-12-31T23:59:59Z".parse()?;

    let store = InMemoryPriceStore::new();
    store.insert(row(1, 0, year_start, year_end, dec!(35.50)));
    store.insert(row(
        2,
        1,
        "2020-06-14T15:00:00Z".parse()?,
        "2020-06-14T18:30:00Z".parse()?,
        dec!(25.45),
    ));
    store.insert(row(
        3,
        1,
        "2020-06-15T00:00:00Z".parse()?,
        "2020-06-15T11:00:00Z".parse()?,
        dec!(30.50),
    ));
    store.insert(row(4, 1, "2020-06-15T16:00:00Z".parse()?, year_end, dec!(38.95)));
    Ok(store)
}
