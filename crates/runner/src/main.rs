//! Hermes runner
//!
//! Composition root: wires the in-memory store, the priority/recency
//! resolver, and the query service, seeds the reference tariff catalog, and
//! walks through the canonical lookups.

mod bootstrap;

use std::sync::Arc;

use hermes_clock::SystemClock;
use hermes_core::{BrandId, ProductId, Timestamp};
use hermes_query::PriceQueryService;
use hermes_resolution::PriorityRecencyResolver;
use log::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let store = Arc::new(bootstrap::seed_reference_catalog()?);
    info!("seeded {} price rows", store.len());

    let service = PriceQueryService::new(
        store,
        Arc::new(PriorityRecencyResolver::new()),
        Arc::new(SystemClock::new()),
    );

    let product = ProductId::new(35455)?;
    let brand = BrandId::new(1)?;

    let instants = [
        "2020-06-14T10:00:00Z",
        "2020-06-14T16:00:00Z",
        "2020-06-14T21:00:00Z",
        "2020-06-15T10:00:00Z",
        "2020-06-16T21:00:00Z",
    ];
    for instant in instants {
        let at: Timestamp = instant.parse()?;
        let projection = service.resolve_price(product, brand, at).await?;
        info!(
            "{} -> price list {}: {} {}",
            at, projection.price_list, projection.price, projection.currency
        );
    }

    // A pair with no tariffs resolves to a reportable not-found, not a fault
    let unknown = ProductId::new(99999)?;
    let at: Timestamp = "2020-06-14T10:00:00Z".parse()?;
    if let Err(outcome) = service.resolve_price(unknown, brand, at).await {
        warn!("{}", outcome);
    }

    Ok(())
}
