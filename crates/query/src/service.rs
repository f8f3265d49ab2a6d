use std::sync::Arc;

use hermes_core::{BrandId, PriceRecord, ProductId, Timestamp};
use hermes_ports::{Clock, PriceRepository, PriceResolver};
use hermes_resolution::conflict;
use log::{debug, info};

use crate::error::{QueryError, QueryResult};
use crate::projection::PriceProjection;

/// Coordinates one price lookup end to end
///
/// Fetches candidates, delegates selection to the resolver, and maps the
/// outcome: a winner becomes a `PriceProjection`, absence becomes
/// `QueryError::PriceNotFound`. Each call is an independent request/response
/// cycle; the service holds no mutable state.
pub struct PriceQueryService {
    repository: Arc<dyn PriceRepository>,
    resolver: Arc<dyn PriceResolver>,
    clock: Arc<dyn Clock>,
}

impl PriceQueryService {
    pub fn new(
        repository: Arc<dyn PriceRepository>,
        resolver: Arc<dyn PriceResolver>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            resolver,
            clock,
        }
    }

    /// Resolve the applicable price for a product and brand at an instant
    pub async fn resolve_price(
        &self,
        product_id: ProductId,
        brand_id: BrandId,
        at: Timestamp,
    ) -> QueryResult<PriceProjection> {
        let candidates = self
            .repository
            .find_applicable(product_id, brand_id, at)
            .await?;
        debug!(
            "resolving among {} candidates via {}",
            candidates.len(),
            self.resolver.name()
        );

        let winner = self
            .resolver
            .select_applicable(&candidates, product_id, brand_id, at)
            .ok_or(QueryError::PriceNotFound {
                product_id,
                brand_id,
                at,
            })?;

        info!(
            "product {} brand {} at {} -> price list {} ({})",
            product_id,
            brand_id,
            at,
            winner.price_list(),
            winner.price()
        );
        Ok(PriceProjection::from(winner))
    }

    /// Resolve the applicable price at the current instant of the service
    /// clock
    pub async fn resolve_current_price(
        &self,
        product_id: ProductId,
        brand_id: BrandId,
    ) -> QueryResult<PriceProjection> {
        self.resolve_price(product_id, brand_id, self.clock.now())
            .await
    }

    /// Stored records that would collide with `candidate` if it were
    /// registered
    pub async fn conflicting_prices(
        &self,
        candidate: &PriceRecord,
    ) -> QueryResult<Vec<PriceRecord>> {
        let existing = self
            .repository
            .find_by_product_and_brand(candidate.product_id(), candidate.brand_id())
            .await?;
        Ok(conflict::conflicting(&existing, candidate)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Whether `candidate` can be registered without ambiguity
    pub async fn can_register(&self, candidate: &PriceRecord) -> QueryResult<bool> {
        let existing = self
            .repository
            .find_by_product_and_brand(candidate.product_id(), candidate.brand_id())
            .await?;
        Ok(conflict::admissible(&existing, candidate))
    }
}
