use async_trait::async_trait;
use hermes_core::{BrandId, PriceRecord, ProductId, Timestamp};

use crate::error::RepositoryResult;

/// Port for price record persistence
///
/// The only operations the domain requires from storage. The fetch may block
/// or suspend depending on the adapter's transport; no ordering of the
/// returned records is guaranteed.
#[async_trait]
pub trait PriceRepository: Send + Sync {
    /// Records structurally relevant to a (product, brand) pair at an instant
    ///
    /// Implementations may pre-filter by ids and date range as an
    /// optimization; the resolution engine re-checks applicability either
    /// way.
    async fn find_applicable(
        &self,
        product_id: ProductId,
        brand_id: BrandId,
        at: Timestamp,
    ) -> RepositoryResult<Vec<PriceRecord>>;

    /// Every record stored for a (product, brand) pair, regardless of date
    async fn find_by_product_and_brand(
        &self,
        product_id: ProductId,
        brand_id: BrandId,
    ) -> RepositoryResult<Vec<PriceRecord>>;
}
