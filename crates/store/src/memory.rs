use async_trait::async_trait;
use dashmap::DashMap;
use hermes_core::{BrandId, PriceRecord, ProductId, Timestamp};
use hermes_ports::{PriceRepository, RepositoryError, RepositoryResult};
use log::debug;

use crate::mapper;
use crate::row::StoredPrice;

/// In-memory price store
///
/// Rows are sharded by (brand, product), the access path every lookup uses,
/// so concurrent queries for different pairs never contend.
pub struct InMemoryPriceStore {
    rows: DashMap<(u64, u64), Vec<StoredPrice>>,
}

impl InMemoryPriceStore {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
        }
    }

    /// Load a row, as the storage engine would after an external write
    pub fn insert(&self, row: StoredPrice) {
        self.rows
            .entry((row.brand_id, row.product_id))
            .or_default()
            .push(row);
    }

    /// Number of rows across all (brand, product) pairs
    pub fn len(&self) -> usize {
        self.rows.iter().map(|entry| entry.value().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn rows_for(&self, product_id: ProductId, brand_id: BrandId) -> Vec<StoredPrice> {
        self.rows
            .get(&(brand_id.value(), product_id.value()))
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }
}

impl Default for InMemoryPriceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceRepository for InMemoryPriceStore {
    async fn find_applicable(
        &self,
        product_id: ProductId,
        brand_id: BrandId,
        at: Timestamp,
    ) -> RepositoryResult<Vec<PriceRecord>> {
        let mut rows = self.rows_for(product_id, brand_id);
        // Pre-filter by date and serve highest priority first, like the
        // storage engine's lookup query. The resolver re-checks both.
        rows.retain(|row| row.start_date <= at && at <= row.end_date);
        rows.sort_by(|a, b| b.priority.cmp(&a.priority));

        debug!(
            "{} stored rows match product {} brand {} at {}",
            rows.len(),
            product_id,
            brand_id,
            at
        );

        rows.iter()
            .map(mapper::materialize)
            .collect::<Result<Vec<_>, _>>()
            .map_err(RepositoryError::from)
    }

    async fn find_by_product_and_brand(
        &self,
        product_id: ProductId,
        brand_id: BrandId,
    ) -> RepositoryResult<Vec<PriceRecord>> {
        self.rows_for(product_id, brand_id)
            .iter()
            .map(mapper::materialize)
            .collect::<Result<Vec<_>, _>>()
            .map_err(RepositoryError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    fn row(price_list: u32, priority: u32, start: &str, end: &str) -> StoredPrice {
        StoredPrice {
            id: Uuid::new_v4(),
            brand_id: 1,
            product_id: 35455,
            price_list,
            start_date: ts(start),
            end_date: ts(end),
            priority,
            amount: dec!(35.50),
            currency: "EUR".to_string(),
        }
    }

    fn ids() -> (ProductId, BrandId) {
        (ProductId::new(35455).unwrap(), BrandId::new(1).unwrap())
    }

    #[tokio::test]
    async fn test_find_applicable_prefilters_by_date() {
        let store = InMemoryPriceStore::new();
        store.insert(row(1, 0, "2020-06-14T00:00:00Z", "2020-12-31T23:59:59Z"));
        store.insert(row(2, 1, "2020-06-14T15:00:00Z", "2020-06-14T18:30:00Z"));
        let (product, brand) = ids();

        let morning = store
            .find_applicable(product, brand, ts("2020-06-14T10:00:00Z"))
            .await
            .unwrap();
        assert_eq!(morning.len(), 1);
        assert_eq!(morning[0].price_list(), 1);

        let afternoon = store
            .find_applicable(product, brand, ts("2020-06-14T16:00:00Z"))
            .await
            .unwrap();
        assert_eq!(afternoon.len(), 2);
        // Highest priority first, like the storage query orders it
        assert_eq!(afternoon[0].price_list(), 2);
    }

    #[tokio::test]
    async fn test_unknown_pair_yields_empty() {
        let store = InMemoryPriceStore::new();
        store.insert(row(1, 0, "2020-06-14T00:00:00Z", "2020-12-31T23:59:59Z"));

        let candidates = store
            .find_applicable(
                ProductId::new(99999).unwrap(),
                BrandId::new(1).unwrap(),
                ts("2020-06-14T10:00:00Z"),
            )
            .await
            .unwrap();
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_product_and_brand_ignores_date() {
        let store = InMemoryPriceStore::new();
        store.insert(row(1, 0, "2020-06-14T00:00:00Z", "2020-12-31T23:59:59Z"));
        store.insert(row(2, 1, "2020-06-14T15:00:00Z", "2020-06-14T18:30:00Z"));
        let (product, brand) = ids();

        let all = store.find_by_product_and_brand(product, brand).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_corrupt_row_surfaces_materialization_fault() {
        let store = InMemoryPriceStore::new();
        let mut bad = row(1, 0, "2020-06-14T00:00:00Z", "2020-12-31T23:59:59Z");
        bad.currency = String::new();
        store.insert(bad);
        let (product, brand) = ids();

        let result = store
            .find_applicable(product, brand, ts("2020-06-14T10:00:00Z"))
            .await;
        assert!(matches!(
            result,
            Err(RepositoryError::Materialization(_))
        ));
    }
}
