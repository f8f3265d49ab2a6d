use hermes_core::{BrandId, PriceRecord, ProductId, Timestamp};

/// Port for applicable-price selection algorithms
///
/// Given the candidate records for a query, an implementation picks the one
/// that applies, or none. Implementations filter the candidates themselves
/// rather than trust upstream pre-filtering; the repository is a replaceable
/// collaborator.
pub trait PriceResolver: Send + Sync {
    /// Select the single applicable record among `candidates`
    ///
    /// Pure and infallible: an empty candidate slice simply yields `None`.
    fn select_applicable<'a>(
        &self,
        candidates: &'a [PriceRecord],
        product_id: ProductId,
        brand_id: BrandId,
        at: Timestamp,
    ) -> Option<&'a PriceRecord>;

    /// Get the name of the algorithm
    fn name(&self) -> &str;
}
