//! Query layer errors

use hermes_core::{BrandId, ProductId, Timestamp};
use hermes_ports::RepositoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    /// No stored price applies to the query
    ///
    /// An expected, user-visible outcome. Carries the query parameters for
    /// diagnostics, not a stack of causes.
    #[error("no applicable price for product {product_id}, brand {brand_id} at {at}")]
    PriceNotFound {
        product_id: ProductId,
        brand_id: BrandId,
        at: Timestamp,
    },

    /// Persistence fault, passed through unmodified
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type QueryResult<T> = std::result::Result<T, QueryError>;
