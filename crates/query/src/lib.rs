//! Hermes Query
//!
//! Application layer for price lookups. `PriceQueryService` coordinates the
//! repository and the resolution algorithm and shapes the winning record for
//! callers; it holds no pricing rules of its own.

mod error;
mod projection;
mod service;

pub use error::{QueryError, QueryResult};
pub use projection::PriceProjection;
pub use service::PriceQueryService;
