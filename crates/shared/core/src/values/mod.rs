//! Value objects
//!
//! Immutable identifiers and measures. Invariants are enforced at
//! construction; a value that exists is a valid one.

mod brand;
mod money;
mod period;
mod priority;
mod product;

pub use brand::BrandId;
pub use money::Money;
pub use period::ValidityPeriod;
pub use priority::Priority;
pub use product::ProductId;

use chrono::{DateTime, Utc};

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;
