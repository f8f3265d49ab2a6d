use hermes_core::DomainError;
use thiserror::Error;

/// Faults raised by persistence adapters
///
/// These pass through the query layer unmodified; they are never folded into
/// a not-found outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store could not be reached or answered abnormally
    #[error("storage backend failure: {0}")]
    Backend(String),

    /// A stored row failed domain validation while being materialized
    #[error("stored price record could not be materialized: {0}")]
    Materialization(#[from] DomainError),
}

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;
