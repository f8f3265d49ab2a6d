//! Tariff conflict checks
//!
//! Two records of the same priority with overlapping validity windows leave
//! the winner to incidental ordering, so a registration is screened against
//! the records already stored for its (product, brand) pair.

use hermes_core::PriceRecord;

/// Records in `existing` that collide with `candidate`
///
/// A collision is same (product, brand), same priority, and an overlapping
/// validity window. The candidate itself is excluded by identity, so
/// re-checking an already-stored record does not report it against itself.
pub fn conflicting<'a>(
    existing: &'a [PriceRecord],
    candidate: &PriceRecord,
) -> Vec<&'a PriceRecord> {
    existing
        .iter()
        .filter(|record| **record != *candidate)
        .filter(|record| record.belongs_to(candidate.product_id(), candidate.brand_id()))
        .filter(|record| record.priority() == candidate.priority())
        .filter(|record| record.validity().overlaps(&candidate.validity()))
        .collect()
}

/// Whether `candidate` can be registered without ambiguity
pub fn admissible(existing: &[PriceRecord], candidate: &PriceRecord) -> bool {
    conflicting(existing, candidate).is_empty()
}
