use hermes_core::{BrandId, PriceRecord, ProductId, Timestamp};
use hermes_ports::PriceResolver;

/// Priority-then-recency selection
///
/// Applicable candidates are ranked by:
/// 1. Priority (higher rank wins)
/// 2. Validity start (amongst equal priority, the window enacted later wins)
///
/// When two pricing rules of equal priority overlap in time, the one enacted
/// later is the more specific override: last rule wins, as in promotional
/// pricing overlays.
pub struct PriorityRecencyResolver;

impl PriorityRecencyResolver {
    pub fn new() -> Self {
        Self
    }

    /// Whether `challenger` strictly outranks `incumbent`
    ///
    /// A candidate tied on both keys does not, so the first-encountered
    /// record survives an exact tie and the outcome is stable for a given
    /// input ordering.
    fn outranks(challenger: &PriceRecord, incumbent: &PriceRecord) -> bool {
        challenger.has_higher_priority_than(incumbent)
            || (challenger.priority() == incumbent.priority()
                && challenger.validity().start() > incumbent.validity().start())
    }
}

impl Default for PriorityRecencyResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceResolver for PriorityRecencyResolver {
    fn name(&self) -> &str {
        "Priority-Recency"
    }

    fn select_applicable<'a>(
        &self,
        candidates: &'a [PriceRecord],
        product_id: ProductId,
        brand_id: BrandId,
        at: Timestamp,
    ) -> Option<&'a PriceRecord> {
        candidates
            .iter()
            .filter(|record| record.is_applicable_for(product_id, brand_id, at))
            .fold(None, |best, record| match best {
                Some(incumbent) if !Self::outranks(record, incumbent) => Some(incumbent),
                _ => Some(record),
            })
    }
}
