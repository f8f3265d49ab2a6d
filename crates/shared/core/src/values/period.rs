use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::values::Timestamp;

/// Closed time interval during which a price record applies
///
/// Both bounds are inclusive: a record whose window ends at 18:30 still
/// applies at exactly 18:30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityPeriod {
    start: Timestamp,
    end: Timestamp,
}

impl ValidityPeriod {
    /// Create a period, rejecting a start after the end
    pub fn new(start: Timestamp, end: Timestamp) -> DomainResult<Self> {
        if start > end {
            return Err(DomainError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Whether the instant falls inside the period, bounds included
    pub fn contains(&self, at: Timestamp) -> bool {
        self.start <= at && at <= self.end
    }

    /// Whether two closed intervals share at least one instant
    ///
    /// Symmetric: neither interval ends before the other starts.
    pub fn overlaps(&self, other: &ValidityPeriod) -> bool {
        !(self.end < other.start) && !(other.end < self.start)
    }
}

impl std::fmt::Display for ValidityPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
