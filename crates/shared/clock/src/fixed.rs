use hermes_core::Timestamp;
use hermes_ports::Clock;

/// Clock frozen at a chosen instant
///
/// Every query resolved against a `FixedClock` sees the same "now", which
/// makes current-price lookups reproducible.
pub struct FixedClock {
    at: Timestamp,
}

impl FixedClock {
    /// Freeze the clock at the given instant
    pub fn at(at: Timestamp) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.at
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}
