use chrono::Utc;
use hermes_core::Timestamp;
use hermes_ports::Clock;

/// Real system clock for production use
///
/// Current-price lookups resolved through this clock see actual wall-clock
/// time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
