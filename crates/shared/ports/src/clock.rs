use hermes_core::Timestamp;

/// Port for time abstraction
///
/// Lets "what is the price right now" resolve against different time
/// sources: real system time in production, a frozen instant for
/// deterministic tests.
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now(&self) -> Timestamp;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
