//! Clock port

use chrono::{DateTime, Utc};

/// Source of the current instant.
///
/// Expiry decisions never read the system time directly; they go
/// through this trait so tests can pin the clock.
pub trait Clock: Send + Sync {
    /// The current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}
