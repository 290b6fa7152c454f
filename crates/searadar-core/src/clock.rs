//! Receipt-time source for decoded messages.

use time::OffsetDateTime;

/// Supplies the receipt timestamp stamped on decoded messages.
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

/// Wall-clock time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Always returns the same instant; used for deterministic output.
///
/// # Examples
/// ```
/// use searadar_core::{Clock, FixedClock};
/// use time::OffsetDateTime;
///
/// let clock = FixedClock::new(OffsetDateTime::UNIX_EPOCH);
/// assert_eq!(clock.now(), OffsetDateTime::UNIX_EPOCH);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(OffsetDateTime);

impl FixedClock {
    pub fn new(at: OffsetDateTime) -> Self {
        Self(at)
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self(OffsetDateTime::UNIX_EPOCH)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}
