//! Wall-clock access used by expiry checks
//!
//! Expiry comparisons are made against the client's local clock at the
//! moment of evaluation, never against a snapshot taken earlier. The trait
//! here is the single seam through which "now" is read, so tests can pin
//! the clock to a known instant.

use chrono::{Local, NaiveDateTime, Timelike};

/// Source of the current local wall-clock time.
///
/// Readings are truncated to whole seconds to match the second granularity
/// of selection values, so a value equal to the current second compares as
/// not yet expired.
pub trait Clock: Send + Sync {
    /// Current local wall-clock time, truncated to whole seconds.
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        truncate_to_second(Local::now().naive_local())
    }
}

/// Clock pinned to a fixed instant. Useful in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        truncate_to_second(self.0)
    }
}

/// Drop sub-second precision from a timestamp.
pub fn truncate_to_second(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_nanosecond(0).unwrap_or(dt)
}
