//! Per-candidate disable predicates
//!
//! A predicate is consulted for every candidate the picker considers, both
//! while rendering and when a value is committed. Each evaluation re-reads
//! whatever live state it depends on, so the disabled set is not static: a
//! candidate available at one instant may be disabled when revisited later.

use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::clock::Clock;

/// Disable hook: returns `true` when the candidate must not be selectable.
pub type DisablePredicate = Arc<dyn Fn(NaiveDateTime) -> bool + Send + Sync>;

/// Predicate that disables any candidate strictly earlier than the clock's
/// reading at evaluation time.
///
/// The comparison is strict, so a candidate equal to "now" (to the second)
/// stays selectable.
pub fn past(clock: Arc<dyn Clock>) -> DisablePredicate {
    Arc::new(move |candidate| candidate < clock.now())
}
