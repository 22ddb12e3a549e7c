//! Derived boolean signals over a store snapshot and the current instant.
//!
//! These are pure functions of `(collection, now)`: safe to call on every
//! render tick, no mutation, no caching. Staleness is bounded by the caller's
//! polling cadence, not by anything here.

use crate::reminder::Reminder;
use chrono::{DateTime, Utc};

/// At least one reminder is not yet marked complete. Due time is irrelevant.
pub fn has_active_reminders(reminders: &[Reminder]) -> bool {
    reminders.iter().any(Reminder::is_active)
}

/// Number of active reminders, for the "Clear All (n)" affordance.
pub fn active_count(reminders: &[Reminder]) -> usize {
    reminders.iter().filter(|r| r.is_active()).count()
}

/// At least one active reminder falls due within `[now, now + window)`.
///
/// Only reminders that `has_active_reminders` would count are considered, so
/// the two signals never disagree about completion.
pub fn has_upcoming_reminders(
    reminders: &[Reminder],
    now: DateTime<Utc>,
    window_minutes: u32,
) -> bool {
    reminders.iter().any(|r| r.is_upcoming(now, window_minutes))
}
