use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the store at creation. Unique across the store's
/// lifetime; never reused, including after a clear-all.
pub type ReminderId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub message: String,
    pub due_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub completed: bool,
}

impl Reminder {
    pub fn new(message: String, due_time: DateTime<Utc>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: 0, // Will be set by the store
            message,
            due_time,
            created_at,
            completed: false,
        }
    }

    /// Not yet marked complete. Due time plays no part here; an overdue
    /// reminder stays active until the user completes or removes it.
    pub fn is_active(&self) -> bool {
        !self.completed
    }

    /// Due time has arrived or passed and the reminder is still active.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        if self.completed {
            return false;
        }
        self.due_time <= now
    }

    /// Due within `[now, now + window_minutes)`. Inclusive lower bound,
    /// exclusive upper bound, so repeated polls never double-count a boundary
    /// instant. Completed reminders are never upcoming.
    pub fn is_upcoming(&self, now: DateTime<Utc>, window_minutes: u32) -> bool {
        if self.completed {
            return false;
        }
        let window_end = now + Duration::minutes(i64::from(window_minutes));
        // The lower bound stays inclusive even for a zero-width window.
        self.due_time == now || (self.due_time > now && self.due_time < window_end)
    }
}
