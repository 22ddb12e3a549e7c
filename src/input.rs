//! Validation performed at the input-form boundary.
//!
//! The form validates here before issuing an add intent; the store itself
//! never sees unparseable input. Rejection happens at this edge so store
//! mutations stay infallible.

use crate::error::{AppError, AppResult};
use chrono::{DateTime, Duration, NaiveTime, Utc};

/// A validated add request, ready to submit as an intent.
#[derive(Debug, Clone, PartialEq)]
pub struct AddRequest {
    pub message: String,
    pub due_time: DateTime<Utc>,
}

/// Validate raw form fields into an [`AddRequest`].
pub fn parse_add_request(message: &str, time: &str, now: DateTime<Utc>) -> AppResult<AddRequest> {
    let message = message.trim();
    if message.is_empty() {
        return Err(AppError::validation("message must not be empty"));
    }

    let due_time = parse_due_time(time, now)?;
    Ok(AddRequest {
        message: message.to_string(),
        due_time,
    })
}

/// Parse a user-supplied due time.
///
/// Accepts a full RFC 3339 timestamp, or a bare `HH:MM` form value which
/// resolves to the next occurrence of that wall time at or after `now`.
pub fn parse_due_time(time: &str, now: DateTime<Utc>) -> AppResult<DateTime<Utc>> {
    let time = time.trim();
    if time.is_empty() {
        return Err(AppError::validation("time must not be empty"));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(time) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(t) = NaiveTime::parse_from_str(time, "%H:%M") {
        let mut due = now.date_naive().and_time(t).and_utc();
        if due < now {
            due += Duration::days(1);
        }
        return Ok(due);
    }

    Err(AppError::parse(format!("unrecognized time: {}", time)))
}
