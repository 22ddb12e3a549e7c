//! In-memory reminder core for the Shader Reminder home page.
//!
//! A [`ReminderSession`] owns the reminder collection and a clock for one
//! page session. The presentation layer issues intents (add, remove,
//! complete, clear) and re-reads the derived signals on every render tick;
//! data only ever flows from adapters into the store, never back.

mod clock;
mod config;
mod display;
mod error;
mod input;
mod intent;
mod reminder;
pub mod signals;
mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{DEFAULT_SHADER_ID, SHADER_COUNT, UPCOMING_WINDOW_MINUTES};
pub use display::{canvas_size, clamp_shader_id, CanvasFrame};
pub use error::{AppError, AppResult};
pub use input::{parse_add_request, parse_due_time, AddRequest};
pub use intent::Intent;
pub use reminder::{Reminder, ReminderId};
pub use store::ReminderStore;

use chrono::{DateTime, Utc};

/// One user's reminder state for the lifetime of a page session.
///
/// Single-writer: every intent is applied to completion before control
/// returns to any reader, so no read ever observes a half-applied mutation.
pub struct ReminderSession<C: Clock = SystemClock> {
    store: ReminderStore,
    clock: C,
}

impl ReminderSession<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ReminderSession<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ReminderSession<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            store: ReminderStore::new(),
            clock,
        }
    }

    // ============ Intents ============

    /// Add a reminder. Returns `None` when the message is empty; the form is
    /// expected to have validated before submitting.
    pub fn add(&mut self, message: &str, due_time: DateTime<Utc>) -> Option<ReminderId> {
        let created_at = self.clock.now();
        self.store.add(message, due_time, created_at)
    }

    /// Remove one reminder by id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: ReminderId) {
        self.store.remove(id);
    }

    /// Mark one reminder complete. It stays listed but stops contributing to
    /// the active and upcoming signals.
    pub fn complete(&mut self, id: ReminderId) {
        self.store.complete(id);
    }

    /// Drop every reminder, completed or not.
    pub fn clear_all(&mut self) {
        log::debug!("clearing {} reminders", self.store.len());
        self.store.clear();
    }

    /// Apply a serialized intent from the presentation layer.
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Add { message, due_time } => {
                self.add(&message, due_time);
            }
            Intent::Remove { id } => self.remove(id),
            Intent::Complete { id } => self.complete(id),
            Intent::ClearAll => self.clear_all(),
        }
    }

    // ============ Reads ============

    /// Full collection in insertion order, completed reminders included.
    pub fn reminders(&self) -> &[Reminder] {
        self.store.list()
    }

    /// The active subset, for the center display.
    pub fn active_reminders(&self) -> Vec<Reminder> {
        self.store
            .list()
            .iter()
            .filter(|r| r.is_active())
            .cloned()
            .collect()
    }

    pub fn active_count(&self) -> usize {
        signals::active_count(self.store.list())
    }

    pub fn has_active_reminders(&self) -> bool {
        signals::has_active_reminders(self.store.list())
    }

    /// Reads the clock fresh on every call; nothing is cached.
    pub fn has_upcoming_reminders(&self, window_minutes: u32) -> bool {
        signals::has_upcoming_reminders(self.store.list(), self.clock.now(), window_minutes)
    }

    /// The read-only tuple the canvas renderer consumes on a re-render. The
    /// upcoming check uses the page's fixed five-minute window.
    pub fn canvas_frame(&self, size: u32, shader_id: u8) -> CanvasFrame {
        CanvasFrame {
            size,
            has_active_reminders: self.has_active_reminders(),
            has_upcoming_reminders: self.has_upcoming_reminders(UPCOMING_WINDOW_MINUTES),
            shader_id: clamp_shader_id(shader_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn session_at(now: DateTime<Utc>) -> (ManualClock, DateTime<Utc>) {
        (ManualClock::at(now), now)
    }

    #[test]
    fn test_complete_then_remove_scenario() {
        let (clock, now) = session_at(base_time());
        let mut session = ReminderSession::with_clock(&clock);

        let id = session.add("Call agent", now + Duration::minutes(2)).unwrap();
        assert!(session.has_upcoming_reminders(5));

        session.complete(id);
        assert!(!session.has_upcoming_reminders(5));
        assert_eq!(session.reminders().len(), 1);
        assert!(session.reminders()[0].completed);

        session.remove(id);
        assert!(session.reminders().is_empty());
    }

    #[test]
    fn test_clear_all_leaves_no_partial_state() {
        let (clock, now) = session_at(base_time());
        let mut session = ReminderSession::with_clock(&clock);

        session.add("a", now + Duration::minutes(1));
        session.add("b", now + Duration::minutes(2));
        session.add("c", now + Duration::minutes(3));

        session.clear_all();

        // A single subsequent read observes the empty state and both signals
        // false; no reader ever sees 1 or 2 remaining.
        assert_eq!(session.reminders().len(), 0);
        assert!(!session.has_active_reminders());
        assert!(!session.has_upcoming_reminders(5));
    }

    #[test]
    fn test_upcoming_follows_the_clock() {
        let (clock, now) = session_at(base_time());
        let mut session = ReminderSession::with_clock(&clock);

        session.add("Call agent", now + Duration::minutes(10));
        assert!(!session.has_upcoming_reminders(5));

        // The reminder drifts into the window as time advances.
        clock.advance(Duration::minutes(6));
        assert!(session.has_upcoming_reminders(5));

        // And out of it again once its due time has passed.
        clock.advance(Duration::minutes(5));
        assert!(!session.has_upcoming_reminders(5));
        assert!(session.has_active_reminders());
    }

    #[test]
    fn test_active_matches_list_contents() {
        let (clock, now) = session_at(base_time());
        let mut session = ReminderSession::with_clock(&clock);

        assert!(!session.has_active_reminders());

        let a = session.add("a", now - Duration::hours(1)).unwrap();
        let b = session.add("b", now + Duration::hours(1)).unwrap();
        assert!(session.has_active_reminders());
        assert_eq!(session.active_count(), 2);

        session.complete(a);
        session.complete(b);
        assert!(!session.has_active_reminders());
        assert_eq!(session.active_count(), 0);
        assert_eq!(session.reminders().len(), 2);
    }

    #[test]
    fn test_active_subset_for_center_display() {
        let (clock, now) = session_at(base_time());
        let mut session = ReminderSession::with_clock(&clock);

        let a = session.add("keep", now).unwrap();
        let b = session.add("done", now).unwrap();
        session.complete(b);

        let active = session.active_reminders();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, a);
    }

    #[test]
    fn test_apply_dispatches_intents() {
        let (clock, now) = session_at(base_time());
        let mut session = ReminderSession::with_clock(&clock);

        session.apply(Intent::Add {
            message: "Call agent".to_string(),
            due_time: now + Duration::minutes(2),
        });
        assert_eq!(session.reminders().len(), 1);
        let id = session.reminders()[0].id;

        session.apply(Intent::Complete { id });
        assert!(session.reminders()[0].completed);

        session.apply(Intent::Remove { id });
        assert!(session.reminders().is_empty());

        session.apply(Intent::Add {
            message: "another".to_string(),
            due_time: now,
        });
        session.apply(Intent::ClearAll);
        assert!(session.reminders().is_empty());
    }

    #[test]
    fn test_canvas_frame_reflects_signals() {
        let (clock, now) = session_at(base_time());
        let mut session = ReminderSession::with_clock(&clock);

        let frame = session.canvas_frame(600, 1);
        assert!(!frame.has_active_reminders);
        assert!(!frame.has_upcoming_reminders);

        session.add("Call agent", now + Duration::minutes(3));
        let frame = session.canvas_frame(720, 9);
        assert!(frame.has_active_reminders);
        assert!(frame.has_upcoming_reminders);
        assert_eq!(frame.size, 720);
        assert_eq!(frame.shader_id, SHADER_COUNT); // clamped

        session.add("later", now + Duration::hours(2));
        session.clear_all();
        let frame = session.canvas_frame(600, DEFAULT_SHADER_ID);
        assert!(!frame.has_active_reminders);
        assert!(!frame.has_upcoming_reminders);
    }

    #[test]
    fn test_form_request_feeds_add_intent() {
        let (clock, now) = session_at(base_time());
        let mut session = ReminderSession::with_clock(&clock);

        let req = parse_add_request("Call agent", "12:03", now).unwrap();
        session.apply(Intent::Add {
            message: req.message,
            due_time: req.due_time,
        });

        assert!(session.has_upcoming_reminders(5));
    }

    #[test]
    fn test_system_clock_session_constructs() {
        let mut session = ReminderSession::new();
        assert!(!session.has_active_reminders());
        session.add("real time", Utc::now());
        assert!(session.has_active_reminders());
    }
}
