use crate::reminder::{Reminder, ReminderId};
use chrono::{DateTime, Utc};

/// Sole owner of the reminder collection. All mutation passes through here;
/// insertion order is the display order and is never rearranged by time or
/// completion state.
#[derive(Debug, Default)]
pub struct ReminderStore {
    reminders: Vec<Reminder>,
    last_id: ReminderId,
}

impl ReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> ReminderId {
        // The counter never resets, so ids stay distinct for the lifetime of
        // the store even across a clear-all.
        self.last_id += 1;
        self.last_id
    }

    /// Append a new reminder and return its id.
    ///
    /// The collaborating input form validates before calling; an empty
    /// message here is refused rather than stored.
    pub fn add(
        &mut self,
        message: &str,
        due_time: DateTime<Utc>,
        created_at: DateTime<Utc>,
    ) -> Option<ReminderId> {
        let message = message.trim();
        if message.is_empty() {
            log::warn!("refusing reminder with empty message");
            return None;
        }

        let mut reminder = Reminder::new(message.to_string(), due_time, created_at);
        reminder.id = self.next_id();
        let id = reminder.id;
        self.reminders.push(reminder);
        log::debug!("added reminder {} due {}", id, due_time);
        Some(id)
    }

    /// Excise a reminder. Unknown ids are a silent no-op; ordering of the
    /// remaining reminders is unchanged.
    pub fn remove(&mut self, id: ReminderId) {
        self.reminders.retain(|r| r.id != id);
    }

    /// Flip `completed` to true in place, once. Unknown or already completed
    /// ids are a no-op; the reminder stays in the collection.
    pub fn complete(&mut self, id: ReminderId) {
        if let Some(reminder) = self.reminders.iter_mut().find(|r| r.id == id) {
            if !reminder.completed {
                reminder.completed = true;
                log::debug!("completed reminder {}", id);
            }
        }
    }

    /// Drop every reminder, completed or not.
    pub fn clear(&mut self) {
        self.reminders.clear();
    }

    /// Read-only snapshot in insertion order.
    pub fn list(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }
}
