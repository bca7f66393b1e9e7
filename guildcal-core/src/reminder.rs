//! Reminder scan for upcoming events.
//!
//! The scheduler calls `due_reminders` on every tick with the latest
//! derived event list and dispatches the result back through the reducer.
//! Reminder ids are derived from content, not sequence, so re-running a
//! tick with unchanged inputs produces nothing new and restarts cannot
//! duplicate or lose reminders.

use chrono::{Duration, NaiveDateTime};

use crate::event::Event;
use crate::notification::{Notification, NotificationMessage};

/// How far ahead of an event's start a reminder fires.
pub const REMINDER_LEAD_MINUTES: i64 = 60;

/// How often the scheduler scans, in seconds.
pub const SCHEDULER_TICK_SECONDS: u64 = 60;

/// Deterministic reminder notification id for an event/author pair.
pub fn reminder_id(event_id: &str, author_id: &str) -> String {
    format!("reminder-{}-{}", event_id, author_id)
}

/// Reminders due right now: events starting in `(now, now + lead]`,
/// authored by the viewer, that have not been reminded about yet.
pub fn due_reminders(
    events: &[Event],
    notifications: &[Notification],
    viewer_id: &str,
    now: NaiveDateTime,
) -> Vec<Notification> {
    let cutoff = now + Duration::minutes(REMINDER_LEAD_MINUTES);

    events
        .iter()
        .filter(|e| e.start > now && e.start <= cutoff && e.author_id == viewer_id)
        .filter(|e| {
            let id = reminder_id(&e.id, &e.author_id);
            !notifications.iter().any(|n| n.id == id)
        })
        .map(|e| Notification {
            id: reminder_id(&e.id, &e.author_id),
            user_id: e.author_id.clone(),
            message: NotificationMessage::Reminder {
                event_name: e.title.clone(),
            },
            event_id: e.id.clone(),
            is_read: false,
            created_at: now,
        })
        .collect()
}
