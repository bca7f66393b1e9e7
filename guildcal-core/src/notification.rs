//! Notifications delivered to users.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    /// The user who should see this notification.
    pub user_id: String,
    pub message: NotificationMessage,
    /// Links back to the event. May dangle after the event is deleted;
    /// readers must tolerate an unresolved reference.
    pub event_id: String,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
}

/// What a notification is about. Names are captured at creation time so
/// later renames do not rewrite delivered notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationMessage {
    NewEvent {
        author_name: String,
        event_name: String,
    },
    NewComment {
        commenter_name: String,
        event_name: String,
    },
    Reminder {
        event_name: String,
    },
}
