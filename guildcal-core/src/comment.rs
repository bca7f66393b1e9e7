//! Comments on events.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A comment on an event. For recurring occurrences `event_id` is the
/// template id, so every occurrence of a series shares one thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub event_id: String,
    pub author_id: String,
    pub content: String,
    pub created_at: NaiveDateTime,
}
