//! Append-only activity log.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One mutating action, recorded at the time it happened. Both the actor's
/// name and any entity names in `details` are snapshots, so the log stays
/// readable after renames or deletions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: String,
    pub timestamp: NaiveDateTime,
    pub user_id: String,
    pub user_name: String,
    pub action: LogAction,
    pub details: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogAction {
    CreateEvent,
    UpdateEvent,
    DeleteEvent,
    CreateUser,
    UpdateUser,
    DeleteUser,
    CreateCategory,
    UpdateCategory,
    DeleteCategory,
    UpdateSettings,
}
