//! Ephemeral user-facing messages.

use serde::{Deserialize, Serialize};

/// A transient message shown to the user. Toasts are never persisted;
/// they are appended by the reducer and removed by an explicit action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: String,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}
