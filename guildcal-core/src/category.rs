//! Event categories.

use serde::{Deserialize, Serialize};

/// A category events are organized under. A category cannot be deleted
/// while any event still references it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Hex color code, e.g. "#ef4444"
    pub color: String,
    /// Symbolic icon name, e.g. "swords"
    pub icon: String,
}
