//! Backup and design-pack import/export.
//!
//! Two document variants leave and enter the app:
//! - the full backup, the entire `AppState` as one JSON document
//! - the design pack, only `{settings, categories}`, safe to share with
//!   other groups because it carries no user or event data
//!
//! Imports are parsed and shape-checked here; the reducer only ever sees
//! already-valid payloads, so a malformed file can never partially apply.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{GuildCalError, GuildCalResult};
use crate::settings::Settings;
use crate::state::AppState;

/// The design-pack document: appearance and categories only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignPack {
    pub settings: Settings,
    pub categories: Vec<Category>,
}

pub fn export_full(state: &AppState) -> GuildCalResult<String> {
    serde_json::to_string_pretty(state).map_err(|e| GuildCalError::Serialization(e.to_string()))
}

pub fn import_full(json: &str) -> GuildCalResult<AppState> {
    serde_json::from_str(json).map_err(|e| GuildCalError::Import(e.to_string()))
}

pub fn export_design_pack(state: &AppState) -> GuildCalResult<String> {
    let pack = DesignPack {
        settings: state.settings.clone(),
        categories: state.categories.clone(),
    };
    serde_json::to_string_pretty(&pack).map_err(|e| GuildCalError::Serialization(e.to_string()))
}

pub fn import_design_pack(json: &str) -> GuildCalResult<DesignPack> {
    serde_json::from_str(json).map_err(|e| GuildCalError::Import(e.to_string()))
}
