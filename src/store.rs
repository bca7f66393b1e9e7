//! Load/save of the persisted application state blob.
//!
//! The whole `AppState` lives in one JSON document in the platform data
//! directory. Date-valued fields are chrono types, so they are revived from
//! their string form automatically on load. A corrupt file is a hard error,
//! never a partial apply.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use guildcal_core::AppState;

const STATE_FILE: &str = "state.json";

pub fn state_path() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine the platform data directory")?;
    Ok(base.join("guildcal").join(STATE_FILE))
}

/// Load the persisted state, seeding the factory defaults on first run.
pub fn load(today: NaiveDate) -> Result<AppState> {
    let path = state_path()?;
    if !path.exists() {
        return Ok(AppState::initial(today));
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Corrupt state file {}", path.display()))
}

/// Persist the state atomically (temp file + rename).
pub fn save(state: &AppState) -> Result<()> {
    let path = state_path()?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let content = serde_json::to_string_pretty(state).context("Failed to serialize state")?;
    let temp = path.with_extension("json.tmp");
    std::fs::write(&temp, content)
        .with_context(|| format!("Failed to write {}", temp.display()))?;
    std::fs::rename(&temp, &path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}
