//! Backup and design-pack export/import.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use dialoguer::Confirm;
use guildcal_core::backup;
use guildcal_core::{reduce, Action};
use owo_colors::OwoColorize;

use crate::store;

pub fn export(design: bool, output: Option<PathBuf>) -> Result<()> {
    let now = Local::now().naive_local();
    let state = store::load(now.date())?;

    let json = if design {
        backup::export_design_pack(&state)?
    } else {
        backup::export_full(&state)?
    };

    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{} {}", "Exported to".green(), path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

pub fn import(file: &Path, design: bool, yes: bool) -> Result<()> {
    let now = Local::now().naive_local();
    let state = store::load(now.date())?;

    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    // Parse before prompting so a malformed file never touches the state.
    let action = if design {
        let pack = backup::import_design_pack(&json)?;
        Action::ImportDesignSettings {
            settings: pack.settings,
            categories: pack.categories,
        }
    } else {
        let imported = backup::import_full(&json)?;
        Action::ReplaceState(Box::new(imported))
    };

    let prompt = if design {
        "This will overwrite your current appearance and category settings. Continue?"
    } else {
        "This will overwrite all current data. Continue?"
    };
    if !yes && !Confirm::new().with_prompt(prompt).interact()? {
        println!("Aborted.");
        return Ok(());
    }

    let state = reduce(state, action, now);
    store::save(&state)?;
    println!("{}", "Import complete".green());
    Ok(())
}
