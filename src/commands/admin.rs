//! User switching and destructive maintenance commands.

use anyhow::{bail, Result};
use chrono::Local;
use dialoguer::Confirm;
use guildcal_core::{reduce, Action};
use owo_colors::OwoColorize;

use crate::store;

pub fn switch(user_id: &str) -> Result<()> {
    let now = Local::now().naive_local();
    let state = store::load(now.date())?;

    if !state.users.iter().any(|u| u.id == user_id) {
        let available: Vec<String> = state
            .users
            .iter()
            .map(|u| format!("{} ({})", u.id, u.name))
            .collect();
        bail!("User '{}' not found. Available: {}", user_id, available.join(", "));
    }

    let state = reduce(state, Action::SetCurrentUser(user_id.to_string()), now);
    store::save(&state)?;

    let name = state
        .current_user()
        .map(|u| u.name.clone())
        .unwrap_or_default();
    println!("{} {}", "Now acting as".green(), name);
    Ok(())
}

pub fn clear_log(yes: bool) -> Result<()> {
    let now = Local::now().naive_local();
    let state = store::load(now.date())?;

    if !yes
        && !Confirm::new()
            .with_prompt("Permanently delete all activity log entries?")
            .interact()?
    {
        println!("Aborted.");
        return Ok(());
    }

    let state = reduce(state, Action::ClearActivityLog, now);
    store::save(&state)?;
    println!("{}", "Activity log cleared".green());
    Ok(())
}

pub fn reset(yes: bool) -> Result<()> {
    let now = Local::now().naive_local();
    let state = store::load(now.date())?;

    if !yes
        && !Confirm::new()
            .with_prompt("Delete ALL data and restore factory defaults? This is irreversible")
            .interact()?
    {
        println!("Aborted.");
        return Ok(());
    }

    let state = reduce(state, Action::ResetAppState, now);
    store::save(&state)?;
    println!("{}", "Application reset to defaults".green());
    Ok(())
}
