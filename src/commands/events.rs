use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use guildcal_core::event::{Event, EventStatus};
use guildcal_core::visibility::derived_events;
use owo_colors::OwoColorize;

use crate::store;

pub fn run(days: i64) -> Result<()> {
    let now = Local::now().naive_local();
    let today = now.date();
    let state = store::load(today)?;

    let until = now + Duration::days(days);
    let mut upcoming: Vec<Event> = derived_events(&state, today)
        .into_iter()
        .filter(|e| e.start >= now && e.start <= until)
        .collect();
    upcoming.sort_by_key(|e| e.start);

    if upcoming.is_empty() {
        println!("{}", "No upcoming events".dimmed());
        return Ok(());
    }

    // Group events by day and print
    let mut current_date: Option<String> = None;

    for event in &upcoming {
        let date_label = format_date_label(event.start.date(), today);

        if current_date.as_ref() != Some(&date_label) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", date_label.bold());
            current_date = Some(date_label);
        }

        let time = format!("{:>7}", event.start.format("%H:%M"));
        let category = state
            .categories
            .iter()
            .find(|c| c.id == event.category_id)
            .map(|c| c.name.as_str())
            .unwrap_or("?");
        let tag = format!("[{}]", category);
        let marker = match event.status {
            EventStatus::Published => "",
            EventStatus::Draft => " (draft)",
            EventStatus::Private => " (private)",
        };
        println!(
            "  {} {}{} {}",
            time,
            event.title,
            marker.dimmed(),
            tag.dimmed()
        );
    }

    Ok(())
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Sep 2")
fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    let diff = (date - today).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}
