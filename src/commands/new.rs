use anyhow::{bail, Context, Result};
use chrono::{Duration, Local, NaiveDateTime};
use guildcal_core::event::{Event, EventKind, EventStatus};
use guildcal_core::{reduce, Action};
use owo_colors::OwoColorize;
use uuid::Uuid;

use crate::store;

pub fn run(
    title: String,
    start: String,
    end: Option<String>,
    category: Option<String>,
    description: String,
) -> Result<()> {
    let now = Local::now().naive_local();
    let state = store::load(now.date())?;

    let start = parse_datetime(&start)?;
    let end = match end {
        Some(s) => parse_datetime(&s)?,
        None => start + Duration::hours(1),
    };
    if end <= start {
        bail!("End time must be after start time");
    }

    let category_id = match category {
        Some(id) => {
            if !state.categories.iter().any(|c| c.id == id) {
                let available: Vec<_> = state.categories.iter().map(|c| c.id.as_str()).collect();
                bail!("Category '{}' not found. Available: {}", id, available.join(", "));
            }
            id
        }
        None => match state.categories.first() {
            Some(c) => c.id.clone(),
            None => bail!("No categories exist; create one first"),
        },
    };

    let event = Event {
        id: format!("event-{}", Uuid::new_v4()),
        title: title.clone(),
        description,
        start,
        end,
        category_id,
        author_id: state.current_user_id.clone(),
        status: EventStatus::Published,
        image: None,
        kind: EventKind::Single,
    };

    let state = reduce(state, Action::AddEvent(event), now);
    store::save(&state)?;

    println!(
        "{} {} at {}",
        "Created".green(),
        title,
        start.format("%Y-%m-%d %H:%M")
    );
    Ok(())
}

fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .with_context(|| format!("Invalid date/time '{}'. Expected YYYY-MM-DDTHH:MM", s))
}
