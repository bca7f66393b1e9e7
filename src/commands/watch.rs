//! The reminder scheduler.
//!
//! Scans the derived event list once a minute for events starting within
//! the next hour and dispatches reminder notifications through the reducer,
//! the same serialized channel every other mutation goes through. Reminder
//! ids are content-derived, so a restart can never duplicate a reminder.

use anyhow::Result;
use chrono::Local;
use guildcal_core::reminder::{due_reminders, SCHEDULER_TICK_SECONDS};
use guildcal_core::visibility::derived_events;
use guildcal_core::{reduce, Action};
use owo_colors::OwoColorize;

use crate::store;

pub async fn run() -> Result<()> {
    let now = Local::now().naive_local();
    let mut state = store::load(now.date())?;

    if !state.settings.enable_notifications {
        println!("Notifications are disabled in settings; nothing to watch.");
        return Ok(());
    }

    println!(
        "Watching for reminders as {} (every {}s, Ctrl-C to stop)",
        state
            .current_user()
            .map(|u| u.name.as_str())
            .unwrap_or("unknown user"),
        SCHEDULER_TICK_SECONDS
    );

    let mut interval =
        tokio::time::interval(std::time::Duration::from_secs(SCHEDULER_TICK_SECONDS));

    loop {
        interval.tick().await;

        let now = Local::now().naive_local();
        let events = derived_events(&state, now.date());
        let due = due_reminders(&events, &state.notifications, &state.current_user_id, now);

        if !due.is_empty() {
            for reminder in &due {
                if let guildcal_core::notification::NotificationMessage::Reminder { event_name } =
                    &reminder.message
                {
                    println!(
                        "{} {} starts in about an hour",
                        "Reminder:".yellow().bold(),
                        event_name
                    );
                }
            }
            state = reduce(state, Action::AddNotifications(due), now);
            store::save(&state)?;
        }

        if !state.settings.enable_notifications {
            break;
        }
    }

    Ok(())
}
