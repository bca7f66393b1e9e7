//! Expansion of weekly recurring templates into dated instances.
//!
//! Expands every template into concrete instances within a date window,
//! respecting per-date exceptions. Wall-clock weekly recurrence only: the
//! weekday of each calendar date decides whether a template occurs, and the
//! template's time-of-day is carried onto every instance.

use chrono::{Datelike, Months, NaiveDate};

use crate::event::{Event, EventKind};

/// Expand recurring templates into instances for every matching date in
/// `[window_start, window_end]` (both bounds inclusive).
///
/// Dates listed in a template's exception set produce no instance. Each
/// instance takes its date from the window day and its time-of-day from the
/// template, and carries a back-reference to the template plus its own
/// original start (the key used when detaching it later).
///
/// Deterministic and pure: the same inputs always produce the same output,
/// so callers are free to memoize on `(templates, window)`.
pub fn expand(templates: &[Event], window_start: NaiveDate, window_end: NaiveDate) -> Vec<Event> {
    let mut instances = Vec::new();

    for day in window_start.iter_days() {
        if day > window_end {
            break;
        }
        let weekday = day.weekday().num_days_from_sunday() as u8;

        for template in templates {
            let (pattern, exceptions) = match &template.kind {
                EventKind::Template {
                    pattern,
                    exception_dates,
                } => (pattern, exception_dates),
                _ => continue,
            };
            if !pattern.days.contains(&weekday) {
                continue;
            }
            if exceptions.contains(&day) {
                continue;
            }

            let start = day.and_time(template.start.time());
            let end = day.and_time(template.end.time());
            instances.push(Event {
                id: format!("{}_{}", template.id, day.format("%Y-%m-%d")),
                title: template.title.clone(),
                description: template.description.clone(),
                start,
                end,
                category_id: template.category_id.clone(),
                author_id: template.author_id.clone(),
                status: template.status,
                image: template.image.clone(),
                kind: EventKind::Instance {
                    template_id: template.id.clone(),
                    original_start: start,
                },
            });
        }
    }

    instances
}

/// The rolling viewing window: first day of the month two months back
/// through the last day of the month two months ahead.
pub fn default_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first_of_month = today.with_day(1).unwrap_or(today);
    let start = first_of_month - Months::new(2);
    let end = (first_of_month + Months::new(3)).pred_opt().unwrap_or(today);
    (start, end)
}
