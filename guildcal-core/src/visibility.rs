//! Viewer-specific event visibility.

use chrono::NaiveDate;

use crate::event::{Event, EventStatus};
use crate::recurrence::{self, default_window};
use crate::state::AppState;

/// Whether `viewer_id` may see `event`: published events are visible to
/// everyone, anything else only to its author. Materialized instances
/// inherit status and author from their template, so the same rule applies
/// uniformly.
pub fn is_visible_to(viewer_id: &str, event: &Event) -> bool {
    event.status == EventStatus::Published || event.author_id == viewer_id
}

/// Filter `events` down to the ones `viewer_id` may see.
pub fn visible_to(viewer_id: &str, events: &[Event]) -> Vec<Event> {
    events
        .iter()
        .filter(|e| is_visible_to(viewer_id, e))
        .cloned()
        .collect()
}

/// The render-ready event list for the current viewer: concrete single
/// events plus recurring instances materialized over the rolling window
/// around `today`, visibility-filtered. Pure function of
/// `(state.events, state.current_user_id, today)`; callers may memoize.
pub fn derived_events(state: &AppState, today: NaiveDate) -> Vec<Event> {
    let (window_start, window_end) = default_window(today);
    let instances = recurrence::expand(&state.events, window_start, window_end);

    let mut events: Vec<Event> = state
        .events
        .iter()
        .filter(|e| !e.is_template())
        .cloned()
        .collect();
    events.extend(instances);

    events.retain(|e| is_visible_to(&state.current_user_id, e));
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;

    fn event(id: &str, author_id: &str, status: EventStatus) -> Event {
        let day = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
        Event {
            id: id.to_string(),
            title: "Siege Practice".to_string(),
            description: String::new(),
            start: day.and_hms_opt(20, 0, 0).unwrap(),
            end: day.and_hms_opt(21, 0, 0).unwrap(),
            category_id: "cat-1".to_string(),
            author_id: author_id.to_string(),
            status,
            image: None,
            kind: EventKind::Single,
        }
    }

    #[test]
    fn test_draft_visible_to_author_only() {
        let events = vec![event("e1", "user-1", EventStatus::Draft)];
        assert_eq!(visible_to("user-1", &events).len(), 1);
        assert!(visible_to("user-2", &events).is_empty());
    }

    #[test]
    fn test_published_visible_to_everyone() {
        let events = vec![event("e1", "user-1", EventStatus::Published)];
        assert_eq!(visible_to("user-2", &events).len(), 1);
    }

    #[test]
    fn test_private_behaves_like_draft() {
        let events = vec![event("e1", "user-1", EventStatus::Private)];
        assert_eq!(visible_to("user-1", &events).len(), 1);
        assert!(visible_to("user-2", &events).is_empty());
    }

    #[test]
    fn test_derived_events_inherit_template_visibility() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
        let mut state = AppState::initial(today);
        state.events.clear();
        state.events.push(Event {
            kind: EventKind::Template {
                pattern: crate::event::RecurringPattern::weekly(vec![0]),
                exception_dates: Vec::new(),
            },
            ..event("t1", "user-1", EventStatus::Draft)
        });

        state.current_user_id = "user-1".to_string();
        assert!(!derived_events(&state, today).is_empty());

        state.current_user_id = "user-2".to_string();
        assert!(derived_events(&state, today).is_empty());
    }

    #[test]
    fn test_derived_events_exclude_raw_templates() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
        let state = AppState::initial(today);
        let derived = derived_events(&state, today);
        assert!(derived.iter().all(|e| !e.is_template()));
        // Seeded templates must have produced instances in the window.
        assert!(derived
            .iter()
            .any(|e| matches!(e.kind, EventKind::Instance { .. })));
    }
}
