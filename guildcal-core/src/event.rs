//! Event types.
//!
//! An event is either a concrete single event, a recurring weekly template,
//! or a materialized instance derived from a template. The three roles are
//! a tagged variant so that an instance can never carry its own recurrence
//! pattern and a template can never carry a back-reference to itself.
//! Only `Single` and `Template` events are ever persisted; `Instance`
//! events exist in memory for the current viewing window and are recomputed
//! from templates and their exception dates.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Wall-clock start. For templates only the time-of-day is meaningful.
    pub start: NaiveDateTime,
    /// Wall-clock end, after `start`. For templates only the time-of-day is meaningful.
    pub end: NaiveDateTime,
    pub category_id: String,
    pub author_id: String,
    pub status: EventStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub kind: EventKind,
}

/// Publication status. Non-published events are visible to their author only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Published,
    Draft,
    Private,
}

/// The role an event plays: concrete, series definition, or derived occurrence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// An ordinary one-off event.
    #[default]
    Single,
    /// A recurring series definition.
    Template {
        pattern: RecurringPattern,
        /// Dates whose occurrence is suppressed or superseded by a detached edit.
        #[serde(default)]
        exception_dates: Vec<NaiveDate>,
    },
    /// A dated occurrence materialized from a template. Never persisted.
    Instance {
        /// Id of the template this occurrence was generated from.
        template_id: String,
        /// The occurrence's own start, used as the exception key when detaching.
        original_start: NaiveDateTime,
    },
}

/// Weekly recurrence pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringPattern {
    pub frequency: Frequency,
    /// Weekday ordinals, 0 = Sunday through 6 = Saturday.
    pub days: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
}

impl RecurringPattern {
    pub fn weekly(days: Vec<u8>) -> RecurringPattern {
        RecurringPattern {
            frequency: Frequency::Weekly,
            days,
        }
    }
}

impl Event {
    pub fn is_template(&self) -> bool {
        matches!(self.kind, EventKind::Template { .. })
    }

    /// The id of the series this event belongs to: the back-reference for
    /// an instance, the event's own id otherwise. Comments on a recurring
    /// occurrence attach to this id, so all occurrences share one thread.
    pub fn template_id(&self) -> &str {
        match &self.kind {
            EventKind::Instance { template_id, .. } => template_id,
            _ => &self.id,
        }
    }

    /// The exception key for this event: an instance's original start,
    /// falling back to the event's own start.
    pub fn original_start(&self) -> NaiveDateTime {
        match &self.kind {
            EventKind::Instance { original_start, .. } => *original_start,
            _ => self.start,
        }
    }

    pub fn exception_dates(&self) -> &[NaiveDate] {
        match &self.kind {
            EventKind::Template {
                exception_dates, ..
            } => exception_dates,
            _ => &[],
        }
    }
}
