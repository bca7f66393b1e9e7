//! Core state machine for the guildcal scheduling app.
//!
//! This crate provides everything the shell needs to run a guild calendar:
//! - domain types (`Event`, `Category`, `User`, `Comment`, `Notification`, ...)
//! - the `reduce` state transition function that applies `Action`s
//! - recurrence expansion of weekly templates into dated instances
//! - the visibility filter that derives the viewer-specific event list
//! - the reminder scan used by the notification scheduler
//! - backup / design-pack import & export

pub mod action;
pub mod activity;
pub mod backup;
pub mod category;
pub mod comment;
pub mod error;
pub mod event;
pub mod notification;
pub mod recurrence;
pub mod reducer;
pub mod reminder;
pub mod settings;
pub mod state;
pub mod toast;
pub mod user;
pub mod visibility;

// Re-export the types almost every caller needs at crate root
pub use action::{Action, RecurringEditMode};
pub use event::{Event, EventKind, EventStatus, RecurringPattern};
pub use reducer::reduce;
pub use state::AppState;
