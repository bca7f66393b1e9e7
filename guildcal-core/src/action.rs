//! Actions accepted by the state reducer.

use crate::category::Category;
use crate::comment::Comment;
use crate::event::Event;
use crate::notification::Notification;
use crate::settings::Settings;
use crate::state::AppState;
use crate::toast::ToastKind;
use crate::user::User;

/// Whether a recurring edit targets one occurrence or the whole series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurringEditMode {
    Single,
    All,
}

/// Every state transition in the app. Delete actions carry the entity's
/// name captured by the caller, since the entity no longer exists to
/// introspect once the activity log entry is written.
#[derive(Debug, Clone)]
pub enum Action {
    AddEvent(Event),
    UpdateEvent(Event),
    DeleteEvent {
        event_id: String,
        event_name: String,
    },
    /// Edit a recurring series or detach one occurrence of it.
    UpdateRecurring {
        event: Event,
        mode: RecurringEditMode,
    },
    /// Delete a whole series or cancel one occurrence of it.
    DeleteRecurring {
        event: Event,
        mode: RecurringEditMode,
    },
    UpdateSettings(Settings),
    ToggleFavorite(String),
    SetCurrentUser(String),
    AddUser(User),
    UpdateUser(User),
    DeleteUser {
        user_id: String,
        user_name: String,
    },
    AddComment(Comment),
    DeleteComment(String),
    AddCategory(Category),
    UpdateCategory(Category),
    DeleteCategory {
        category_id: String,
        category_name: String,
    },
    AddNotifications(Vec<Notification>),
    MarkNotificationRead(String),
    MarkAllNotificationsRead,
    /// Full-backup import: replaces the entire state.
    ReplaceState(Box<AppState>),
    /// Design-pack import: replaces settings and categories only.
    ImportDesignSettings {
        settings: Settings,
        categories: Vec<Category>,
    },
    ClearActivityLog,
    ResetAppState,
    AddToast {
        message: String,
        kind: ToastKind,
    },
    RemoveToast(String),
}
