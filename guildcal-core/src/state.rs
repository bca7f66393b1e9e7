//! Application state and its seeded defaults.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::activity::ActivityLog;
use crate::category::Category;
use crate::comment::Comment;
use crate::event::{Event, EventKind, EventStatus, RecurringPattern};
use crate::notification::Notification;
use crate::settings::Settings;
use crate::toast::Toast;
use crate::user::{Permissions, Role, User};

/// The entire application state. This is the persisted blob: everything the
/// app knows lives here, and the reducer is the only writer. Materialized
/// recurring instances are not part of it; they are derived on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub users: Vec<User>,
    pub current_user_id: String,
    pub categories: Vec<Category>,
    /// Concrete single events and recurring templates only.
    pub events: Vec<Event>,
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub settings: Settings,
    /// Event ids the current viewer has starred.
    #[serde(default)]
    pub favorites: Vec<String>,
    #[serde(default)]
    pub activity_log: Vec<ActivityLog>,
    /// Ephemeral, never persisted.
    #[serde(skip)]
    pub toasts: Vec<Toast>,
}

impl AppState {
    pub fn current_user(&self) -> Option<&User> {
        self.users.iter().find(|u| u.id == self.current_user_id)
    }

    /// The factory-default state, seeded with starter users, categories,
    /// events and weekly templates. Also the target of a full reset.
    pub fn initial(today: NaiveDate) -> AppState {
        let users = vec![
            User {
                id: "user-1".to_string(),
                name: "PlayerOne".to_string(),
                avatar: "https://picsum.photos/seed/user1/100/100".to_string(),
                role: Role::Admin,
                permissions: Permissions {
                    can_manage_users: true,
                    can_manage_categories: true,
                    can_manage_settings: true,
                },
            },
            User {
                id: "user-2".to_string(),
                name: "GuildMaster".to_string(),
                avatar: "https://picsum.photos/seed/user2/100/100".to_string(),
                role: Role::Member,
                permissions: Permissions::default(),
            },
        ];

        let categories = vec![
            category("cat-1", "GVG", "#ef4444", "swords"),
            category("cat-2", "KVM", "#a855f7", "swords"),
            category("cat-3", "Event", "#3b82f6", "calendar"),
            category("cat-4", "Update", "#22c55e", "update"),
            category("cat-5", "Maintenance", "#eab308", "maint"),
        ];

        let tomorrow = today + Duration::days(1);
        let next_week = today + Duration::days(7);

        let events = vec![
            Event {
                id: "event-1".to_string(),
                title: "Castle Siege Practice".to_string(),
                description: "Practice run for the upcoming siege. All members are required to attend.".to_string(),
                start: at(today, 20, 0),
                end: at(today, 21, 0),
                category_id: "cat-1".to_string(),
                author_id: "user-1".to_string(),
                status: EventStatus::Published,
                image: None,
                kind: EventKind::Single,
            },
            Event {
                id: "event-2".to_string(),
                title: "World Boss Hunt".to_string(),
                description: "Let's take down the world boss together!".to_string(),
                start: at(tomorrow, 19, 30),
                end: at(tomorrow, 20, 30),
                category_id: "cat-3".to_string(),
                author_id: "user-2".to_string(),
                status: EventStatus::Published,
                image: Some("https://picsum.photos/seed/event2/400/200".to_string()),
                kind: EventKind::Single,
            },
            Event {
                id: "event-3".to_string(),
                title: "Scheduled Maintenance".to_string(),
                description: "Servers will be down for scheduled maintenance.".to_string(),
                start: at(next_week, 4, 0),
                end: at(next_week, 6, 0),
                category_id: "cat-5".to_string(),
                author_id: "user-1".to_string(),
                status: EventStatus::Published,
                image: None,
                kind: EventKind::Single,
            },
            Event {
                id: "recurring-weekly-gvg".to_string(),
                title: "Weekly Guild vs Guild (GVG)".to_string(),
                description: "Main weekly GVG event. Full participation expected.".to_string(),
                start: at(today, 21, 0),
                end: at(today, 22, 0),
                category_id: "cat-1".to_string(),
                author_id: "user-1".to_string(),
                status: EventStatus::Published,
                image: None,
                kind: EventKind::Template {
                    // Tue, Thu, Sat
                    pattern: RecurringPattern::weekly(vec![2, 4, 6]),
                    exception_dates: Vec::new(),
                },
            },
            Event {
                id: "recurring-guild-quest-rally".to_string(),
                title: "Weekly Guild Quest Rally".to_string(),
                description: "Gather for weekly guild quests.".to_string(),
                start: at(today, 14, 0),
                end: at(today, 15, 0),
                category_id: "cat-3".to_string(),
                author_id: "user-1".to_string(),
                status: EventStatus::Published,
                image: None,
                kind: EventKind::Template {
                    // Sunday
                    pattern: RecurringPattern::weekly(vec![0]),
                    exception_dates: Vec::new(),
                },
            },
        ];

        let comments = vec![
            Comment {
                id: "comment-1".to_string(),
                event_id: "event-1".to_string(),
                author_id: "user-2".to_string(),
                content: "I will be there! Looking forward to it.".to_string(),
                created_at: at(today, 9, 50),
            },
            Comment {
                id: "comment-2".to_string(),
                event_id: "event-1".to_string(),
                author_id: "user-1".to_string(),
                content: "Great! Make sure to bring your best gear.".to_string(),
                created_at: at(today, 9, 55),
            },
        ];

        AppState {
            users,
            current_user_id: "user-1".to_string(),
            categories,
            events,
            comments,
            notifications: Vec::new(),
            settings: Settings::default(),
            favorites: Vec::new(),
            activity_log: Vec::new(),
            toasts: Vec::new(),
        }
    }
}

fn category(id: &str, name: &str, color: &str, icon: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        icon: icon.to_string(),
    }
}

fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, 0).unwrap()
}
