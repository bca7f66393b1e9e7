//! Global application settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub theme: Theme,
    pub background_url: String,
    pub enable_comments: bool,
    pub enable_notifications: bool,
    pub language: Language,
    pub app_name: String,
    pub app_icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ja,
    En,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            theme: Theme::Light,
            background_url: String::new(),
            enable_comments: true,
            enable_notifications: true,
            language: Language::Ja,
            app_name: "Guild Schedule Planner".to_string(),
            app_icon: String::new(),
        }
    }
}
