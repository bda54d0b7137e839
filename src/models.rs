//! Frontend Models
//!
//! Data structures matching server payloads.

use serde::{Deserialize, Serialize};

/// Request ("zayavka") as delivered by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zayavka {
    pub id: u32,
    #[serde(rename = "type")]
    pub zayavka_type: String,
    pub description: String,
    pub status: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub urgent: bool,
    /// Submitter login; absent from search responses
    #[serde(default)]
    pub username: String,
    /// Submitter full name; absent from search responses
    #[serde(default)]
    pub full_name: String,
}

/// Registered user as listed on the users tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl User {
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// Status options: (stored value, label)
pub const STATUSES: &[(&str, &str)] = &[
    ("ожидает", "Ожидает"),
    ("принято", "Принято"),
    ("сделано", "Сделано"),
    ("отклонено", "Отклонено"),
    ("отказано", "Отказано"),
];

/// Statuses offered as per-card action buttons: (status sent, button colour)
pub const STATUS_ACTIONS: &[(&str, &str)] = &[
    ("Сделано", "#1cc88a"),
    ("Отклонено", "#e74a3b"),
];

/// Badge colour for a status (case-insensitive)
pub fn status_color(status: &str) -> &'static str {
    match status.trim().to_lowercase().as_str() {
        "сделано" => "green",
        "отклонено" => "red",
        "ожидает" => "orange",
        "неизвестно" => "gray",
        _ => "lightblue",
    }
}
