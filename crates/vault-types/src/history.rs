use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Sidebar entry for a past conversation.
/// Not linked to any transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSummary {
    pub id: String,
    pub title: String,
    pub timestamp: DateTime<Utc>,
    pub preview: String,
}

impl ChatSummary {
    fn seeded(id: &str, title: &str, age: Duration, preview: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            timestamp: now - age,
            preview: preview.to_string(),
        }
    }
}

/// Sample conversations the sidebar starts with, aged relative to `now`
pub fn seed_summaries(now: DateTime<Utc>) -> Vec<ChatSummary> {
    vec![
        ChatSummary::seeded(
            "1",
            "Translation & Chat Session",
            Duration::minutes(30),
            "How to translate text from English to Hindi...",
            now,
        ),
        ChatSummary::seeded(
            "2",
            "AI Conversation",
            Duration::hours(2),
            "Discussing machine learning concepts...",
            now,
        ),
        ChatSummary::seeded(
            "3",
            "Language Learning Help",
            Duration::hours(24),
            "Learning Tamil phrases for travel...",
            now,
        ),
    ]
}

/// Coarse "time ago" label used in the sidebar.
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - timestamp).num_hours();
    let days = hours / 24;

    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if days < 7 {
        format!("{}d ago", days)
    } else {
        timestamp.format("%Y-%m-%d").to_string()
    }
}
