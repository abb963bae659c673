//! Sidebar list of past conversations.
//!
//! Independent of the transcript: selecting an entry only moves the
//! current-id marker.

use chrono::{DateTime, Utc};
use vault_types::{
    history::{seed_summaries, ChatSummary},
    message::new_id,
};

pub const INITIAL_CHAT_ID: &str = "1";

#[derive(Debug, Clone)]
pub struct HistoryList {
    entries: Vec<ChatSummary>,
    current_id: String,
}

impl HistoryList {
    pub fn new(entries: Vec<ChatSummary>) -> Self {
        Self {
            entries,
            current_id: INITIAL_CHAT_ID.to_string(),
        }
    }

    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self::new(seed_summaries(now))
    }

    pub fn entries(&self) -> &[ChatSummary] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current_id(&self) -> &str {
        &self.current_id
    }

    pub fn is_current(&self, id: &str) -> bool {
        self.current_id == id
    }

    /// Returns whether an entry was removed. The marker is left alone.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|c| c.id != id);
        self.entries.len() != before
    }

    pub fn select(&mut self, id: &str) {
        self.current_id = id.to_string();
    }

    /// Point the marker at a brand-new id. No entry is created.
    pub fn new_chat(&mut self) -> &str {
        self.current_id = new_id();
        &self.current_id
    }
}
