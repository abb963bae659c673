use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Agent,
}

impl Sender {
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Agent => "VaultAI",
        }
    }
}

/// A single transcript entry. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(Sender::Agent, text)
    }

    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    /// Wall-clock label shown next to the bubble
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Fresh random id for messages and new chats
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub const GREETING: &str = "Hello! I'm VaultAI, your smart and secure conversational agent. \
I can help you with various tasks including translation between English and Indian languages. \
How can I assist you today?";
