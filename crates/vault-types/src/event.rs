use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A user-visible, non-blocking notification (rendered as a toast)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            level: NoticeLevel::Info,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            level: NoticeLevel::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// Which translation box a request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Input,
    Output,
}

impl SlotKind {
    pub fn noun(&self) -> &'static str {
        match self {
            SlotKind::Input => "input",
            SlotKind::Output => "output",
        }
    }
}

/// Events emitted by the controller.
/// The UI drains these each frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Show a toast
    Notice(Notice),

    /// Session flipped between logged in and logged out
    SessionChanged { authenticated: bool },

    /// A message landed in the transcript
    MessageAppended { id: String },

    /// The response stub was invoked
    ReplyPending { ticket: u64 },

    /// The response stub finished (successfully or not)
    ReplySettled { ticket: u64, success: bool },

    /// A translation slot finished
    TranslationSettled { slot: SlotKind, success: bool },
}
