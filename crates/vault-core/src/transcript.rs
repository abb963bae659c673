//! Append-only transcript for the active chat view.

use vault_types::{
    message::{Message, GREETING},
    Result, VaultError,
};

#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Transcript as a fresh chat view shows it: one agent greeting
    pub fn seeded() -> Self {
        Self {
            messages: vec![Message::agent(GREETING)],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn contains(&self, id: &str) -> bool {
        self.messages.iter().any(|m| m.id == id)
    }

    pub fn push(&mut self, message: Message) -> Result<&Message> {
        if self.contains(&message.id) {
            return Err(VaultError::Validation(format!(
                "duplicate message id {}",
                message.id
            )));
        }
        self.messages.push(message);
        Ok(&self.messages[self.messages.len() - 1])
    }
}
