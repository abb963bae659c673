//! Translation slots: one for the composer text, one for the latest reply.

use vault_types::event::SlotKind;
use crate::request::Request;

/// A finished translation, remembered with the language it was made for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub language: String,
}

#[derive(Debug, Clone)]
pub struct TranslationSlot {
    pub kind: SlotKind,
    pub language: String,
    pub request: Request<Translation>,
}

impl TranslationSlot {
    pub fn new(kind: SlotKind, language: impl Into<String>) -> Self {
        Self {
            kind,
            language: language.into(),
            request: Request::new(),
        }
    }

    pub fn translation(&self) -> Option<&Translation> {
        self.request.value()
    }

    pub fn is_translating(&self) -> bool {
        self.request.is_pending()
    }

    /// Forget the last result (and any in-flight call)
    pub fn clear(&mut self) {
        self.request.cancel();
    }

    /// Back to a fresh slot on `language`. The request is cancelled rather
    /// than replaced so tickets handed out earlier never match again.
    pub fn reset(&mut self, language: impl Into<String>) {
        self.clear();
        self.language = language.into();
    }
}
