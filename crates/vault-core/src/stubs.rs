//! Stand-in services used until real backends exist.
//!
//! Each stub waits on a `DelayPort` to simulate network latency, then
//! resolves deterministically. None of them ever fails.

use std::rc::Rc;
use async_trait::async_trait;
use vault_types::{auth::Credentials, Result};
use crate::ports::{AuthPort, DelayPort, ResponderPort, TranslatorPort};

const MOCK_TRANSLATIONS: &[(&str, &str)] = &[
    ("hi", "नमस्ते, मैं आपकी सहायता कैसे कर सकता हूँ?"),
    ("bn", "হ্যালো, আমি কীভাবে আপনাকে সাহায্য করতে পারি?"),
    ("te", "హలో, నేను మీకు ఎలా సహాయం చేయగలను?"),
    ("ta", "வணக்கம், நான் உங்களுக்கு எப்படி உதவ முடியும்?"),
];

/// Fixed phrase for the four table languages, a tagged echo otherwise
pub fn lookup_translation(text: &str, language_code: &str) -> String {
    MOCK_TRANSLATIONS
        .iter()
        .find(|(code, _)| *code == language_code)
        .map(|(_, phrase)| phrase.to_string())
        .unwrap_or_else(|| format!("[Translated to {}]: {}", language_code, text))
}

pub fn compose_reply(prompt: &str) -> String {
    format!(
        "Thank you for your message: \"{}\". As VaultAI, I understand your query and here's my response. \
         I can help you with translations, conversations, and various other tasks. \
         Is there anything specific you'd like to know or discuss further?",
        prompt
    )
}

/// Resolves immediately. Used in tests and for zero-latency configs.
pub struct NoDelay;

#[async_trait(?Send)]
impl DelayPort for NoDelay {
    async fn sleep(&self, _ms: u32) {}
}

pub struct StubTranslator {
    delay: Rc<dyn DelayPort>,
    delay_ms: u32,
}

impl StubTranslator {
    pub fn new(delay: Rc<dyn DelayPort>, delay_ms: u32) -> Self {
        Self { delay, delay_ms }
    }
}

#[async_trait(?Send)]
impl TranslatorPort for StubTranslator {
    async fn translate(&self, text: &str, language_code: &str) -> Result<String> {
        self.delay.sleep(self.delay_ms).await;
        Ok(lookup_translation(text, language_code))
    }
}

pub struct StubResponder {
    delay: Rc<dyn DelayPort>,
    delay_ms: u32,
}

impl StubResponder {
    pub fn new(delay: Rc<dyn DelayPort>, delay_ms: u32) -> Self {
        Self { delay, delay_ms }
    }
}

#[async_trait(?Send)]
impl ResponderPort for StubResponder {
    async fn respond(&self, prompt: &str) -> Result<String> {
        self.delay.sleep(self.delay_ms).await;
        Ok(compose_reply(prompt))
    }
}

/// Accepts every credential pair. There is no account store.
pub struct StubAuthenticator;

#[async_trait(?Send)]
impl AuthPort for StubAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<()> {
        log::debug!("Stub authenticator accepting {}", credentials.email);
        Ok(())
    }
}
