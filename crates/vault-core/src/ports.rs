//! Port traits: the hexagonal architecture boundary.
//!
//! These traits are defined here in `vault-core` (pure Rust).
//! Stub implementations live in `stubs`; browser adapters live in
//! `vault-platform`. The core never imports platform code.

use async_trait::async_trait;
use vault_types::{auth::Credentials, Result};

// ─── Service Ports ───────────────────────────────────────────

#[async_trait(?Send)]
pub trait AuthPort {
    /// Accept or reject a credential pair
    async fn authenticate(&self, credentials: &Credentials) -> Result<()>;
}

#[async_trait(?Send)]
pub trait TranslatorPort {
    /// Translate `text` into the language identified by `language_code`
    async fn translate(&self, text: &str, language_code: &str) -> Result<String>;
}

#[async_trait(?Send)]
pub trait ResponderPort {
    /// Produce the agent's reply to a user prompt
    async fn respond(&self, prompt: &str) -> Result<String>;
}

// ─── Platform Ports ──────────────────────────────────────────

#[async_trait(?Send)]
pub trait DelayPort {
    /// Resolve after `ms` milliseconds
    async fn sleep(&self, ms: u32);
}

#[async_trait(?Send)]
pub trait ClipboardPort {
    async fn write_text(&self, text: &str) -> Result<()>;
}

pub trait SpeechPort {
    /// Whether the platform can speak at all
    fn is_supported(&self) -> bool;

    /// Queue `text` for speech, tagged with an optional BCP-47 language
    fn speak(&self, text: &str, language: Option<&str>) -> Result<()>;
}
