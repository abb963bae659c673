//! Async glue between the controller and the ports.
//!
//! Each function borrows the controller only for the synchronous begin and
//! complete steps, never across an await, so the UI can keep borrowing it
//! while a stub is pending. Spawn these via `wasm_bindgen_futures::spawn_local`.

use std::cell::RefCell;
use vault_types::{
    auth::LoginForm,
    event::{Notice, SlotKind},
    Result, VaultError,
};
use crate::controller::ChatController;
use crate::event_bus::EventBus;
use crate::ports::{AuthPort, ClipboardPort, ResponderPort, SpeechPort, TranslatorPort};

pub async fn login(
    controller: &RefCell<ChatController>,
    form: &LoginForm,
    auth: &dyn AuthPort,
) -> Result<()> {
    let ticket = controller.borrow_mut().begin_login(form)?;
    let result = auth.authenticate(&ticket.credentials).await;
    if !controller.borrow_mut().complete_login(ticket, result.clone()) {
        return Err(VaultError::Cancelled);
    }
    result
}

/// User message now, agent message once the responder resolves.
pub async fn submit(
    controller: &RefCell<ChatController>,
    text: &str,
    responder: &dyn ResponderPort,
) -> Result<()> {
    let ticket = controller.borrow_mut().begin_submit(text)?;
    let result = responder.respond(&ticket.prompt).await;
    if !controller.borrow_mut().complete_submit(ticket, result.clone()) {
        return Err(VaultError::Cancelled);
    }
    result.map(|_| ())
}

/// Returns `Ok(None)` when the slot had nothing to do.
pub async fn translate(
    controller: &RefCell<ChatController>,
    slot: SlotKind,
    translator: &dyn TranslatorPort,
) -> Result<Option<String>> {
    let ticket = match controller.borrow_mut().begin_translate(slot) {
        Some(t) => t,
        None => return Ok(None),
    };
    let result = translator.translate(&ticket.text, &ticket.language).await;
    if !controller.borrow_mut().complete_translate(ticket, result.clone()) {
        return Err(VaultError::Cancelled);
    }
    result.map(Some)
}

/// `label` names what was copied in the notice, e.g. "Message".
pub async fn copy(
    events: &EventBus,
    clipboard: &dyn ClipboardPort,
    label: &str,
    text: &str,
) -> Result<()> {
    match clipboard.write_text(text).await {
        Ok(()) => {
            events.notify(Notice::info("Copied", format!("{} copied to clipboard", label)));
            Ok(())
        }
        Err(e) => {
            log::warn!("Clipboard write failed: {}", e);
            events.notify(Notice::error("Error", "Failed to copy text"));
            Err(e)
        }
    }
}

pub fn speak(
    events: &EventBus,
    speech: &dyn SpeechPort,
    text: &str,
    language: Option<&str>,
) -> Result<()> {
    if !speech.is_supported() {
        events.notify(Notice::error(
            "Not supported",
            "Text-to-speech is not supported in this browser",
        ));
        return Err(VaultError::Unsupported("speech synthesis".to_string()));
    }
    speech.speak(text, language).map_err(|e| {
        log::warn!("Speech failed: {}", e);
        events.notify(Notice::error("Error", "Failed to speak text"));
        e
    })
}
