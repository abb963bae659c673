//! Chat controller: owns every piece of client state.
//!
//! Async operations are split in two: a synchronous `begin_*` step that
//! validates and moves a request to pending (returning a ticket), and a
//! `complete_*` step that applies the port's result only if the ticket is
//! still current. Callers await the port between the two without holding a
//! borrow on the controller (see `workflow`).

use chrono::Utc;
use vault_types::{
    auth::{AuthMode, Credentials, LoginForm},
    config::AppConfig,
    event::{AppEvent, Notice, SlotKind},
    history::ChatSummary,
    message::Message,
    Result, VaultError,
};
use crate::event_bus::EventBus;
use crate::history::HistoryList;
use crate::request::{Request, Ticket};
use crate::session::{validate_login, SessionGate, View};
use crate::transcript::Transcript;
use crate::translation::{Translation, TranslationSlot};

/// Handed out by `begin_login`
#[derive(Debug, Clone)]
pub struct LoginTicket {
    ticket: Ticket,
    mode: AuthMode,
    pub credentials: Credentials,
}

/// Handed out by `begin_submit`
#[derive(Debug, Clone)]
pub struct ReplyTicket {
    ticket: Ticket,
    pub prompt: String,
}

impl ReplyTicket {
    pub fn id(&self) -> u64 {
        self.ticket.0
    }
}

/// Handed out by `begin_translate`
#[derive(Debug, Clone)]
pub struct TranslateTicket {
    ticket: Ticket,
    pub slot: SlotKind,
    pub text: String,
    pub language: String,
}

pub struct ChatController {
    config: AppConfig,
    events: EventBus,
    session: SessionGate,
    auth: Request<()>,
    transcript: Transcript,
    history: HistoryList,
    reply: Request<String>,
    latest_response: Option<String>,
    input_slot: TranslationSlot,
    output_slot: TranslationSlot,
    /// Composer text, edited directly by the chat panel
    pub composer: String,
}

impl ChatController {
    pub fn new(config: AppConfig, events: EventBus) -> Self {
        let input_slot = TranslationSlot::new(SlotKind::Input, &config.default_input_language);
        let output_slot = TranslationSlot::new(SlotKind::Output, &config.default_output_language);
        Self {
            config,
            events,
            session: SessionGate::new(),
            auth: Request::new(),
            transcript: Transcript::seeded(),
            history: HistoryList::seeded(Utc::now()),
            reply: Request::new(),
            latest_response: None,
            input_slot,
            output_slot,
            composer: String::new(),
        }
    }

    // ─── Accessors ───────────────────────────────────────────

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn session(&self) -> &SessionGate {
        &self.session
    }

    pub fn view(&self) -> View {
        self.session.view()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Email to show in the sidebar footer
    pub fn user_email(&self) -> &str {
        self.session
            .credentials()
            .map(|c| c.email.as_str())
            .unwrap_or(&self.config.fallback_user_email)
    }

    pub fn is_signing_in(&self) -> bool {
        self.auth.is_pending()
    }

    pub fn messages(&self) -> &[Message] {
        self.transcript.messages()
    }

    pub fn history(&self) -> &HistoryList {
        &self.history
    }

    pub fn chat_summaries(&self) -> &[ChatSummary] {
        self.history.entries()
    }

    pub fn latest_response(&self) -> Option<&str> {
        self.latest_response.as_deref()
    }

    pub fn is_generating(&self) -> bool {
        self.reply.is_pending()
    }

    pub fn can_generate(&self) -> bool {
        !self.composer.trim().is_empty() && !self.is_generating()
    }

    pub fn slot(&self, kind: SlotKind) -> &TranslationSlot {
        match kind {
            SlotKind::Input => &self.input_slot,
            SlotKind::Output => &self.output_slot,
        }
    }

    fn slot_mut(&mut self, kind: SlotKind) -> &mut TranslationSlot {
        match kind {
            SlotKind::Input => &mut self.input_slot,
            SlotKind::Output => &mut self.output_slot,
        }
    }

    /// Text a slot would translate right now
    pub fn slot_source(&self, kind: SlotKind) -> &str {
        match kind {
            SlotKind::Input => &self.composer,
            SlotKind::Output => self.latest_response.as_deref().unwrap_or(""),
        }
    }

    pub fn can_translate(&self, kind: SlotKind) -> bool {
        let slot = self.slot(kind);
        !self.slot_source(kind).is_empty() && !slot.language.is_empty() && !slot.is_translating()
    }

    // ─── Session ─────────────────────────────────────────────

    pub fn begin_login(&mut self, form: &LoginForm) -> Result<LoginTicket> {
        let credentials = match validate_login(form) {
            Ok(c) => c,
            Err(VaultError::PasswordMismatch) => {
                self.events
                    .notify(Notice::error("Password mismatch", "Passwords do not match"));
                return Err(VaultError::PasswordMismatch);
            }
            Err(e) => {
                self.events.notify(Notice::error(
                    "Missing credentials",
                    "Please enter your email and password",
                ));
                return Err(e);
            }
        };
        let ticket = self.auth.begin()?;
        Ok(LoginTicket {
            ticket,
            mode: form.mode,
            credentials,
        })
    }

    pub fn complete_login(&mut self, ticket: LoginTicket, result: Result<()>) -> bool {
        match result {
            Ok(()) => {
                if !self.auth.resolve(ticket.ticket, ()) {
                    log::debug!("Discarding stale login result");
                    return false;
                }
                log::info!("Signed in as {}", ticket.credentials.email);
                self.session.login(ticket.credentials);
                self.events.emit(AppEvent::SessionChanged { authenticated: true });
                self.events.notify(match ticket.mode {
                    AuthMode::SignIn => Notice::info("Welcome back", "Successfully logged in"),
                    AuthMode::SignUp => {
                        Notice::info("Account created", "Your VaultAI account has been created")
                    }
                });
                true
            }
            Err(e) => {
                if !self.auth.fail(ticket.ticket, e.to_string()) {
                    log::debug!("Discarding stale login failure");
                    return false;
                }
                log::warn!("Sign in rejected: {}", e);
                self.events.notify(Notice::error("Sign in failed", e.to_string()));
                true
            }
        }
    }

    /// Leave the chat view. Everything the view owned goes back to its seed
    /// state and in-flight results are dropped when they arrive.
    pub fn logout(&mut self) {
        self.session.logout();
        self.auth.cancel();
        self.reply.cancel();
        self.transcript = Transcript::seeded();
        self.history = HistoryList::seeded(Utc::now());
        self.latest_response = None;
        self.composer.clear();
        self.input_slot.reset(self.config.default_input_language.as_str());
        self.output_slot.reset(self.config.default_output_language.as_str());
        log::info!("Signed out");
        self.events.emit(AppEvent::SessionChanged { authenticated: false });
    }

    // ─── Transcript ──────────────────────────────────────────

    /// Append the user's message and mark the reply pending.
    pub fn begin_submit(&mut self, text: &str) -> Result<ReplyTicket> {
        if text.trim().is_empty() {
            self.events.notify(Notice::error(
                "Input required",
                "Please enter some text before generating a response",
            ));
            return Err(VaultError::Validation("message is empty".to_string()));
        }
        let ticket = match self.reply.begin() {
            Ok(t) => t,
            Err(e) => {
                self.events.notify(Notice::error(
                    "Please wait",
                    "A response is already being generated",
                ));
                return Err(e);
            }
        };

        let id = match self.transcript.push(Message::user(text)) {
            Ok(m) => m.id.clone(),
            Err(e) => {
                self.reply.cancel();
                return Err(e);
            }
        };
        self.events.emit(AppEvent::MessageAppended { id });
        self.events.emit(AppEvent::ReplyPending { ticket: ticket.0 });

        Ok(ReplyTicket {
            ticket,
            prompt: text.to_string(),
        })
    }

    pub fn complete_submit(&mut self, ticket: ReplyTicket, result: Result<String>) -> bool {
        match result {
            Ok(reply) => {
                if !self.reply.resolve(ticket.ticket, reply.clone()) {
                    log::debug!("Discarding stale reply for ticket {}", ticket.id());
                    return false;
                }
                let id = match self.transcript.push(Message::agent(reply.clone())) {
                    Ok(m) => m.id.clone(),
                    Err(e) => {
                        log::error!("Failed to append reply: {}", e);
                        return false;
                    }
                };
                self.latest_response = Some(reply);
                self.composer.clear();
                self.input_slot.clear();
                self.events.emit(AppEvent::MessageAppended { id });
                self.events.emit(AppEvent::ReplySettled {
                    ticket: ticket.id(),
                    success: true,
                });
                self.events
                    .notify(Notice::info("Response generated", "AI has responded to your message"));
                true
            }
            Err(e) => {
                if !self.reply.fail(ticket.ticket, e.to_string()) {
                    log::debug!("Discarding stale reply failure for ticket {}", ticket.id());
                    return false;
                }
                log::error!("Response generation failed: {}", e);
                self.events.emit(AppEvent::ReplySettled {
                    ticket: ticket.id(),
                    success: false,
                });
                self.events
                    .notify(Notice::error("Generation failed", "Failed to generate AI response"));
                true
            }
        }
    }

    // ─── Translation ─────────────────────────────────────────

    pub fn set_language(&mut self, kind: SlotKind, code: impl Into<String>) {
        self.slot_mut(kind).language = code.into();
    }

    /// `None` when there is nothing to translate, no language is picked,
    /// or the slot is already busy. The translator is not invoked then.
    pub fn begin_translate(&mut self, kind: SlotKind) -> Option<TranslateTicket> {
        if !self.can_translate(kind) {
            return None;
        }
        let text = self.slot_source(kind).to_string();
        let slot = self.slot_mut(kind);
        let language = slot.language.clone();
        let ticket = slot.request.begin().ok()?;
        Some(TranslateTicket {
            ticket,
            slot: kind,
            text,
            language,
        })
    }

    pub fn complete_translate(&mut self, ticket: TranslateTicket, result: Result<String>) -> bool {
        let kind = ticket.slot;
        let success = result.is_ok();
        let applied = match result {
            Ok(text) => self.slot_mut(kind).request.resolve(
                ticket.ticket,
                Translation {
                    text,
                    language: ticket.language,
                },
            ),
            Err(e) => {
                log::error!("Translation of {} failed: {}", kind.noun(), e);
                self.slot_mut(kind).request.fail(ticket.ticket, e.to_string())
            }
        };
        if !applied {
            log::debug!("Discarding stale {} translation", kind.noun());
            return false;
        }

        self.events.emit(AppEvent::TranslationSettled { slot: kind, success });
        self.events.notify(if success {
            Notice::info(
                "Translation complete",
                format!("{} text has been translated", capitalize(kind.noun())),
            )
        } else {
            Notice::error(
                "Translation failed",
                format!("Failed to translate {} text", kind.noun()),
            )
        });
        true
    }

    // ─── History ─────────────────────────────────────────────

    pub fn select_chat(&mut self, id: &str) {
        self.history.select(id);
    }

    pub fn delete_chat(&mut self, id: &str) -> bool {
        let removed = self.history.delete(id);
        if removed {
            log::info!("Deleted chat {}", id);
        }
        removed
    }

    pub fn new_chat(&mut self) -> String {
        self.history.new_chat().to_string()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
