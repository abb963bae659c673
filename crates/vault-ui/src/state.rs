//! UI-local state: things the controller does not own (form fields while
//! typing, sidebar collapse, toasts, the delete confirmation), plus the
//! actions panels hand back to the app for dispatch.

use vault_types::auth::LoginForm;
use vault_types::event::{AppEvent, Notice, SlotKind};

/// Something a panel wants done. The app layer dispatches these after the
/// frame, once it no longer holds a borrow on the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    SignIn(LoginForm),
    Logout,
    NewChat,
    SelectChat(String),
    DeleteChat(String),
    Generate(String),
    Translate(SlotKind),
    Copy { label: &'static str, text: String },
    Speak { text: String, language: Option<String> },
}

/// A notice with the frame time it was first shown
#[derive(Debug, Clone)]
pub struct Toast {
    pub notice: Notice,
    pub shown_at: f64,
}

pub struct UiState {
    pub login_form: LoginForm,
    pub show_password: bool,
    pub sidebar_collapsed: bool,
    /// Chat id awaiting delete confirmation
    pub pending_delete: Option<String>,
    pub toasts: Vec<Toast>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            login_form: LoginForm::default(),
            show_password: false,
            sidebar_collapsed: false,
            pending_delete: None,
            toasts: Vec::new(),
        }
    }

    /// Fold controller events into UI state. `now` is the egui frame time.
    pub fn process_events(&mut self, events: Vec<AppEvent>, now: f64) {
        for event in events {
            match event {
                AppEvent::Notice(notice) => {
                    if notice.is_error() {
                        log::debug!("Error notice: {}", notice.title);
                    }
                    self.toasts.push(Toast {
                        notice,
                        shown_at: now,
                    });
                }
                AppEvent::SessionChanged { authenticated: true } => {
                    let mode = self.login_form.mode;
                    self.login_form = LoginForm {
                        mode,
                        ..LoginForm::default()
                    };
                    self.show_password = false;
                }
                AppEvent::SessionChanged { authenticated: false } => {
                    self.sidebar_collapsed = false;
                    self.pending_delete = None;
                }
                _ => {}
            }
        }
    }

    /// Drop toasts older than `ttl` seconds
    pub fn prune_toasts(&mut self, now: f64, ttl: f64) {
        self.toasts.retain(|t| now - t.shown_at < ttl);
    }

    pub fn dismiss_toast(&mut self, index: usize) {
        if index < self.toasts.len() {
            self.toasts.remove(index);
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
