//! Session gate: two states, switched only by explicit user action.

use vault_types::{
    auth::{AuthMode, Credentials, LoginForm},
    Result, VaultError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn { credentials: Credentials },
}

/// Which top-level screen the app shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Chat,
}

#[derive(Debug, Clone)]
pub struct SessionGate {
    state: SessionState,
}

impl SessionGate {
    pub fn new() -> Self {
        Self {
            state: SessionState::LoggedOut,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::LoggedIn { .. })
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        match &self.state {
            SessionState::LoggedIn { credentials } => Some(credentials),
            SessionState::LoggedOut => None,
        }
    }

    pub fn view(&self) -> View {
        if self.is_authenticated() {
            View::Chat
        } else {
            View::Login
        }
    }

    pub fn login(&mut self, credentials: Credentials) {
        self.state = SessionState::LoggedIn { credentials };
    }

    pub fn logout(&mut self) {
        self.state = SessionState::LoggedOut;
    }
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Presence/equality checks only. The confirmation check runs first and
/// only in sign-up mode.
pub fn validate_login(form: &LoginForm) -> Result<Credentials> {
    if form.mode == AuthMode::SignUp && form.password != form.confirm_password {
        return Err(VaultError::PasswordMismatch);
    }
    if form.email.is_empty() || form.password.is_empty() {
        return Err(VaultError::Validation(
            "email and password are required".to_string(),
        ));
    }
    Ok(form.credentials())
}
