use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VaultError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("A request is already in flight")]
    Busy,

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Response error: {0}")]
    Response(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Not supported: {0}")]
    Unsupported(String),

    #[error("Cancelled")]
    Cancelled,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for VaultError {
    fn from(e: serde_json::Error) -> Self {
        VaultError::Serialization(e.to_string())
    }
}
