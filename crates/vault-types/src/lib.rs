pub mod message;
pub mod history;
pub mod auth;
pub mod language;
pub mod event;
pub mod config;
pub mod error;


pub use error::VaultError;
pub type Result<T> = std::result::Result<T, VaultError>;
