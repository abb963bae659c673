pub mod login;
pub mod sidebar;
pub mod chat;
pub mod translation;
pub mod toasts;
