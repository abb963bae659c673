//! Browser adapters for the VaultAI client.

pub mod delay;
pub mod speech;
pub mod clipboard;

pub use clipboard::BrowserClipboard;
pub use delay::GlooDelay;
pub use speech::BrowserSpeech;
