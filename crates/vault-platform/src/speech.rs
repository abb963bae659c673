//! Speech adapter over `window.speechSynthesis`.
//!
//! When the API is missing (older browsers, Node test runner) the adapter
//! reports itself unsupported and the caller shows a notice.

use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance};

use vault_core::ports::SpeechPort;
use vault_types::{Result, VaultError};

pub struct BrowserSpeech {
    synth: Option<SpeechSynthesis>,
}

impl BrowserSpeech {
    pub fn new() -> Self {
        let synth = web_sys::window().and_then(|w| w.speech_synthesis().ok());
        if synth.is_none() {
            log::warn!("speechSynthesis unavailable; text-to-speech disabled");
        }
        Self { synth }
    }
}

impl Default for BrowserSpeech {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechPort for BrowserSpeech {
    fn is_supported(&self) -> bool {
        self.synth.is_some()
    }

    fn speak(&self, text: &str, language: Option<&str>) -> Result<()> {
        let synth = self
            .synth
            .as_ref()
            .ok_or_else(|| VaultError::Unsupported("speech synthesis".to_string()))?;
        let utterance = SpeechSynthesisUtterance::new_with_text(text)
            .map_err(|e| VaultError::JsInterop(format!("{:?}", e)))?;
        if let Some(lang) = language {
            utterance.set_lang(lang);
        }
        synth.speak(&utterance);
        Ok(())
    }
}
