use serde::{Deserialize, Serialize};
use crate::error::VaultError;
use crate::language::{Language, DEFAULT_LANGUAGE};
use crate::Result;

/// Top-level client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Simulated latency of the response stub
    pub response_delay_ms: u32,
    /// Simulated latency of the translation stub
    pub translation_delay_ms: u32,
    pub default_input_language: String,
    pub default_output_language: String,
    /// Shown in the sidebar when the session has no email
    pub fallback_user_email: String,
    /// How long a toast stays on screen
    pub notice_ttl_secs: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: 2000,
            translation_delay_ms: 1000,
            default_input_language: DEFAULT_LANGUAGE.to_string(),
            default_output_language: DEFAULT_LANGUAGE.to_string(),
            fallback_user_email: "user@example.com".to_string(),
            notice_ttl_secs: 4.0,
        }
    }
}

impl AppConfig {
    /// Parse a (possibly partial) JSON override. Missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for code in [&self.default_input_language, &self.default_output_language] {
            if Language::find(code).is_none() {
                return Err(VaultError::Config(format!("unknown language code '{}'", code)));
            }
        }
        if self.notice_ttl_secs.is_nan() || self.notice_ttl_secs <= 0.0 {
            return Err(VaultError::Config("notice_ttl_secs must be positive".to_string()));
        }
        Ok(())
    }
}
