//! Assistant configuration - model selection, sampling policy and API key lookup.
//!
//! Sampling parameters and the persona come from config.toml. The API key is
//! never stored in the config file; it is read from `GEMINI_API_KEY` (or the
//! older `API_KEY`) in the environment, which may be populated from `.env`.

use serde::Deserialize;
use std::time::Duration;

/// Settings for the text-generation backend
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Model name passed to the backend
    pub model: String,
    /// API root, without trailing slash
    pub base_url: String,
    /// Persona and language instruction sent with every request
    pub system_instruction: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Top-k sampling threshold
    pub top_k: u32,
    /// Nucleus sampling threshold
    pub top_p: f32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: "gemini-3-flash-preview".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            system_instruction: "Kamu adalah asisten ahli dari Bank Sampah Gresik (B-Gres). \
                Tugasmu adalah membantu masyarakat Gresik mengelola sampah, memberikan tips daur ulang, \
                mengidentifikasi jenis sampah, dan menjelaskan manfaat ekonomi dari bank sampah. \
                Gunakan bahasa Indonesia yang ramah dan informatif."
                .to_string(),
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            timeout_secs: 30,
        }
    }
}

impl AssistantConfig {
    /// Applies `GEMINI_MODEL` from the environment, if set.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            if !model.trim().is_empty() {
                self.model = model;
            }
        }
        self
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Gets the backend API key from `GEMINI_API_KEY`, falling back to `API_KEY`.
///
/// # Returns
///
/// `Some(key)` if either variable is set to a non-empty value, `None` otherwise.
#[must_use]
pub fn api_key_from_env() -> Option<String> {
    ["GEMINI_API_KEY", "API_KEY"]
        .into_iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|key| !key.trim().is_empty())
}
