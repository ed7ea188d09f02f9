//! Gemini backend - calls the `generateContent` endpoint over HTTPS.
//!
//! Every request carries the configured persona as the system instruction and
//! the fixed sampling policy. Any transport error, non-success status or
//! undecodable body is reported as `AssistantUnavailable`; the session turns
//! that into the fallback reply.

use super::GenerationBackend;
use crate::{
    config::{AssistantConfig, assistant::api_key_from_env},
    entities::{ConversationRole, ConversationTurn},
    errors::{Error, Result},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: SystemInstruction<'a>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate; empty if there are none.
    fn reply_text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

const fn wire_role(role: ConversationRole) -> &'static str {
    match role {
        ConversationRole::User => "user",
        ConversationRole::Assistant => "model",
    }
}

/// Gemini text-generation client
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    client: reqwest::Client,
    config: AssistantConfig,
    api_key: String,
}

impl GeminiBackend {
    /// Creates a client with the configured request timeout.
    ///
    /// # Errors
    /// Returns `Error::Config` if the HTTP client cannot be built.
    pub fn new(config: AssistantConfig, api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Config {
                message: format!("Failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            config,
            api_key: api_key.into(),
        })
    }

    /// Creates a client using the API key from `GEMINI_API_KEY` or `API_KEY`.
    ///
    /// # Errors
    /// Returns `Error::Config` if neither variable is set.
    pub fn from_env(config: AssistantConfig) -> Result<Self> {
        let api_key = api_key_from_env().ok_or_else(|| Error::Config {
            message: "GEMINI_API_KEY is not set".to_string(),
        })?;
        Self::new(config, api_key)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn request_body<'a>(
        &'a self,
        history: &'a [ConversationTurn],
        prompt: &'a str,
    ) -> GenerateContentRequest<'a> {
        let mut contents: Vec<Content<'a>> = history
            .iter()
            .map(|turn| Content {
                role: wire_role(turn.role),
                parts: vec![Part { text: &turn.text }],
            })
            .collect();
        contents.push(Content {
            role: wire_role(ConversationRole::User),
            parts: vec![Part { text: prompt }],
        });

        GenerateContentRequest {
            contents,
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: &self.config.system_instruction,
                }],
            },
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                top_k: self.config.top_k,
                top_p: self.config.top_p,
            },
        }
    }
}

impl GenerationBackend for GeminiBackend {
    async fn generate(&self, history: &[ConversationTurn], prompt: &str) -> Result<String> {
        let body = self.request_body(history, prompt);
        debug!(
            "Requesting {} with {} turns",
            self.config.model,
            body.contents.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!("Gemini returned {status}");
            return Err(Error::AssistantUnavailable {
                reason: format!("backend returned {status}: {detail}"),
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        Ok(parsed.reply_text())
    }
}
