//! Conversational assistant - session state and the text-generation backend seam.
//!
//! The session owns the conversation and guarantees a reply for every accepted
//! message. The backend is whatever produces text: Gemini in production, a
//! scripted double in tests.

/// HTTPS client for the Gemini `generateContent` API
pub mod gemini;
/// Single-flight conversation session
pub mod session;

use crate::{entities::ConversationTurn, errors::Result};
use std::future::Future;

pub use gemini::GeminiBackend;
pub use session::{AssistantSession, EMPTY_REPLY, FALLBACK_REPLY};

/// External text-generation collaborator.
///
/// Receives the conversation so far (oldest first, not including the new
/// message) and the new user message, and resolves to a single text reply.
pub trait GenerationBackend {
    /// Generates a reply.
    ///
    /// # Errors
    /// Returns `AssistantUnavailable` on transport or backend failure.
    fn generate(
        &self,
        history: &[ConversationTurn],
        prompt: &str,
    ) -> impl Future<Output = Result<String>> + Send;
}
