//! Conversation entity - One turn of an assistant chat.

use serde::{Deserialize, Serialize};

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationRole {
    /// Typed by the member
    User,
    /// Produced by the generation backend (or the fallback)
    Assistant,
}

/// Chat turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Author of the turn
    pub role: ConversationRole,
    /// Message text
    pub text: String,
}

impl ConversationTurn {
    /// Creates a turn typed by the member.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ConversationRole::User,
            text: text.into(),
        }
    }

    /// Creates a turn produced by the assistant.
    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ConversationRole::Assistant,
            text: text.into(),
        }
    }
}
