//! Unified error types for the waste bank ledger, directory and assistant.

use thiserror::Error;

/// Every failure the crate can report to its caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read, parsed or validated
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// No member is registered under this id
    #[error("Member '{id}' not found")]
    UnknownMember {
        /// The id that was looked up
        id: String,
    },

    /// The waste category is unknown or has no configured rate
    #[error("Unknown waste category: {name}")]
    UnknownCategory {
        /// The category name as given
        name: String,
    },

    /// Deposit weight must be a finite number greater than zero
    #[error("Invalid weight: {weight} kg")]
    InvalidWeight {
        /// The rejected weight
        weight: f64,
    },

    /// No redemption item is registered under this id
    #[error("Redemption item '{id}' not found")]
    UnknownItem {
        /// The id that was looked up
        id: String,
    },

    /// No waste bank is registered under this id
    #[error("Waste bank '{id}' not found")]
    UnknownWasteBank {
        /// The id that was looked up
        id: String,
    },

    /// The deposit's cash value or points are too large to record exactly
    #[error("Deposit of {weight} kg is too large to record")]
    DepositTooLarge {
        /// The rejected weight
        weight: f64,
    },

    /// The member does not hold enough points for the redemption
    #[error("Insufficient points: have {available}, need {required}")]
    InsufficientPoints {
        /// Points the member currently holds
        available: u64,
        /// Points the item costs
        required: u64,
    },

    /// A ledger update would overflow a member's balance
    #[error("Balance overflow for member '{id}'")]
    BalanceOverflow {
        /// The affected member
        id: String,
    },

    /// The text-generation backend failed or could not be reached
    #[error("Assistant unavailable: {reason}")]
    AssistantUnavailable {
        /// Transport or backend failure description
        reason: String,
    },

    /// A message is already in flight for this session
    #[error("Assistant is still answering the previous message")]
    AssistantBusy,

    /// The message to send was empty or whitespace only
    #[error("Message cannot be empty")]
    EmptyMessage,

}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Self::AssistantUnavailable {
            reason: value.to_string(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
