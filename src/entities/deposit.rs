//! Deposit entity - A recorded delivery of waste to the bank.
//!
//! Each deposit has an id, owning `member_id`, date, category, weight, the
//! computed `cash_value` and `points`, and a status. Deposits are never edited
//! after they are appended to the log.

use super::WasteCategory;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Processing state of a deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepositStatus {
    /// Weighed but not yet settled (Diproses)
    Pending,
    /// Settled and credited (Selesai)
    Completed,
}

impl DepositStatus {
    /// Label shown to members
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Diproses",
            Self::Completed => "Selesai",
        }
    }
}

/// Deposit log entry
#[derive(Debug, Clone, PartialEq)]
pub struct DepositTransaction {
    /// Unique identifier for the deposit
    pub id: u64,
    /// Member who made the deposit
    pub member_id: String,
    /// Day the waste was handed in
    pub date: NaiveDate,
    /// Kind of waste
    pub category: WasteCategory,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Rupiah credited for this deposit
    pub cash_value: u64,
    /// Points credited for this deposit
    pub points: u64,
    /// Processing state
    pub status: DepositStatus,
}
