//! Ledger policy and member seed definitions from config.toml
//!
//! Members listed in the config are registered at startup with the balances
//! given there. Seeded deposits are history only: their values are computed
//! from the catalog rates, but they do not add to the seeded balances again.

use crate::entities::{DepositStatus, WasteCategory};
use chrono::NaiveDate;
use serde::Deserialize;

/// Policy constants applied by the ledger
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LedgerPolicy {
    /// Flat Rupiah credit for redeeming a Cash item, independent of its point cost
    pub cash_redemption_bonus: u64,
}

/// A member to register at startup
#[derive(Debug, Clone, Deserialize)]
pub struct MemberSeed {
    /// Unique member id
    pub id: String,
    /// Display name
    pub name: String,
    /// Optional avatar reference
    #[serde(default)]
    pub avatar: Option<String>,
    /// Opening cash balance in Rupiah
    #[serde(default)]
    pub balance: u64,
    /// Opening point balance
    #[serde(default)]
    pub points: u64,
    /// Opening cumulative weight in kilograms
    #[serde(default)]
    pub total_waste_kg: f64,
    /// Rank label
    #[serde(default = "default_rank")]
    pub rank: String,
    /// Historical deposits, oldest first
    #[serde(default)]
    pub deposits: Vec<DepositSeed>,
}

/// A historical deposit attached to a seeded member
#[derive(Debug, Clone, Deserialize)]
pub struct DepositSeed {
    /// Day of the deposit
    pub date: NaiveDate,
    /// Kind of waste
    pub category: WasteCategory,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Processing state, completed unless stated
    #[serde(default = "default_status")]
    pub status: DepositStatus,
}

fn default_rank() -> String {
    "Nasabah Baru".to_string()
}

const fn default_status() -> DepositStatus {
    DepositStatus::Completed
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[derive(Deserialize)]
    struct Members {
        members: Vec<MemberSeed>,
    }

    #[test]
    fn test_member_seed_defaults() {
        let toml_str = r#"
            [[members]]
            id = "baru"
            name = "Nasabah Baru"

            [[members.deposits]]
            date = "2024-01-05"
            category = "organic"
            weight_kg = 2.5
        "#;

        let parsed: Members = toml::from_str(toml_str).unwrap();
        let seed = &parsed.members[0];
        assert_eq!(seed.balance, 0);
        assert_eq!(seed.points, 0);
        assert_eq!(seed.total_waste_kg, 0.0);
        assert_eq!(seed.rank, "Nasabah Baru");
        assert!(seed.avatar.is_none());
        assert_eq!(seed.deposits[0].status, DepositStatus::Completed);
        assert_eq!(
            seed.deposits[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
    }
}
