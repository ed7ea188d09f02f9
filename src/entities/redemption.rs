//! Redemption entities - Catalog items and the records created when points are spent.
//!
//! A `RedemptionRecord` copies the item's name, cost and category at the time of
//! redemption, so later catalog changes never rewrite history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of reward an item is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardCategory {
    /// Credited to the member's cash balance
    Cash,
    /// Staple goods (rice, oil, sugar)
    Sembako,
    /// Phone credit, electricity tokens and similar
    Voucher,
}

impl fmt::Display for RewardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cash => "Cash",
            Self::Sembako => "Sembako",
            Self::Voucher => "Voucher",
        })
    }
}

/// Redeemable catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionItem {
    /// Unique identifier for the item
    pub id: String,
    /// Display name (e.g., "Beras 1kg")
    pub name: String,
    /// Points required to redeem
    pub points_cost: u64,
    /// Reward kind
    pub category: RewardCategory,
    /// Icon reference for the presentation layer
    pub icon: String,
}

/// Redemption log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedemptionRecord {
    /// Unique identifier for the redemption
    pub id: u64,
    /// Member who redeemed
    pub member_id: String,
    /// Day of redemption
    pub date: NaiveDate,
    /// Item name copied from the catalog
    pub item_name: String,
    /// Points cost copied from the catalog
    pub points_cost: u64,
    /// Reward kind copied from the catalog
    pub category: RewardCategory,
}
