//! Catalog - static reference data for pricing, rewards and locations.
//!
//! The catalog is built once from configuration and validated up front. It
//! answers "what is this deposit worth" through [`Catalog::quote`], which the
//! ledger uses for every deposit so that cash and point rounding is identical
//! everywhere.

use crate::{
    config::AppConfig,
    core::content::ContentConfig,
    entities::{CategoryRate, RedemptionItem, WasteBank, WasteCategory},
    errors::{Error, Result},
};
use std::collections::{BTreeMap, HashSet};

/// Cash value and points a deposit earns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositQuote {
    /// Rupiah credited
    pub cash_value: u64,
    /// Points credited
    pub points: u64,
}

/// Validated reference data
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) rates: BTreeMap<WasteCategory, CategoryRate>,
    pub(crate) items: Vec<RedemptionItem>,
    pub(crate) waste_banks: Vec<WasteBank>,
    pub(crate) cash_redemption_bonus: u64,
    pub(crate) content: ContentConfig,
}

impl Catalog {
    /// Builds the catalog from configuration, rejecting duplicate ids and
    /// zero-cost redemption items.
    ///
    /// # Errors
    /// Returns `Error::Config` describing the first invalid entry.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let mut rates = BTreeMap::new();
        for rate in &config.waste_rates {
            if rates.insert(rate.category, *rate).is_some() {
                return Err(Error::Config {
                    message: format!("Duplicate rate for waste category {}", rate.category),
                });
            }
        }

        let mut item_ids = HashSet::new();
        for item in &config.redemption_items {
            if item.points_cost == 0 {
                return Err(Error::Config {
                    message: format!("Redemption item '{}' must cost at least one point", item.id),
                });
            }
            if !item_ids.insert(item.id.as_str()) {
                return Err(Error::Config {
                    message: format!("Duplicate redemption item id '{}'", item.id),
                });
            }
        }

        let mut bank_ids = HashSet::new();
        for bank in &config.waste_banks {
            if !bank_ids.insert(bank.id.as_str()) {
                return Err(Error::Config {
                    message: format!("Duplicate waste bank id '{}'", bank.id),
                });
            }
        }

        Ok(Self {
            rates,
            items: config.redemption_items.clone(),
            waste_banks: config.waste_banks.clone(),
            cash_redemption_bonus: config.ledger.cash_redemption_bonus,
            content: config.content.clone(),
        })
    }

    /// Rate for a category, or `UnknownCategory` if the bank does not buy it.
    pub fn rate(&self, category: WasteCategory) -> Result<&CategoryRate> {
        self.rates
            .get(&category)
            .ok_or_else(|| Error::UnknownCategory {
                name: category.to_string(),
            })
    }

    /// Configured rates in category order
    pub fn rates(&self) -> impl Iterator<Item = &CategoryRate> {
        self.rates.values()
    }

    /// Computes what a deposit of `weight_kg` of `category` earns.
    ///
    /// Both the cash value and the points are `weight × rate`, rounded half-up
    /// to whole units.
    ///
    /// # Errors
    /// - `InvalidWeight` if the weight is not a finite number above zero
    /// - `UnknownCategory` if the category has no rate
    /// - `DepositTooLarge` if either amount cannot be held exactly as a whole number
    pub fn quote(&self, category: WasteCategory, weight_kg: f64) -> Result<DepositQuote> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(Error::InvalidWeight { weight: weight_kg });
        }
        let rate = self.rate(category)?;

        #[allow(clippy::cast_precision_loss)]
        let (Some(cash_value), Some(points)) = (
            round_half_up(weight_kg * rate.price_per_kg as f64),
            round_half_up(weight_kg * rate.points_per_kg as f64),
        ) else {
            return Err(Error::DepositTooLarge { weight: weight_kg });
        };
        Ok(DepositQuote { cash_value, points })
    }

    /// All redeemable items in catalog order
    #[must_use]
    pub fn redemption_items(&self) -> &[RedemptionItem] {
        &self.items
    }

    /// Looks up a redeemable item by id.
    pub fn redemption_item(&self, item_id: &str) -> Result<&RedemptionItem> {
        self.items
            .iter()
            .find(|item| item.id == item_id)
            .ok_or_else(|| Error::UnknownItem {
                id: item_id.to_string(),
            })
    }

    /// All drop-off locations in directory order
    #[must_use]
    pub fn waste_banks(&self) -> &[WasteBank] {
        &self.waste_banks
    }

    /// Looks up a drop-off location by id.
    pub fn waste_bank(&self, bank_id: &str) -> Result<&WasteBank> {
        self.waste_banks
            .iter()
            .find(|bank| bank.id == bank_id)
            .ok_or_else(|| Error::UnknownWasteBank {
                id: bank_id.to_string(),
            })
    }

    /// Flat Rupiah credit for redeeming a Cash item
    #[must_use]
    pub const fn cash_redemption_bonus(&self) -> u64 {
        self.cash_redemption_bonus
    }

    /// Educational content
    #[must_use]
    pub const fn content(&self) -> &ContentConfig {
        &self.content
    }
}

/// Rounds a non-negative amount to the nearest whole unit, halves going up.
///
/// The value is first normalised to six decimal places so that products such
/// as `1.45 × 10` (which is `14.499999999999998` in binary floating point)
/// round the way they read.
///
/// Returns `None` for negative or non-finite input, and for results at or
/// above 2^53, past which `f64` no longer holds every whole number.
#[must_use]
pub fn round_half_up(value: f64) -> Option<u64> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let normalised = (value * 1_000_000.0).round() / 1_000_000.0;
    let rounded = (normalised + 0.5).floor();
    if rounded >= MAX_EXACT {
        return None;
    }
    // Cast safety: `rounded` is a whole number in [0, 2^53).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = rounded as u64;
    Some(whole)
}
