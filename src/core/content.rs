//! Educational content - recycling tips, ways to earn, and the local craft gallery.

use crate::core::catalog::Catalog;
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// One of the "ways to earn money" steps shown on the home screen
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EarningGuide {
    /// Short heading
    pub title: String,
    /// One-line explanation
    pub description: String,
}

/// A recycled craft product shown in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CraftListing {
    /// Product name
    pub name: String,
    /// Price in Rupiah
    pub price: u64,
    /// Image reference
    #[serde(default)]
    pub image: Option<String>,
}

/// The `[content]` section of config.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Recycling tips, one of which is shown per day
    pub tips: Vec<String>,
    /// Ordered earning steps
    pub earning_guides: Vec<EarningGuide>,
    /// Craft gallery
    pub craft_listings: Vec<CraftListing>,
}

/// Picks the tip for `date`, cycling through the configured tips by day of year.
#[must_use]
pub fn tip_of_the_day(catalog: &Catalog, date: NaiveDate) -> Option<&str> {
    let tips = &catalog.content().tips;
    if tips.is_empty() {
        return None;
    }
    let index = usize::try_from(date.ordinal0()).unwrap_or_default() % tips.len();
    tips.get(index).map(String::as_str)
}
