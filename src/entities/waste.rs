//! Waste category entity - The closed set of recyclable waste kinds.
//!
//! Each category is priced per kilogram in Rupiah and earns points per kilogram.
//! Rates live in the catalog; this module only defines the category itself and
//! how it is named in config files and on screen.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Kind of waste a member can deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteCategory {
    /// Organik - food and garden waste
    Organic,
    /// Plastik - bottles, bags, packaging
    Plastic,
    /// Kertas - paper and cardboard
    Paper,
    /// Logam - cans and scrap metal
    Metal,
    /// Kaca - glass bottles and jars
    Glass,
    /// Lainnya - anything else the bank accepts
    Other,
}

impl WasteCategory {
    /// All categories in display order
    pub const ALL: [Self; 6] = [
        Self::Organic,
        Self::Plastic,
        Self::Paper,
        Self::Metal,
        Self::Glass,
        Self::Other,
    ];

    /// Label shown to members
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Organic => "Organik",
            Self::Plastic => "Plastik",
            Self::Paper => "Kertas",
            Self::Metal => "Logam",
            Self::Glass => "Kaca",
            Self::Other => "Lainnya",
        }
    }

    const fn key(self) -> &'static str {
        match self {
            Self::Organic => "organic",
            Self::Plastic => "plastic",
            Self::Paper => "paper",
            Self::Metal => "metal",
            Self::Glass => "glass",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WasteCategory {
    type Err = Error;

    /// Accepts either the config key (`"plastic"`) or the display label
    /// (`"Plastik"`), ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(wanted) || c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownCategory {
                name: s.to_string(),
            })
    }
}

/// Price and point rate for one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryRate {
    /// The category these rates apply to
    pub category: WasteCategory,
    /// Rupiah paid per kilogram
    pub price_per_kg: u64,
    /// Points earned per kilogram
    pub points_per_kg: u64,
}
