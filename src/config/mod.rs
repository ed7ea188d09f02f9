//! Application configuration loaded from `config.toml`.
//!
//! The file describes the catalog (rates, redemption items, waste banks), the
//! members to register at startup, assistant settings and educational content.
//! A copy of the repository's `config.toml` is compiled into the binary and used
//! when no file is present next to the executable.

/// Assistant backend settings and API key lookup
pub mod assistant;

/// Catalog and member seed definitions
pub mod seed;

use crate::{
    core::content::ContentConfig,
    entities::{CategoryRate, RedemptionItem, WasteBank},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

pub use assistant::AssistantConfig;
pub use seed::{DepositSeed, LedgerPolicy, MemberSeed};

const BUILTIN_CONFIG: &str = include_str!("../../config.toml");
const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Ledger policy constants
    pub ledger: LedgerPolicy,
    /// Price and point rate per waste category
    pub waste_rates: Vec<CategoryRate>,
    /// Items members can redeem points for
    pub redemption_items: Vec<RedemptionItem>,
    /// Drop-off locations shown on the map
    pub waste_banks: Vec<WasteBank>,
    /// Members registered at startup, in registration order
    #[serde(default)]
    pub members: Vec<MemberSeed>,
    /// Generation backend settings
    #[serde(default)]
    pub assistant: AssistantConfig,
    /// Tips, earning guides and craft gallery
    #[serde(default)]
    pub content: ContentConfig,
}

/// Parses configuration from TOML text.
///
/// # Errors
/// Returns `Error::Config` if the TOML syntax is invalid or required fields are missing.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;
    parse_config(&contents)
}

/// Returns the configuration compiled into the crate.
///
/// # Errors
/// Only fails if the bundled `config.toml` itself is malformed.
pub fn builtin_config() -> Result<AppConfig> {
    parse_config(BUILTIN_CONFIG)
}

/// Loads `./config.toml` if it exists, otherwise falls back to the built-in copy.
/// Environment overrides for the assistant are applied in both cases.
pub fn load_app_configuration() -> Result<AppConfig> {
    let mut config = if Path::new(DEFAULT_CONFIG_PATH).exists() {
        info!("Loading configuration from {DEFAULT_CONFIG_PATH}");
        load_config(DEFAULT_CONFIG_PATH)?
    } else {
        info!("No {DEFAULT_CONFIG_PATH} found, using built-in configuration");
        builtin_config()?
    };
    config.assistant = config.assistant.with_env_overrides();
    Ok(config)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::entities::{RewardCategory, WasteCategory};

    #[test]
    fn test_builtin_config_parses() {
        let config = builtin_config().unwrap();
        assert_eq!(config.waste_rates.len(), 6);
        assert_eq!(config.waste_banks.len(), 6);
        assert_eq!(config.ledger.cash_redemption_bonus, 10_000);

        let plastic = config
            .waste_rates
            .iter()
            .find(|r| r.category == WasteCategory::Plastic)
            .unwrap();
        assert_eq!(plastic.price_per_kg, 3500);
        assert_eq!(plastic.points_per_kg, 10);

        let rice = config
            .redemption_items
            .iter()
            .find(|i| i.name == "Beras 1kg")
            .unwrap();
        assert_eq!(rice.points_cost, 150);
        assert_eq!(rice.category, RewardCategory::Sembako);
    }

    #[test]
    fn test_builtin_members_seeded_in_order() {
        let config = builtin_config().unwrap();
        assert_eq!(config.members[0].name, "Warga Gresik");
        assert_eq!(config.members[0].balance, 450_000);
        assert_eq!(config.members[0].points, 1250);
        assert_eq!(config.members[0].deposits.len(), 3);
        assert_eq!(config.members[1].id, "nasabah-manyar");
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml_str = r#"
            [ledger]
            cash_redemption_bonus = 5000

            [[waste_rates]]
            category = "paper"
            price_per_kg = 2500
            points_per_kg = 8

            [[redemption_items]]
            id = "pulsa"
            name = "Pulsa"
            points_cost = 120
            category = "voucher"
            icon = "phone"

            [[waste_banks]]
            id = "1"
            name = "Bank Sampah Gresik"
            address = "Manyar"
            coords = { lat = -7.152, lng = 112.651 }
        "#;

        let config = parse_config(toml_str).unwrap();
        assert!(config.members.is_empty());
        assert!(config.content.tips.is_empty());
        assert_eq!(config.assistant.temperature, 0.7);
        assert_eq!(config.waste_banks[0].coords.lat, -7.152);
    }

    #[test]
    fn test_parse_config_reports_missing_section() {
        let result = parse_config("[ledger]\ncash_redemption_bonus = 1\n");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("definitely/not/here.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
