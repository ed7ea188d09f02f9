//! Shared test utilities for the waste bank crate.
//!
//! This module provides fixtures built from the bundled `config.toml`, so tests
//! run against the same catalog and seeded members the application starts with.

#![allow(clippy::expect_used)]

use crate::{
    config::builtin_config,
    core::{BankState, Catalog, MemberDirectory},
};
use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

/// Seeded member with 450 000 Rp and 1 250 points
pub const WARGA_GRESIK: &str = "warga-gresik";

/// Seeded member with 125 000 Rp and 80 points
pub const NASABAH_MANYAR: &str = "nasabah-manyar";

/// Routes `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Catalog built from the bundled configuration.
pub fn test_catalog() -> Catalog {
    let config = builtin_config().expect("bundled config.toml parses");
    Catalog::from_config(&config).expect("bundled catalog is valid")
}

/// Directory with the bundled members and their historical deposits.
pub fn test_directory() -> MemberDirectory {
    let config = builtin_config().expect("bundled config.toml parses");
    MemberDirectory::from_seeds(&config.members, &test_catalog())
        .expect("bundled members are valid")
}

/// Full application state from the bundled configuration.
/// This is the standard setup for ledger and view tests.
pub fn test_state() -> BankState {
    init_test_tracing();
    let config = builtin_config().expect("bundled config.toml parses");
    BankState::from_config(&config).expect("bundled state is valid")
}

/// A fixed day for deposits that should not depend on the clock.
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")
}
