//! `WasteBankBuddy` - A waste bank ledger and loyalty engine
//!
//! This crate tracks members' recyclable waste deposits, converts them into cash
//! savings and reward points, redeems points for goods, derives dashboard views,
//! exposes the drop-off location directory to a map, and runs a conversational
//! assistant backed by an external language model. All state lives in memory.

#![deny(
    unsafe_code,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unwrap_used,
    rust_2018_idioms,
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
)]

/// Conversational assistant session and text-generation backends
pub mod assistant;
/// Configuration loading from config.toml and the environment
pub mod config;
/// Core business logic - catalog, ledger, directory, views and locations
pub mod core;
/// Plain data records for members, deposits, redemptions and the catalog
pub mod entities;
/// Unified error types and result handling
pub mod errors;

#[cfg(test)]
pub mod test_utils;
