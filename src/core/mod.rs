//! Core business logic - framework-agnostic catalog, ledger, directory and view operations.

/// Pricing, rewards and location reference data
pub mod catalog;
/// Tips, earning guides and the craft gallery
pub mod content;
/// Members and their deposit and redemption logs
pub mod directory;
/// Deposit and redemption entry points
pub mod ledger;
/// Map collaborator seam and distance lookups
pub mod locations;
/// Application state container and change notifications
pub mod state;
/// Read-only member projections and display formatting
pub mod views;

pub use catalog::{Catalog, DepositQuote};
pub use directory::MemberDirectory;
pub use state::{BankState, StateChange};
