//! Member entity - A waste bank account holder (nasabah).
//!
//! Identity fields are fixed at registration. The ledger fields (`balance`,
//! `points`, `total_waste_kg`) are only changed by `core::ledger`.

/// Member account
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// Unique identifier for the member
    pub id: String,
    /// Display name (e.g., "Warga Gresik")
    pub name: String,
    /// Optional avatar reference (URL or asset key)
    pub avatar: Option<String>,
    /// Cash savings in Rupiah
    pub balance: u64,
    /// Reward points available for redemption
    pub points: u64,
    /// Cumulative deposited weight in kilograms
    pub total_waste_kg: f64,
    /// Standing label shown on the dashboard (e.g., "Pahlawan Lingkungan")
    pub rank: String,
}
