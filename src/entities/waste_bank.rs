//! Waste bank entity - A physical drop-off location.

use serde::{Deserialize, Serialize};

/// Geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
}

/// Waste bank directory entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteBank {
    /// Unique identifier for the bank
    pub id: String,
    /// Display name
    pub name: String,
    /// Street address
    pub address: String,
    /// Map position
    pub coords: Coordinates,
}
