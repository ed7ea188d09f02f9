//! Drop-off locations - the seam to the map collaborator and distance lookups.
//!
//! Map rendering is external. The core hands a [`MapView`] the waste bank
//! directory and tells it where to center; it never draws anything itself.

use crate::{
    core::catalog::Catalog,
    entities::{Coordinates, WasteBank},
    errors::Result,
};
use tracing::debug;

/// Map center used when no bank is focused (Gresik town center)
pub const DEFAULT_MAP_CENTER: Coordinates = Coordinates {
    lat: -7.161,
    lng: 112.651,
};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Map collaborator that renders markers and can be re-centered
pub trait MapView {
    /// Replaces the markers on the map with these banks.
    fn show_markers(&mut self, banks: &[WasteBank]);

    /// Moves the viewport so `coords` is in the middle.
    fn center_on(&mut self, coords: Coordinates);
}

/// Hands the full directory to the map and centers on the default view.
pub fn show_directory<M: MapView>(map: &mut M, catalog: &Catalog) {
    map.show_markers(catalog.waste_banks());
    map.center_on(DEFAULT_MAP_CENTER);
}

/// Centers the map on one bank.
///
/// # Errors
/// Returns `UnknownWasteBank` and leaves the map untouched if the id is not in the directory.
pub fn focus_bank<'a, M: MapView>(
    map: &mut M,
    catalog: &'a Catalog,
    bank_id: &str,
) -> Result<&'a WasteBank> {
    let bank = catalog.waste_bank(bank_id)?;
    debug!("Focusing map on {} ({})", bank.name, bank.id);
    map.center_on(bank.coords);
    Ok(bank)
}

/// Centers the map on the default view.
pub fn recenter<M: MapView>(map: &mut M) {
    map.center_on(DEFAULT_MAP_CENTER);
}

/// Great-circle distance between two points in kilometres (haversine).
#[must_use]
pub fn distance_km(from: Coordinates, to: Coordinates) -> f64 {
    let (lat1, lat2) = (from.lat.to_radians(), to.lat.to_radians());
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Up to `n` banks closest to `from`, nearest first, with their distances.
#[must_use]
pub fn nearest_banks(catalog: &Catalog, from: Coordinates, n: usize) -> Vec<(&WasteBank, f64)> {
    let mut ranked: Vec<(&WasteBank, f64)> = catalog
        .waste_banks()
        .iter()
        .map(|bank| (bank, distance_km(from, bank.coords)))
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked.truncate(n);
    ranked
}
