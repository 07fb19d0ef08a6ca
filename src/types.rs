//! Canonical records shared between the catalog and the front end

use serde::Serialize;

/// Position of a character in the current catalog snapshot.
/// Reassigned on every fetch.
pub type CharacterId = u32;

/// Normalized character, immutable once built
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub comics_count: u32,
    pub series_count: u32,
    pub events_count: u32,
}
