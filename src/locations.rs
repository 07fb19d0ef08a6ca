//! Fixed pool of map points assigned to characters by list position

use serde::Serialize;

/// Number of points in the pool. Fetches are capped at this size.
pub const POOL_SIZE: usize = 10;

/// A named geographic point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    const fn new(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self { name, latitude, longitude }
    }
}

/// Snackbars around Rotterdam city centre, in assignment order
pub static LOCATION_POOL: [GeoPoint; POOL_SIZE] = [
    GeoPoint::new("Snackbar 1", 51.917744, 4.478421),
    GeoPoint::new("Snackbar 2", 51.919583, 4.485384),
    GeoPoint::new("Snackbar 3", 51.918002, 4.472671),
    GeoPoint::new("Snackbar 4", 51.91589, 4.478973),
    GeoPoint::new("Snackbar 5", 51.912345, 4.471261),
    GeoPoint::new("Snackbar 6", 51.913729, 4.480952),
    GeoPoint::new("Snackbar 7", 51.915466, 4.490148),
    GeoPoint::new("Snackbar 8", 51.92063, 4.488042),
    GeoPoint::new("Snackbar 9", 51.922109, 4.477282),
    GeoPoint::new("Snackbar 10", 51.916831, 4.472158),
];

/// Pool entry for a list position, `None` past the end of the pool
pub fn point_at(index: usize) -> Option<&'static GeoPoint> {
    LOCATION_POOL.get(index)
}
