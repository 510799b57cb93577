//! Station records.

use serde::Serialize;

/// Unique station identifier. The sole vertex key: two stations with the
/// same id are the same vertex regardless of coordinates.
pub type StationId = i64;

/// A uniquely identified geographic point.
///
/// Coordinates are treated as planar Cartesian values; distances between
/// stations are straight-line Euclidean, not great-circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Station {
    pub id: StationId,
    pub latitude: f64,
    pub longitude: f64,
}

impl Station {
    pub fn new(id: StationId, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            latitude,
            longitude,
        }
    }

    pub fn distance_to(&self, other: &Station) -> f64 {
        let dlat = self.latitude - other.latitude;
        let dlon = self.longitude - other.longitude;
        (dlat * dlat + dlon * dlon).sqrt()
    }
}
