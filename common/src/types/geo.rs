use serde::{Deserialize, Serialize};

/// Geographic point in floating point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Map viewport: a center plus latitude/longitude spans. The spans double
/// as the zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center: Coordinate,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}
