use serde::{Deserialize, Serialize};

use crate::utils::constants::E7_SCALE;

/// Decimal-degree coordinate. Bounds are not checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn from_e7(latitude_e7: i64, longitude_e7: i64) -> Self {
        Self {
            latitude: latitude_e7 as f64 / E7_SCALE,
            longitude: longitude_e7 as f64 / E7_SCALE,
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}
