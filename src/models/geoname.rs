//! Geocoding answer from the `geoname` endpoint.

use serde::{Deserialize, Serialize};

/// Geographic point (lat/lon) in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lon)
    }
}

/// City lookup result.
///
/// Every field is optional: the API omits fields it cannot fill, and a
/// missing latitude or longitude is not an error at decode time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeoName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// ISO 3166-1 alpha-2 country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,

    #[serde(default)]
    pub lat: Option<f64>,

    #[serde(default)]
    pub lon: Option<f64>,
}

impl GeoName {
    /// Usable coordinates, present only when both fields were returned.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }
}
