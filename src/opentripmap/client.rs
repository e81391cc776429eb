//! OpenTripMap HTTP client: city geocoding and radius search.

use std::fmt;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, info};
use url::Url;

use super::PlacesError;
use crate::models::{Coordinates, GeoName, Landmark, MinRating};
use crate::postprocess::dedupe;

pub const DEFAULT_BASE_URL: &str = "https://api.opentripmap.com/0.1/en/places/";

/// Upper bound on landmarks per search, enforced by the API.
pub const RESULT_LIMIT: u32 = 300;

const GEONAME: &str = "geoname";
const RADIUS: &str = "radius";

/// Secret API key. Never printed.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Parameters of a radius search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    /// Search radius in metres
    pub radius: u32,
    /// Comma-separated category filter
    pub category: String,
    pub min_rating: MinRating,
    /// Rewrite raw kinds into display labels before rendering
    pub format_kinds: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            radius: 1000,
            category: "interesting_places".to_string(),
            min_rating: MinRating::Three,
            format_kinds: true,
        }
    }
}

#[derive(Serialize)]
struct GeonameQuery<'a> {
    name: &'a str,
    apikey: &'a str,
    format: &'static str,
    lang: &'static str,
}

#[derive(Serialize)]
struct RadiusQuery<'a> {
    lang: &'static str,
    radius: u32,
    lat: f64,
    lon: f64,
    kinds: &'a str,
    format: &'static str,
    apikey: &'a str,
    rate: MinRating,
    limit: u32,
}

/// Client for the OpenTripMap places endpoints.
///
/// Holds one pooled `reqwest::Client`; clone freely.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    client: Client,
    base_url: Url,
    api_key: ApiKey,
}

impl PlacesClient {
    pub fn new(base_url: Url, api_key: ApiKey, timeout: Duration) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .user_agent(concat!("landmark-explorer/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(PlacesError::Client)?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Look up a city by name.
    ///
    /// A 200 answer without `lat`/`lon` still succeeds; check
    /// [`GeoName::coordinates`] before searching.
    pub async fn resolve(&self, city: &str) -> Result<GeoName, PlacesError> {
        let url = self.base_url.join(GEONAME)?;
        let query = GeonameQuery {
            name: city,
            apikey: self.api_key.expose(),
            format: "json",
            lang: "en",
        };

        let response = self
            .client
            .get(url)
            .query(&query)
            .send()
            .await
            .map_err(|e| PlacesError::request(GEONAME, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(PlacesError::Status {
                endpoint: GEONAME,
                status,
            });
        }

        let geoname: GeoName = response
            .json()
            .await
            .map_err(|e| PlacesError::request(GEONAME, e))?;

        debug!("City details for '{}': {:?}", city, geoname);
        Ok(geoname)
    }

    /// Landmarks around `center`, deduplicated by name.
    pub async fn fetch_landmarks(
        &self,
        center: Coordinates,
        options: &SearchOptions,
    ) -> Result<Vec<Landmark>, PlacesError> {
        let url = self.base_url.join(RADIUS)?;
        let query = RadiusQuery {
            lang: "en",
            radius: options.radius,
            lat: center.lat,
            lon: center.lon,
            kinds: &options.category,
            format: "json",
            apikey: self.api_key.expose(),
            rate: options.min_rating,
            limit: RESULT_LIMIT,
        };

        let response = self
            .client
            .get(url)
            .query(&query)
            .send()
            .await
            .map_err(|e| PlacesError::request(RADIUS, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(PlacesError::Status {
                endpoint: RADIUS,
                status,
            });
        }

        let landmarks: Vec<Landmark> = response
            .json()
            .await
            .map_err(|e| PlacesError::request(RADIUS, e))?;

        info!(
            "Radius search at ({}) returned {} landmarks",
            center,
            landmarks.len()
        );

        Ok(dedupe(landmarks))
    }
}
