//! Landmark Explorer - find points of interest around a city via OpenTripMap.
//!
//! This library provides the API client, post-processing and web front end
//! used by the `explorer` binary.

pub mod config;
pub mod explore;
pub mod models;
pub mod opentripmap;
pub mod postprocess;
pub mod web;

#[cfg(test)]
pub(crate) mod testing;

pub use explore::{explore, Exploration, ExploreError};
pub use models::{Coordinates, GeoName, Landmark, MinRating};
pub use opentripmap::{ApiKey, PlacesClient, PlacesError, SearchOptions};
