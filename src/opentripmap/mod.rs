//! OpenTripMap places API client.

mod client;
mod error;

pub use client::{ApiKey, PlacesClient, SearchOptions, DEFAULT_BASE_URL, RESULT_LIMIT};
pub use error::PlacesError;
