//! Core data models for OpenTripMap responses.

pub mod geoname;
pub mod landmark;

pub use geoname::{Coordinates, GeoName};
pub use landmark::{Landmark, MinRating, Rate};
