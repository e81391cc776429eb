//! Per-submission pipeline: resolve the city, search around it, tidy results.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{Coordinates, Landmark};
use crate::opentripmap::{PlacesClient, PlacesError, SearchOptions};
use crate::postprocess::update_kinds;

/// Stage at which an exploration gave up.
#[derive(Debug, Error)]
pub enum ExploreError {
    #[error("geocoding '{city}' failed: {source}")]
    Resolve {
        city: String,
        #[source]
        source: PlacesError,
    },

    #[error("geocoding '{city}' returned no coordinates")]
    NoCoordinates { city: String },

    #[error("landmark search around '{city}' failed: {source}")]
    Fetch {
        city: String,
        #[source]
        source: PlacesError,
    },
}

/// What the results page shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Exploration {
    /// City heading; empty when geocoding failed
    pub city: String,
    pub center: Option<Coordinates>,
    pub landmarks: Vec<Landmark>,
}

impl Exploration {
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }
}

/// Run the whole pipeline, absorbing failures into an empty result.
///
/// A city that resolves but whose search fails keeps its heading.
pub async fn explore(client: &PlacesClient, options: &SearchOptions, city: &str) -> Exploration {
    match try_explore(client, options, city).await {
        Ok(exploration) => exploration,
        Err(err @ ExploreError::Fetch { .. }) => {
            warn!("{}", err);
            Exploration {
                city: city.to_string(),
                ..Exploration::default()
            }
        }
        Err(err) => {
            warn!("{}", err);
            Exploration::default()
        }
    }
}

/// Same pipeline, reporting the failing stage to the caller.
pub async fn try_explore(
    client: &PlacesClient,
    options: &SearchOptions,
    city: &str,
) -> Result<Exploration, ExploreError> {
    let geoname = client
        .resolve(city)
        .await
        .map_err(|source| ExploreError::Resolve {
            city: city.to_string(),
            source,
        })?;

    let center = geoname
        .coordinates()
        .ok_or_else(|| ExploreError::NoCoordinates {
            city: city.to_string(),
        })?;

    let mut landmarks = client
        .fetch_landmarks(center, options)
        .await
        .map_err(|source| ExploreError::Fetch {
            city: city.to_string(),
            source,
        })?;

    if options.format_kinds {
        update_kinds(&mut landmarks);
    }

    for landmark in &landmarks {
        debug!(
            "Landmark: {} | Category: {} | Rating: {} | ID: {}",
            landmark.display_name(),
            landmark.kinds,
            landmark
                .rate
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            landmark.xid
        );
    }

    info!("Found {} landmarks near '{}'", landmarks.len(), city);

    Ok(Exploration {
        city: city.to_string(),
        center: Some(center),
        landmarks,
    })
}
