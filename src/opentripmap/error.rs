use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to one OpenTripMap endpoint.
///
/// Wrapped reqwest errors have their URL removed first, since the
/// query string carries the API key.
#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{endpoint} request timed out")]
    Timeout { endpoint: &'static str },

    #[error("{endpoint} request failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },

    #[error("{endpoint} response could not be decoded: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

impl PlacesError {
    pub(crate) fn request(endpoint: &'static str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return PlacesError::Timeout { endpoint };
        }
        if err.is_decode() {
            return PlacesError::Decode {
                endpoint,
                source: err.without_url(),
            };
        }
        PlacesError::Transport {
            endpoint,
            source: err.without_url(),
        }
    }

    /// HTTP status for `Status` failures
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            PlacesError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
