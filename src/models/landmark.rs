//! Point-of-interest records returned by the `radius` endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Coordinates;

/// Shown in place of a missing name.
pub const NAME_PLACEHOLDER: &str = "N/A";

/// Rating attached to a landmark by the API.
///
/// The API sends a numeric code, but some payloads carry it as a float
/// (`7.0`) or in textual form (`"3h"`), so all are accepted verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rate {
    Code(i64),
    Score(f64),
    Label(String),
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rate::Code(code) => write!(f, "{}", code),
            Rate::Score(score) => write!(f, "{}", score),
            Rate::Label(label) => f.write_str(label),
        }
    }
}

/// A single point of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Comma-separated category tags, e.g. "museums,cultural,interesting_places".
    /// Rewritten to a display label by the post-processor.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub kinds: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<Rate>,

    /// OpenTripMap identifier
    #[serde(default, deserialize_with = "null_as_empty")]
    pub xid: String,

    /// Distance from the search centre in metres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dist: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<Coordinates>,
}

// `default` only covers absent keys; explicit nulls land here.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Landmark {
    pub fn new(name: Option<&str>, kinds: &str, xid: &str) -> Self {
        Self {
            name: name.map(str::to_string),
            kinds: kinds.to_string(),
            rate: None,
            xid: xid.to_string(),
            dist: None,
            point: None,
        }
    }

    /// Name for display, falling back to a placeholder
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(NAME_PLACEHOLDER)
    }
}

/// Rating floor understood by the `rate` query parameter.
///
/// `1`..`3` rank popularity; the `h` variants restrict results to
/// cultural-heritage objects of at least that rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MinRating {
    One,
    Two,
    #[default]
    Three,
    OneHeritage,
    TwoHeritage,
    ThreeHeritage,
}

impl MinRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            MinRating::One => "1",
            MinRating::Two => "2",
            MinRating::Three => "3",
            MinRating::OneHeritage => "1h",
            MinRating::TwoHeritage => "2h",
            MinRating::ThreeHeritage => "3h",
        }
    }
}

impl fmt::Display for MinRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown rating '{0}', expected one of 1, 2, 3, 1h, 2h, 3h")]
pub struct ParseRatingError(String);

impl FromStr for MinRating {
    type Err = ParseRatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" => Ok(MinRating::One),
            "2" => Ok(MinRating::Two),
            "3" => Ok(MinRating::Three),
            "1h" => Ok(MinRating::OneHeritage),
            "2h" => Ok(MinRating::TwoHeritage),
            "3h" => Ok(MinRating::ThreeHeritage),
            _ => Err(ParseRatingError(s.to_string())),
        }
    }
}

impl TryFrom<String> for MinRating {
    type Error = ParseRatingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MinRating> for String {
    fn from(rating: MinRating) -> Self {
        rating.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_radius_item() {
        let landmark: Landmark = serde_json::from_str(
            r#"{"xid":"W38473622","name":"Louvre","dist":412.7,"rate":7,
                "osm":"way/38473622","kinds":"museums,cultural,interesting_places",
                "point":{"lon":2.3376,"lat":48.8606}}"#,
        )
        .unwrap();

        assert_eq!(landmark.display_name(), "Louvre");
        assert_eq!(landmark.rate, Some(Rate::Code(7)));
        assert_eq!(landmark.point, Some(Coordinates::new(48.8606, 2.3376)));
    }

    #[test]
    fn test_decode_missing_fields() {
        let landmark: Landmark = serde_json::from_str(r#"{"rate":"3h"}"#).unwrap();

        assert_eq!(landmark.display_name(), NAME_PLACEHOLDER);
        assert_eq!(landmark.kinds, "");
        assert_eq!(landmark.xid, "");
        assert_eq!(landmark.rate, Some(Rate::Label("3h".into())));
    }

    #[test]
    fn test_decode_null_fields_keeps_batch() {
        let landmarks: Vec<Landmark> = serde_json::from_str(
            r#"[{"xid":"W1","name":"Louvre","kinds":"museums","rate":7},
                {"xid":"W2","name":"Odd","kinds":null,"rate":3},
                {"xid":null,"name":null,"kinds":"churches","rate":null}]"#,
        )
        .unwrap();

        assert_eq!(landmarks.len(), 3);
        assert_eq!(landmarks[1].kinds, "");
        assert_eq!(landmarks[1].xid, "W2");
        assert_eq!(landmarks[2].xid, "");
        assert_eq!(landmarks[2].display_name(), NAME_PLACEHOLDER);
        assert_eq!(landmarks[2].rate, None);
    }

    #[test]
    fn test_decode_float_rate() {
        let landmarks: Vec<Landmark> = serde_json::from_str(
            r#"[{"xid":"W1","name":"Louvre","rate":7.0},{"xid":"W2","name":"Arc","rate":3}]"#,
        )
        .unwrap();

        assert_eq!(landmarks[0].rate, Some(Rate::Score(7.0)));
        assert_eq!(landmarks[0].rate.as_ref().unwrap().to_string(), "7");
        assert_eq!(landmarks[1].rate, Some(Rate::Code(3)));
    }

    #[test]
    fn test_min_rating_parse() {
        assert_eq!("3".parse::<MinRating>().unwrap(), MinRating::Three);
        assert_eq!("2H".parse::<MinRating>().unwrap(), MinRating::TwoHeritage);
        assert!("4".parse::<MinRating>().is_err());
        assert_eq!(MinRating::ThreeHeritage.to_string(), "3h");
    }
}
