use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Wire value meaning "unknown" for probabilities and intensities.
pub const UNKNOWN_SENTINEL: f64 = -1.0;

/// A device position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Kind of precipitation reported by the service.
///
/// Any string other than the four known kinds is kept verbatim in
/// `Unrecognized`, including the empty string used when the field is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrecipitationKind {
    Rain,
    Sleet,
    Snow,
    None,
    Unrecognized(String),
}

impl PrecipitationKind {
    pub fn as_str(&self) -> &str {
        match self {
            PrecipitationKind::Rain => "rain",
            PrecipitationKind::Sleet => "sleet",
            PrecipitationKind::Snow => "snow",
            PrecipitationKind::None => "none",
            PrecipitationKind::Unrecognized(raw) => raw,
        }
    }
}

impl Default for PrecipitationKind {
    fn default() -> Self {
        PrecipitationKind::Unrecognized(String::new())
    }
}

impl From<&str> for PrecipitationKind {
    fn from(value: &str) -> Self {
        match value {
            "rain" => PrecipitationKind::Rain,
            "sleet" => PrecipitationKind::Sleet,
            "snow" => PrecipitationKind::Snow,
            "none" => PrecipitationKind::None,
            other => PrecipitationKind::Unrecognized(other.to_string()),
        }
    }
}

impl std::fmt::Display for PrecipitationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PrecipitationKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(raw) => PrecipitationKind::from(raw.as_str()),
            Value::Null => PrecipitationKind::default(),
            other => PrecipitationKind::Unrecognized(other.to_string()),
        })
    }
}

/// A rain report as returned by the `isitraining/` endpoint.
///
/// Probabilities and intensity are `None` when the service sent the `-1`
/// sentinel, omitted the field, or sent something that is not a number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RainReport {
    pub latitude: f64,
    pub longitude: f64,

    #[serde(default)]
    pub current_precipitation: PrecipitationKind,

    /// Probability in `[0, 1]`.
    #[serde(default, deserialize_with = "reading")]
    pub current_probability: Option<f64>,

    /// Intensity in inches per hour.
    #[serde(default, deserialize_with = "reading")]
    pub current_intensity: Option<f64>,

    /// Probability in `[0, 1]`.
    #[serde(default, deserialize_with = "reading")]
    pub chance_of_precipitation_today: Option<f64>,

    #[serde(default)]
    pub type_of_precipitation_today: PrecipitationKind,
}

impl RainReport {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// Translate a wire reading into `Some(value)` only when it is a usable number.
pub fn known_reading(value: f64) -> Option<f64> {
    (value.is_finite() && value != UNKNOWN_SENTINEL).then_some(value)
}

fn reading<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().and_then(known_reading))
}
