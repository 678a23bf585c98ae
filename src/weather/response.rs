use serde::{Deserialize, Serialize};

/// One element of the AccuWeather current-conditions response array
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CurrentCondition {
    /// Local time with trailing UTC offset, e.g. "2024-04-20T14:35:00-04:00"
    pub local_observation_date_time: String,
    /// Human-readable description (e.g. "Mostly sunny")
    pub weather_text: String,
    pub temperature: Temperature,
    /// Relative humidity percentage (0-100)
    pub relative_humidity: i32,
}

/// Temperature in both unit systems; only the metric value drives recommendations
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Temperature {
    pub metric: Measurement,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imperial: Option<Measurement>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Measurement {
    pub value: f64,
    #[serde(default)]
    pub unit: String,
}
