use serde::{Deserialize, Serialize};

/// Outcome reported by the IP geolocation provider
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LookupStatus {
    Success,
    Fail,
}

/// Response structure for the IP-API geolocation endpoint.
/// On `Fail`, only `query`, `status` and `message` are meaningful.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Public address the lookup was made for
    #[serde(default)]
    pub query: String,
    pub status: LookupStatus,
    /// Provider's explanation on failure (e.g. "private range")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// State or province name, e.g. "Georgia"
    #[serde(default)]
    pub region_name: String,
    #[serde(default)]
    pub city: String,
}

/// One city returned by the AccuWeather city search
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct LocationKey {
    /// Opaque key required by the current-conditions endpoint
    pub key: String,
    pub english_name: String,
    pub region: Region,
    pub administrative_area: AdministrativeArea,
    pub time_zone: TimeZone,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Region {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "EnglishName")]
    pub english_name: String,
}

/// The "state" of a US city
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct AdministrativeArea {
    pub english_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct TimeZone {
    /// Abbreviation such as "EDT"
    pub code: String,
}
