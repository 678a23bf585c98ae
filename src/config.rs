//! Endpoint and credential configuration, injected into every component.

use std::{env, time::Duration};

use crate::error::AppError;

// IP-API geolocation for the caller's own public address
const IP_LOOKUP_ENDPOINT: &str = "http://ip-api.com/json/";
// AccuWeather city search
const CITY_SEARCH_ENDPOINT: &str = "http://dataservice.accuweather.com/locations/v1/cities/search";
// AccuWeather current conditions, followed by `/<locationKey>.json`
const CURRENT_CONDITIONS_ENDPOINT: &str = "http://dataservice.accuweather.com/currentconditions/v1";
// Makeup API products, filtered by `product_type`
const CATALOG_ENDPOINT: &str = "http://makeup-api.herokuapp.com/api/v1/products.json";

const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    /// Static key sent as `apikey` on every weather-provider request
    pub weather_api_key: String,
    pub ip_lookup_url: String,
    pub city_search_url: String,
    pub current_conditions_url: String,
    pub catalog_url: String,
    /// Upper bound for a single fetch, connect through body
    pub request_timeout: Duration,
}

impl Config {
    /// Configuration pointing at the public providers.
    pub fn new(weather_api_key: impl Into<String>) -> Self {
        Self {
            weather_api_key: weather_api_key.into(),
            ip_lookup_url: IP_LOOKUP_ENDPOINT.to_string(),
            city_search_url: CITY_SEARCH_ENDPOINT.to_string(),
            current_conditions_url: CURRENT_CONDITIONS_ENDPOINT.to_string(),
            catalog_url: CATALOG_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `ACCUWEATHER_API_KEY` is required; endpoint URLs and the timeout fall
    /// back to the public defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = env::var("ACCUWEATHER_API_KEY")
            .map_err(|_| AppError::EnvVarNotSet("ACCUWEATHER_API_KEY".to_string()))?;

        let mut config = Self::new(api_key);
        if let Ok(url) = env::var("IP_LOOKUP_URL") {
            config.ip_lookup_url = url;
        }
        if let Ok(url) = env::var("CITY_SEARCH_URL") {
            config.city_search_url = url;
        }
        if let Ok(url) = env::var("CURRENT_CONDITIONS_URL") {
            config.current_conditions_url = url;
        }
        if let Ok(url) = env::var("MAKEUP_CATALOG_URL") {
            config.catalog_url = url;
        }
        config.request_timeout = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(config.request_timeout);

        Ok(config)
    }

    /// Point every endpoint at one base URL, keeping the provider paths.
    /// Used to run the whole pipeline against a local mock server.
    pub fn with_base_url(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.ip_lookup_url = format!("{base}/json/");
        self.city_search_url = format!("{base}/locations/v1/cities/search");
        self.current_conditions_url = format!("{base}/currentconditions/v1");
        self.catalog_url = format!("{base}/api/v1/products.json");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_providers() {
        let config = Config::new("k");
        assert_eq!(config.weather_api_key, "k");
        assert!(config.city_search_url.contains("accuweather"));
        assert!(config.catalog_url.ends_with("products.json"));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn base_url_override_keeps_paths() {
        let config = Config::new("k").with_base_url("http://127.0.0.1:9000/");
        assert_eq!(config.ip_lookup_url, "http://127.0.0.1:9000/json/");
        assert_eq!(
            config.current_conditions_url,
            "http://127.0.0.1:9000/currentconditions/v1"
        );
    }
}
