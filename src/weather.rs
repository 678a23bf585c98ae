use chrono::{DateTime, FixedOffset};
use tracing::{debug, error, info};

use crate::{config::Config, error::AppError, http::HttpFetcher};

mod response;

pub use response::{CurrentCondition, Measurement, Temperature};

#[derive(Debug, Clone)]
pub struct WeatherClient {
    fetcher: HttpFetcher,
    api_key: String,
    endpoint: String,
}

impl WeatherClient {
    pub fn new(fetcher: HttpFetcher, config: &Config) -> Self {
        Self {
            fetcher,
            api_key: config.weather_api_key.clone(),
            endpoint: config.current_conditions_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch_current_condition(
        &self,
        location_key: &str,
    ) -> Result<CurrentCondition, AppError> {
        info!("Fetching current condition for location key: {}", location_key);
        let url = format!(
            "{}/{}.json?apikey={}&details=true",
            self.endpoint, location_key, self.api_key
        );

        let conditions: Vec<CurrentCondition> =
            self.fetcher.fetch_json(&url, "current conditions").await?;

        match conditions.into_iter().next() {
            Some(condition) => {
                debug!("Current condition fetched successfully: {:?}", condition);
                Ok(condition)
            }
            None => {
                error!("Empty current-conditions response for {}", location_key);
                Err(AppError::NoConditionData(location_key.to_string()))
            }
        }
    }
}

impl CurrentCondition {
    pub fn temperature_celsius(&self) -> f64 {
        self.temperature.metric.value
    }

    /// Observation instant with its local offset, if the provider text is RFC 3339.
    pub fn observed_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.local_observation_date_time).ok()
    }

    /// `YYYY-MM-DD` part of the observation timestamp.
    pub fn observation_date(&self) -> Option<&str> {
        self.local_observation_date_time.get(0..10)
    }

    /// `HH:MM:SS` part of the observation timestamp.
    pub fn observation_time(&self) -> Option<&str> {
        self.local_observation_date_time.get(11..19)
    }

    /// Trailing UTC offset, e.g. `-04:00`.
    pub fn utc_offset(&self) -> Option<&str> {
        self.local_observation_date_time
            .get(19..)
            .filter(|offset| !offset.is_empty())
    }
}
