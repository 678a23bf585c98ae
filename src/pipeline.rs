//! Location → weather → tags → products, run as one cancellable unit.

use rand::Rng;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, info, info_span, warn};

use crate::{
    catalog::{self, CatalogClient, Pick},
    config::Config,
    error::AppError,
    geo_location::{LocationKey, LocationResolver},
    http::HttpFetcher,
    recommend::{self, Rule, TagSet},
    weather::{CurrentCondition, WeatherClient},
};

/// Where to look up the weather.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationQuery {
    /// Geolocate the caller's public address
    NetworkOrigin,
    CityState { city: String, state: String },
}

impl LocationQuery {
    /// Uses the city/state pair only when both parts are present and non-blank.
    pub fn from_input(city: Option<&str>, state: Option<&str>) -> Self {
        match (
            city.map(str::trim).filter(|c| !c.is_empty()),
            state.map(str::trim).filter(|s| !s.is_empty()),
        ) {
            (Some(city), Some(state)) => LocationQuery::CityState {
                city: city.to_string(),
                state: state.to_string(),
            },
            _ => LocationQuery::NetworkOrigin,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct Recommendation {
    /// City and state the lookup was made for
    pub city: String,
    pub state: String,
    /// Provider's resolved location; may be in another state after fallback
    pub location: LocationKey,
    pub condition: CurrentCondition,
    pub rule: Rule,
    pub tags: TagSet,
    /// One entry per category, in fixed category order
    pub picks: Vec<Pick>,
}

#[derive(Debug, Clone)]
pub struct Pipeline {
    locations: LocationResolver,
    weather: WeatherClient,
    catalog: CatalogClient,
}

impl Pipeline {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let fetcher = HttpFetcher::new(config.request_timeout)?;
        Ok(Self {
            locations: LocationResolver::new(fetcher.clone(), config),
            weather: WeatherClient::new(fetcher.clone(), config),
            catalog: CatalogClient::new(fetcher, config),
        })
    }

    pub async fn run<R: Rng + ?Sized>(
        &self,
        query: LocationQuery,
        rng: &mut R,
    ) -> Result<Recommendation, AppError> {
        let (city, state) = match query {
            LocationQuery::CityState { city, state } => (city, state),
            LocationQuery::NetworkOrigin => {
                let origin = self
                    .locations
                    .resolve_from_network_origin()
                    .instrument(info_span!("ip_lookup"))
                    .await?;
                (origin.city, origin.region_name)
            }
        };

        let location = self
            .locations
            .resolve_from_city_state(&city, &state)
            .instrument(info_span!("city_search", %city, %state))
            .await?;

        let condition = self
            .weather
            .fetch_current_condition(&location.key)
            .instrument(info_span!("current_condition", key = %location.key))
            .await?;

        let rule = recommend::classify_with_rule(
            &condition.weather_text,
            condition.temperature_celsius(),
            condition.relative_humidity,
        );
        let tags = rule.tags();
        info!(
            "{} at {}°C, {}% humidity -> {:?}",
            condition.weather_text,
            condition.temperature_celsius(),
            condition.relative_humidity,
            rule
        );

        let products = self
            .catalog
            .fetch_all()
            .instrument(info_span!("catalog"))
            .await?;
        let picks = catalog::recommend(&products, &tags, rng);

        Ok(Recommendation {
            city,
            state,
            location,
            condition,
            rule,
            tags,
            picks,
        })
    }

    /// Runs the pipeline until it finishes or `token` is cancelled. A
    /// cancelled run returns `AppError::Cancelled` and nothing else.
    pub async fn run_until_cancelled<R: Rng + ?Sized>(
        &self,
        query: LocationQuery,
        rng: &mut R,
        token: &CancellationToken,
    ) -> Result<Recommendation, AppError> {
        tokio::select! {
            biased;
            () = token.cancelled() => {
                warn!("Pipeline cancelled");
                Err(AppError::Cancelled)
            }
            result = self.run(query, rng) => result,
        }
    }
}
