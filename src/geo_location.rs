// Module containing response data structures for location lookups
mod response;

pub use response::{AdministrativeArea, Location, LocationKey, LookupStatus, Region, TimeZone};

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::{debug, info, warn};

use crate::{config::Config, error::AppError, http::HttpFetcher};

/// Resolves where the caller is, either from their public address or from a
/// city/state pair typed by the user.
#[derive(Debug, Clone)]
pub struct LocationResolver {
    fetcher: HttpFetcher,
    api_key: String,
    ip_lookup_url: String,
    city_search_url: String,
}

impl LocationResolver {
    pub fn new(fetcher: HttpFetcher, config: &Config) -> Self {
        Self {
            fetcher,
            api_key: config.weather_api_key.clone(),
            ip_lookup_url: config.ip_lookup_url.clone(),
            city_search_url: config.city_search_url.clone(),
        }
    }

    /// Geolocates the caller's own public-facing address.
    ///
    /// # Returns
    /// * `Location` with city and region populated
    /// * `AppError::LocationUnavailable` if the provider reports `fail`
    pub async fn resolve_from_network_origin(&self) -> Result<Location, AppError> {
        info!("Resolving location from network origin");

        let location: Location = self
            .fetcher
            .fetch_json(&self.ip_lookup_url, "IP geolocation")
            .await?;

        if location.status == LookupStatus::Fail {
            let message = location
                .message
                .unwrap_or_else(|| "no reason given".to_string());
            warn!("IP geolocation failed for {}: {}", location.query, message);
            return Err(AppError::LocationUnavailable(message));
        }

        debug!("IP geolocation resolved: {:?}", location);
        Ok(location)
    }

    /// Looks up the location key for `city`, using `state` to pick among
    /// same-named cities.
    ///
    /// # Returns
    /// * The first candidate matching both city and state, or the first
    ///   candidate at all when none matches both
    /// * `AppError::NoLocationFound` if the search returns nothing
    pub async fn resolve_from_city_state(
        &self,
        city: &str,
        state: &str,
    ) -> Result<LocationKey, AppError> {
        info!("Resolving location key for {}, {}", city, state);

        let url = format!(
            "{}?apikey={}&q={}",
            self.city_search_url,
            self.api_key,
            utf8_percent_encode(city, NON_ALPHANUMERIC)
        );
        let candidates: Vec<LocationKey> = self.fetcher.fetch_json(&url, "city search").await?;
        debug!("City search returned {} candidates", candidates.len());

        select_location(candidates, city, state)
            .ok_or_else(|| AppError::NoLocationFound(format!("{city}, {state}")))
    }
}

/// Picks the first candidate whose name and administrative area both match
/// (case-insensitively), otherwise the first candidate in provider order.
/// `None` only for an empty candidate list.
pub fn select_location(candidates: Vec<LocationKey>, city: &str, state: &str) -> Option<LocationKey> {
    let exact = candidates.iter().position(|candidate| {
        same_name(&candidate.english_name, city)
            && same_name(&candidate.administrative_area.english_name, state)
    });

    match exact {
        Some(index) => candidates.into_iter().nth(index),
        None => {
            if let Some(first) = candidates.first() {
                warn!(
                    "No exact match for {}, {}; falling back to {}, {}",
                    city, state, first.english_name, first.administrative_area.english_name
                );
            }
            candidates.into_iter().next()
        }
    }
}

// Unicode-aware; "Cañon City" and "CAÑON CITY" are the same place.
fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
