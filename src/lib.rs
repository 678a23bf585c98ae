//! Weather-aware makeup recommendations.
//!
//! Resolves the user's location, fetches the current condition from
//! AccuWeather, maps it to per-category search tags and picks matching
//! products from the Makeup API.

pub mod catalog;
pub mod config;
pub mod error;
pub mod geo_location;
pub mod http;
pub mod pipeline;
pub mod recommend;
pub mod us_data;
pub mod weather;

pub use catalog::{Catalog, CatalogClient, Pick, Product};
pub use config::Config;
pub use error::AppError;
pub use geo_location::{Location, LocationKey, LocationResolver};
pub use http::HttpFetcher;
pub use pipeline::{LocationQuery, Pipeline, Recommendation};
pub use recommend::{Category, Rule, TagSet, classify};
pub use weather::{CurrentCondition, WeatherClient};
