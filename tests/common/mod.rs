//! Fixtures shared by the integration tests.

#![allow(dead_code)]

use std::time::Duration;

use glam_forecast::Config;
use serde_json::{Value, json};
use wiremock::MockServer;

pub const API_KEY: &str = "test-key";

/// Config with every endpoint on `server` and a short timeout.
pub fn test_config(server: &MockServer) -> Config {
    let mut config = Config::new(API_KEY).with_base_url(&server.uri());
    config.request_timeout = Duration::from_secs(2);
    config
}

pub fn location_key_json(key: &str, city: &str, state: &str) -> Value {
    json!({
        "Version": 1,
        "Key": key,
        "Type": "City",
        "Rank": 55,
        "LocalizedName": city,
        "EnglishName": city,
        "Region": { "ID": "NAM", "LocalizedName": "North America", "EnglishName": "North America" },
        "Country": { "ID": "US", "EnglishName": "United States" },
        "AdministrativeArea": { "ID": "XX", "EnglishName": state },
        "TimeZone": { "Code": "EDT", "Name": "America/New_York", "GmtOffset": -4.0 }
    })
}

pub fn athens_candidates() -> Value {
    json!([
        location_key_json("329576", "Athens", "Georgia"),
        location_key_json("330120", "Athens", "Ohio"),
    ])
}

pub fn condition_json(text: &str, celsius: f64, humidity: i32) -> Value {
    json!([{
        "LocalObservationDateTime": "2024-04-20T14:35:00-04:00",
        "EpochTime": 1713638100,
        "WeatherText": text,
        "WeatherIcon": 3,
        "HasPrecipitation": false,
        "IsDayTime": true,
        "Temperature": {
            "Metric": { "Value": celsius, "Unit": "C", "UnitType": 17 },
            "Imperial": { "Value": celsius * 9.0 / 5.0 + 32.0, "Unit": "F", "UnitType": 18 }
        },
        "RelativeHumidity": humidity
    }])
}

pub fn product_json(id: i64, product_type: &str, description: Option<&str>) -> Value {
    json!({
        "id": id,
        "brand": "nyx",
        "name": format!("{product_type} #{id}"),
        "price": "9.0",
        "price_sign": "$",
        "currency": "USD",
        "image_link": format!("https://example.com/{id}.png"),
        "product_link": format!("https://example.com/{id}"),
        "description": description,
        "category": null,
        "product_type": product_type,
        "tag_list": [],
        "product_api_url": format!("https://makeup-api.herokuapp.com/api/v1/products/{id}.json"),
        "product_colors": []
    })
}
