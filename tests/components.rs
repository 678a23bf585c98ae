//! HTTP-facing components against a local `wiremock` server.

mod common;

use std::time::Duration;

use glam_forecast::{
    AppError, CatalogClient, Category, HttpFetcher, LocationResolver, WeatherClient,
    geo_location::LookupStatus,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{
    API_KEY, athens_candidates, condition_json, location_key_json, product_json, test_config,
};

fn fetcher() -> HttpFetcher {
    HttpFetcher::new(Duration::from_secs(2)).expect("failed to build fetcher")
}

// ---------------------------------------------------------------------------
// Fetch utility
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_trims_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plain"))
        .respond_with(ResponseTemplate::new(200).set_body_string("  \n[1,2]\n  "))
        .mount(&server)
        .await;

    let body = fetcher()
        .fetch(&format!("{}/plain", server.uri()))
        .await
        .unwrap();
    assert_eq!(body, "[1,2]");
}

#[tokio::test]
async fn fetch_maps_status_codes_to_reasons() {
    let server = MockServer::start().await;
    for code in [400u16, 401, 403, 404, 500, 503] {
        Mock::given(method("GET"))
            .and(path(format!("/status/{code}")))
            .respond_with(ResponseTemplate::new(code))
            .mount(&server)
            .await;
    }

    let expected = [
        (400, "bad syntax or invalid parameters"),
        (401, "API authorization failed"),
        (403, "insufficient permission for endpoint"),
        (404, "no route matches the given URI"),
        (500, "server encountered an unexpected condition"),
        (503, "unknown error with code 503"),
    ];
    for (code, reason) in expected {
        let err = fetcher()
            .fetch(&format!("{}/status/{code}", server.uri()))
            .await
            .unwrap_err();
        match err {
            AppError::Http {
                status_code,
                reason: got,
            } => {
                assert_eq!(status_code, code);
                assert_eq!(got, reason);
            }
            other => panic!("expected Http error for {code}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn non_200_success_is_still_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = fetcher().fetch(&server.uri()).await.unwrap_err();
    assert!(matches!(err, AppError::Http { status_code: 204, .. }), "got {err:?}");
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    // nothing listens on port 1
    let err = fetcher().fetch("http://127.0.0.1:1/").await.unwrap_err();
    assert!(matches!(err, AppError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn slow_response_times_out_as_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(Duration::from_millis(200)).unwrap();
    let err = fetcher.fetch(&server.uri()).await.unwrap_err();
    assert!(matches!(err, AppError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn malformed_payload_is_json_shape_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"not": "an array"})))
        .mount(&server)
        .await;

    let err = fetcher()
        .fetch_json::<Vec<u32>>(&server.uri(), "numbers")
        .await
        .unwrap_err();
    match err {
        AppError::JsonShape { context, .. } => assert_eq!(context, "numbers"),
        other => panic!("expected JsonShape, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Location resolver
// ---------------------------------------------------------------------------

#[tokio::test]
async fn network_origin_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": "24.48.0.1",
            "status": "success",
            "country": "United States",
            "regionName": "Georgia",
            "city": "Athens",
            "lat": 33.96,
            "lon": -83.38
        })))
        .mount(&server)
        .await;

    let resolver = LocationResolver::new(fetcher(), &test_config(&server));
    let location = resolver.resolve_from_network_origin().await.unwrap();
    assert_eq!(location.status, LookupStatus::Success);
    assert_eq!(location.city, "Athens");
    assert_eq!(location.region_name, "Georgia");
}

#[tokio::test]
async fn network_origin_failure_carries_provider_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": "192.168.0.10",
            "status": "fail",
            "message": "private range"
        })))
        .mount(&server)
        .await;

    let resolver = LocationResolver::new(fetcher(), &test_config(&server));
    let err = resolver.resolve_from_network_origin().await.unwrap_err();
    match err {
        AppError::LocationUnavailable(message) => assert_eq!(message, "private range"),
        other => panic!("expected LocationUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn city_search_sends_key_and_encoded_city() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/locations/v1/cities/search"))
        .and(query_param("apikey", API_KEY))
        .and(query_param("q", "San José"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([location_key_json(
            "347630",
            "San Jose",
            "California"
        )])))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = LocationResolver::new(fetcher(), &test_config(&server));
    let key = resolver
        .resolve_from_city_state("San José", "California")
        .await
        .unwrap();
    assert_eq!(key.key, "347630");
}

#[tokio::test]
async fn city_search_disambiguates_by_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/locations/v1/cities/search"))
        .and(query_param("q", "Athens"))
        .respond_with(ResponseTemplate::new(200).set_body_json(athens_candidates()))
        .mount(&server)
        .await;

    let resolver = LocationResolver::new(fetcher(), &test_config(&server));

    let ohio = resolver.resolve_from_city_state("Athens", "Ohio").await.unwrap();
    assert_eq!(ohio.key, "330120");

    let fallback = resolver
        .resolve_from_city_state("Athens", "Texas")
        .await
        .unwrap();
    assert_eq!(fallback.key, "329576");
    assert_eq!(fallback.administrative_area.english_name, "Georgia");
}

#[tokio::test]
async fn empty_city_search_is_no_location_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/locations/v1/cities/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let resolver = LocationResolver::new(fetcher(), &test_config(&server));
    let err = resolver
        .resolve_from_city_state("Nowhere", "Ohio")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NoLocationFound(_)), "got {err:?}");
}

#[tokio::test]
async fn unauthorized_city_search_surfaces_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/locations/v1/cities/search"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let resolver = LocationResolver::new(fetcher(), &test_config(&server));
    let err = resolver
        .resolve_from_city_state("Athens", "Ohio")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Http { status_code: 401, .. }), "got {err:?}");
}

// ---------------------------------------------------------------------------
// Weather fetcher
// ---------------------------------------------------------------------------

#[tokio::test]
async fn current_condition_uses_templated_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/currentconditions/v1/330120.json"))
        .and(query_param("apikey", API_KEY))
        .and(query_param("details", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(condition_json("Sunny", 24.5, 40)))
        .expect(1)
        .mount(&server)
        .await;

    let client = WeatherClient::new(fetcher(), &test_config(&server));
    let condition = client.fetch_current_condition("330120").await.unwrap();
    assert_eq!(condition.weather_text, "Sunny");
    assert_eq!(condition.temperature_celsius(), 24.5);
    assert_eq!(condition.relative_humidity, 40);
    assert_eq!(condition.utc_offset(), Some("-04:00"));
}

#[tokio::test]
async fn empty_condition_array_is_no_condition_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/currentconditions/v1/330120.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = WeatherClient::new(fetcher(), &test_config(&server));
    let err = client.fetch_current_condition("330120").await.unwrap_err();
    match err {
        AppError::NoConditionData(key) => assert_eq!(key, "330120"),
        other => panic!("expected NoConditionData, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Catalog fetcher
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_all_keeps_category_order() {
    let server = MockServer::start().await;
    for (i, category) in Category::ALL.iter().enumerate() {
        let id = i64::try_from(i).unwrap() + 1;
        Mock::given(method("GET"))
            .and(path("/api/v1/products.json"))
            .and(query_param("product_type", category.as_str()))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([product_json(id, category.as_str(), None)])),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = CatalogClient::new(fetcher(), &test_config(&server));
    let catalog = client.fetch_all().await.unwrap();
    for (i, category) in Category::ALL.iter().enumerate() {
        let products = catalog.products(*category);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, i64::try_from(i).unwrap() + 1);
        assert_eq!(products[0].product_type.as_deref(), Some(category.as_str()));
    }
}

#[tokio::test]
async fn one_failing_category_fails_the_catalog() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/products.json"))
        .and(query_param("product_type", "lipstick"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = CatalogClient::new(fetcher(), &test_config(&server));
    let err = client.fetch_all().await.unwrap_err();
    assert!(matches!(err, AppError::Http { status_code: 500, .. }), "got {err:?}");
}
