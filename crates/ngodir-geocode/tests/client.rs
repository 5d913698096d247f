//! Integration tests for `OlaMapsClient` using wiremock HTTP mocks.

use ngodir_geocode::{GeocodeError, OlaMapsClient};
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> OlaMapsClient {
    OlaMapsClient::with_base_url("test-key", 10, base_url)
        .expect("client construction should not fail")
}

fn jaipur_body() -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "geocodingResults": [
            {
                "formatted_address": "45, MG Road, Jaipur, Rajasthan 302001, India",
                "place_id": "ola-platform:abc123",
                "geometry": { "location": { "lat": 26.91, "lng": 75.78 } }
            },
            {
                "formatted_address": "MG Road, Ajmer, Rajasthan, India",
                "place_id": "ola-platform:def456",
                "geometry": { "location": { "lat": 26.45, "lng": 74.64 } }
            }
        ]
    })
}

#[tokio::test]
async fn geocode_returns_first_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/v1/geocode"))
        .and(query_param("address", "45 MG Road Jaipur"))
        .and(query_param("language", "English"))
        .and(query_param("api_key", "test-key"))
        .and(header_exists("X-Request-Id"))
        .and(header_exists("X-Correlation-Id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(jaipur_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .geocode("  45 MG Road Jaipur  ")
        .await
        .expect("should geocode");

    assert!((result.lat - 26.91).abs() < 1e-9);
    assert!((result.lng - 75.78).abs() < 1e-9);
    assert_eq!(result.place_id, "ola-platform:abc123");
    assert!(result.formatted_address.starts_with("45, MG Road"));
}

#[tokio::test]
async fn geocode_with_empty_results_fails_with_generic_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/v1/geocode"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "ok", "geocodingResults": [] })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.geocode("Atlantis").await.unwrap_err();

    assert!(err.is_no_result());
    assert_eq!(err.to_string(), "Unable to geocode address");
}

#[tokio::test]
async fn geocode_with_non_ok_status_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/v1/geocode"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "zero_results",
            "geocodingResults": [
                { "formatted_address": "x", "place_id": "y",
                  "geometry": { "location": { "lat": 1.0, "lng": 1.0 } } }
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.geocode("somewhere").await.unwrap_err();
    assert!(matches!(err, GeocodeError::Geocode { status: None, .. }));
}

#[tokio::test]
async fn geocode_surfaces_upstream_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/v1/geocode"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "status": "error",
            "message": "Invalid API key"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.geocode("Jaipur").await.unwrap_err();

    assert!(matches!(
        err,
        GeocodeError::Geocode { status: Some(401), ref message } if message == "Invalid API key"
    ));
}

#[tokio::test]
async fn geocode_is_single_shot_by_default() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/v1/geocode"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.geocode("Jaipur").await.unwrap_err();

    assert_eq!(err.upstream_status(), Some(503));
    assert_eq!(err.to_string(), "Unable to geocode address");
}

#[tokio::test]
async fn geocode_retries_transient_failures_when_enabled() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/v1/geocode"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/places/v1/geocode"))
        .respond_with(ResponseTemplate::new(200).set_body_json(jaipur_body()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri()).with_retry(2, 0);
    let result = client.geocode("Jaipur").await.expect("retry should succeed");
    assert_eq!(result.place_id, "ola-platform:abc123");
}

#[tokio::test]
async fn reverse_geocode_returns_first_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/v1/reverse-geocode"))
        .and(query_param("latlng", "26.91,75.78"))
        .and(query_param("api_key", "test-key"))
        .and(header_exists("X-Request-Id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok",
            "results": [
                {
                    "formatted_address": "MG Road, Jaipur, Rajasthan, India",
                    "address_components": [
                        { "long_name": "Jaipur", "short_name": "Jaipur", "types": ["locality"] },
                        { "long_name": "Rajasthan", "short_name": "RJ", "types": ["administrative_area_level_1"] }
                    ]
                }
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .reverse_geocode(26.91, 75.78)
        .await
        .expect("should reverse geocode");

    assert_eq!(result.formatted_address, "MG Road, Jaipur, Rajasthan, India");
    assert_eq!(result.address_components.len(), 2);
    assert_eq!(result.address_components[1].short_name, "RJ");
}

#[tokio::test]
async fn reverse_geocode_with_no_results_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/v1/reverse-geocode"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "ok", "results": [] })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.reverse_geocode(10.0, 10.0).await.unwrap_err();

    assert!(matches!(err, GeocodeError::ReverseGeocode { status: None, .. }));
    assert_eq!(err.to_string(), "Unable to reverse geocode coordinates");
}

#[tokio::test]
async fn malformed_body_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/v1/geocode"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.geocode("Jaipur").await.unwrap_err();
    assert!(matches!(err, GeocodeError::Deserialize { .. }));
}
