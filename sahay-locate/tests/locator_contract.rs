//! Locator contract tests against a mocked Overpass interpreter.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use sahay_locate::{FacilityKind, FacilityLocator, LocateError, LocatorConfig};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(upstream: &MockServer) -> LocatorConfig {
    LocatorConfig {
        endpoint: format!("{}/api/interpreter", upstream.uri()),
        ..Default::default()
    }
}

fn overpass_body(count: usize) -> serde_json::Value {
    let elements: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            json!({
                "id": 1000 + i,
                "lat": 28.61 + (i as f64) * 0.001,
                "lon": 77.20 + (i as f64) * 0.001,
                "tags": {
                    "amenity": if i % 2 == 0 { "hospital" } else { "pharmacy" },
                    "name": format!("Facility {i}")
                }
            })
        })
        .collect();
    json!({ "elements": elements })
}

#[tokio::test]
async fn locate_posts_overpass_ql_as_plain_text() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/interpreter"))
        .and(header("Content-Type", "text/plain"))
        .and(body_string_contains("node[\"amenity\"=\"hospital\"](around:3000,28.6139,77.209)"))
        .and(body_string_contains("node[\"amenity\"=\"clinic\"]"))
        .respond_with(ResponseTemplate::new(200).set_body_json(overpass_body(3)))
        .expect(1)
        .mount(&upstream)
        .await;

    let locator = FacilityLocator::new(config_for(&upstream)).unwrap();
    let facilities = locator.locate(28.6139, 77.209).await.unwrap();

    assert_eq!(facilities.len(), 3);
    assert_eq!(facilities[0].name, "Facility 0");
    assert_eq!(facilities[0].kind, FacilityKind::Hospital);
    assert_eq!(facilities[1].kind, FacilityKind::Pharmacy);
    // Discovery order, annotated distances.
    for f in &facilities {
        assert!(f.distance_km >= 0.0);
        assert!(f.distance_label().ends_with(" km"));
    }
}

#[tokio::test]
async fn locate_caps_at_fifteen_results() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/interpreter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(overpass_body(40)))
        .mount(&upstream)
        .await;

    let locator = FacilityLocator::new(config_for(&upstream)).unwrap();
    let facilities = locator.locate(28.6139, 77.209).await.unwrap();
    assert_eq!(facilities.len(), 15);
    assert_eq!(facilities[14].name, "Facility 14");
}

#[tokio::test]
async fn empty_area_is_ok_not_error() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/interpreter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "elements": [] })))
        .mount(&upstream)
        .await;

    let locator = FacilityLocator::new(config_for(&upstream)).unwrap();
    let facilities = locator.locate(28.6139, 77.209).await.unwrap();
    assert!(facilities.is_empty());
}

#[tokio::test]
async fn upstream_failure_is_http_error() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/interpreter"))
        .respond_with(ResponseTemplate::new(504))
        .mount(&upstream)
        .await;

    let locator = FacilityLocator::new(config_for(&upstream)).unwrap();
    let err = locator.locate(28.6139, 77.209).await.unwrap_err();
    assert!(matches!(err, LocateError::Http(_)));
}

#[tokio::test]
async fn locate_or_fallback_substitutes_placeholder_on_error() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/interpreter"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&upstream)
        .await;

    let locator = FacilityLocator::new(config_for(&upstream)).unwrap();
    let facilities = locator.locate_or_fallback(28.6139, 77.209).await;

    assert_eq!(facilities.len(), 1);
    assert_eq!(facilities[0].id, "fallback-1");
    assert_eq!(facilities[0].name, "Sample Hospital");
    assert!(facilities[0].distance_km > 0.0);
}

#[tokio::test]
async fn garbage_body_is_parse_error() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/interpreter"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&upstream)
        .await;

    let locator = FacilityLocator::new(config_for(&upstream)).unwrap();
    assert!(matches!(
        locator.locate(28.6139, 77.209).await.unwrap_err(),
        LocateError::Parse(_)
    ));
}
