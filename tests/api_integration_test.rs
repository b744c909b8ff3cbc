mod common;

use climate_api::config::DatasetConfig;
use climate_api::{AppState, SqliteStore};
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Serves the API on an ephemeral port and returns its base URL.
async fn spawn_server(store: SqliteStore) -> String {
    let state = AppState::new(Arc::new(store), &DatasetConfig::default()).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(climate_api::serve(listener, state, std::future::pending()));

    format!("http://{}", addr)
}

async fn get_json(url: &str) -> (StatusCode, Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status();
    let body = response.json::<Value>().await.unwrap();
    (status, body)
}

#[tokio::test]
async fn test_summary_from_start_date() {
    let base = spawn_server(common::seeded_store().await).await;

    let (status, body) = get_json(&format!("{}/api/v1.0/2017-08-18", base)).await;

    assert_eq!(status, StatusCode::OK);
    let summary = &body.as_array().unwrap()[0];
    assert_eq!(summary["Start Date"], "2017-08-18");
    assert_eq!(summary["End Date"], "2017-08-23");
    assert_eq!(summary["Temperature Minimum"].as_f64(), Some(80.0));
    assert_eq!(summary["Temperature Average"].as_f64(), Some(80.5));
    assert_eq!(summary["Temperature Maximum"].as_f64(), Some(81.0));
}

#[tokio::test]
async fn test_summary_from_last_known_date() {
    let base = spawn_server(common::seeded_store().await).await;

    let (status, body) = get_json(&format!("{}/api/v1.0/2017-08-23", base)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["End Date"], "2017-08-23");
    assert_eq!(body[0]["Temperature Average"].as_f64(), Some(81.0));
}

#[tokio::test]
async fn test_unknown_start_date_is_not_found() {
    let base = spawn_server(common::seeded_store().await).await;

    let (status, body) = get_json(&format!("{}/api/v1.0/2017-08-24", base)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        serde_json::json!(["Error!! Data between '2017-08-24' and '2017-08-23' was not found."])
    );
}

#[tokio::test]
async fn test_summary_between_dates() {
    let base = spawn_server(common::seeded_store().await).await;

    let (status, body) = get_json(&format!("{}/api/v1.0/2017-08-01/2017-08-10", base)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["Start Date"], "2017-08-01");
    assert_eq!(body[0]["End Date"], "2017-08-10");
    assert_eq!(body[0]["Temperature Minimum"].as_f64(), Some(72.0));
    assert_eq!(body[0]["Temperature Average"].as_f64(), Some(75.7));
    assert_eq!(body[0]["Temperature Maximum"].as_f64(), Some(78.0));
}

#[tokio::test]
async fn test_invalid_ranges_are_not_found() {
    let base = spawn_server(common::seeded_store().await).await;

    for (start, end) in [
        ("2017-08-10", "2017-08-01"),
        ("2017-08-10", "2017-08-10"),
        ("2099-01-01", "2017-08-10"),
        ("2017-08-01", "2017-08-02"),
    ] {
        let (status, body) = get_json(&format!("{}/api/v1.0/{}/{}", base, start, end)).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "{}..{}", start, end);
        let message = body[0].as_str().unwrap();
        assert!(message.contains(&format!("'{}' and '{}'", start, end)));
        assert!(message.contains("make sure the start date is entered first"));
    }
}

#[tokio::test]
async fn test_precipitation_covers_last_year() {
    let base = spawn_server(common::seeded_store().await).await;

    let (status, body) = get_json(&format!("{}/api/v1.0/precipitation", base)).await;

    assert_eq!(status, StatusCode::OK);
    let map = body.as_object().unwrap();
    assert_eq!(map.len(), 7);
    assert!(!map.contains_key("2016-08-22"));
    assert_eq!(map["2017-08-05"].as_f64(), Some(0.12));
    assert!(map["2017-08-18"].is_null());
}

#[tokio::test]
async fn test_stations_and_tobs() {
    let base = spawn_server(common::seeded_store().await).await;

    let (status, stations) = get_json(&format!("{}/api/v1.0/stations", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stations.as_array().unwrap().len(), 2);

    let (status, tobs) = get_json(&format!("{}/api/v1.0/tobs", base)).await;
    assert_eq!(status, StatusCode::OK);
    let tobs = tobs.as_array().unwrap();
    assert_eq!(tobs.len(), 7);
    assert_eq!(tobs[0]["2016-08-23"].as_f64(), Some(81.0));
    assert_eq!(tobs[6]["2017-08-23"].as_f64(), Some(81.0));
}

#[tokio::test]
async fn test_route_listing() {
    let base = spawn_server(common::seeded_store().await).await;

    let body = reqwest::get(format!("{}/", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.starts_with("Climate Analysis:"));
    assert!(body.contains("/api/v1.0/<start>/<end>"));
}

#[tokio::test]
async fn test_store_failure_is_server_error() {
    let store = common::seeded_store().await;
    let pool = store.pool().clone();
    let base = spawn_server(store).await;
    pool.close().await;

    let (status, body) = get_json(&format!("{}/api/v1.0/2017-08-01", base)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!(["Internal server error"]));
}
