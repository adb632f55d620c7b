mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use buffalomitra_api::config::{AdvisorConfig, AppConfig};
use buffalomitra_api::{app_router, AppState};
use common::setup_db;

async fn test_app() -> Router {
    let db = setup_db().await;
    let config = AppConfig {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: "test".to_string(),
        log_level: "warn".to_string(),
        log_json: false,
        auto_migrate: false,
        cors_allowed_origins: None,
        advisor: AdvisorConfig::default(),
    };
    app_router(AppState::new(db, config).expect("app state"))
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = test_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn register_returns_created_and_hides_password_hash() {
    let app = test_app().await;
    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/auth/register",
            json!({
                "username": "ramesh",
                "password": "secret123",
                "full_name": "Ramesh Patel",
                "mobile": "9876543210",
                "district": "Kheda",
                "village": "Anand"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["username"], "ramesh");
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn invalid_registration_maps_to_bad_request() {
    let app = test_app().await;
    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/auth/register",
            json!({
                "username": "ramesh",
                "password": "ab",
                "full_name": "Ramesh Patel",
                "mobile": "9876543210",
                "district": "Kheda",
                "village": "Anand"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Bad Request");
    assert!(body["message"]
        .as_str()
        .expect("message")
        .contains("password"));
}

#[tokio::test]
async fn reference_catalogs_are_served() {
    let app = test_app().await;
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/reference/breeds")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let breeds = body["data"].as_array().expect("breed list");
    assert!(breeds.iter().any(|b| b["name"] == "Murrah"));

    let missing = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/reference/breeds/Holstein")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn milk_price_calculator_matches_formula() {
    let app = test_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/calculators/milk-price?fat_percent=7.0&snf_percent=9.5&quantity_liters=10.0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    // 40 + 7*8 + 9.5*6 = 153
    assert_eq!(body["data"]["price_per_liter"], 153.0);
    assert_eq!(body["data"]["total_amount"], 1530.0);
}

#[tokio::test]
async fn advisor_for_unknown_user_returns_not_found() {
    let app = test_app().await;
    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/farm/9999/advisor",
            json!({ "question": "How much green fodder per buffalo?" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn advisor_without_key_returns_service_unavailable() {
    let app = test_app().await;
    let register = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/auth/register",
            json!({
                "username": "advisee",
                "password": "secret123",
                "full_name": "Advisee",
                "mobile": "9876543210",
                "district": "Kheda",
                "village": "Anand"
            }),
        ))
        .await
        .unwrap();
    let user_id = response_json(register).await["data"]["id"]
        .as_i64()
        .expect("user id");

    let response = app
        .oneshot(json_request(
            Method::POST,
            &format!("/api/v1/farm/{user_id}/advisor"),
            json!({ "question": "How much green fodder per buffalo?" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
