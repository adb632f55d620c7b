//! BuffaloMitra API Library
//!
//! Farm-management backend for buffalo dairy farms: herd registry, milk
//! production, breeding, health, feed, finances, alerts, and an advisory chat.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod migrator;
pub mod models;
pub mod openapi;
pub mod reference;
pub mod rules;
pub mod services;

use axum::{response::Json, routing::get, routing::post, routing::put, Router};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use utoipa::ToSchema;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub services: handlers::AppServices,
}

impl AppState {
    pub fn new(
        db: Arc<DatabaseConnection>,
        config: config::AppConfig,
    ) -> Result<Self, errors::ServiceError> {
        let services = handlers::AppServices::new(db.clone(), config.advisor.clone())?;
        Ok(Self {
            db,
            config,
            services,
        })
    }
}

// Common query parameters for list endpoints
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct DateRangeQuery {
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
}

// Common response wrappers
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Standard API result type for JSON responses
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, errors::ServiceError>;

/// All versioned API routes.
pub fn api_v1_routes() -> Router<AppState> {
    let auth = Router::new()
        .route("/auth/register", post(handlers::users::register))
        .route("/auth/login", post(handlers::users::login));

    let herd = Router::new()
        .route(
            "/farm/:user_id/buffaloes",
            post(handlers::herd::add_buffalo).get(handlers::herd::list_buffaloes),
        )
        .route(
            "/farm/:user_id/buffaloes/:buffalo_id",
            get(handlers::herd::get_buffalo),
        )
        .route(
            "/farm/:user_id/calves",
            post(handlers::herd::add_calf).get(handlers::herd::list_calves),
        );

    let production = Router::new()
        .route(
            "/farm/:user_id/production",
            post(handlers::production::record).get(handlers::production::list),
        )
        .route(
            "/farm/:user_id/production/export",
            get(handlers::production::export_csv),
        );

    let breeding = Router::new()
        .route(
            "/farm/:user_id/breeding",
            post(handlers::breeding::record).get(handlers::breeding::list),
        )
        .route(
            "/farm/:user_id/heat",
            post(handlers::breeding::record_heat).get(handlers::breeding::list_heat),
        );

    let health = Router::new()
        .route(
            "/farm/:user_id/health-records",
            post(handlers::health::add_record).get(handlers::health::list),
        )
        .route(
            "/farm/:user_id/health-records/export",
            get(handlers::health::export_csv),
        )
        .route(
            "/farm/:user_id/vaccinations",
            post(handlers::health::record_vaccination).get(handlers::health::list_vaccinations),
        );

    let feed = Router::new().route(
        "/farm/:user_id/feed-stock",
        put(handlers::feed::upsert_stock).get(handlers::feed::list_stock),
    );

    let finance = Router::new()
        .route(
            "/farm/:user_id/transactions",
            post(handlers::finance::add_transaction).get(handlers::finance::list_transactions),
        )
        .route(
            "/farm/:user_id/finance/summary",
            get(handlers::finance::summary),
        )
        .route(
            "/farm/:user_id/buyers",
            post(handlers::finance::add_buyer).get(handlers::finance::list_buyers),
        )
        .route(
            "/farm/:user_id/labor",
            post(handlers::finance::add_labor).get(handlers::finance::list_labor),
        );

    let analytics = Router::new()
        .route(
            "/farm/:user_id/analytics/daily",
            get(handlers::analytics::daily_series),
        )
        .route(
            "/farm/:user_id/analytics/performance",
            get(handlers::analytics::buffalo_performance),
        )
        .route(
            "/farm/:user_id/analytics/breeds",
            get(handlers::analytics::breed_comparison),
        )
        .route(
            "/farm/:user_id/analytics/trends",
            get(handlers::analytics::monthly_trends),
        )
        .route("/farm/:user_id/dashboard", get(handlers::analytics::dashboard))
        .route("/farm/:user_id/alerts", get(handlers::analytics::alerts));

    let advisor = Router::new().route("/farm/:user_id/advisor", post(handlers::advisor::ask));

    let reference = Router::new()
        .route("/reference/breeds", get(handlers::reference::breeds))
        .route(
            "/reference/breeds/:name",
            get(handlers::reference::breed_by_name),
        )
        .route("/reference/feeds", get(handlers::reference::feeds))
        .route("/reference/diseases", get(handlers::reference::diseases))
        .route("/reference/schemes", get(handlers::reference::schemes))
        .route("/reference/vaccines", get(handlers::reference::vaccines));

    let calculators = Router::new()
        .route(
            "/calculators/feed",
            get(handlers::calculators::feed_requirement),
        )
        .route(
            "/calculators/milk-price",
            get(handlers::calculators::milk_price),
        )
        .route(
            "/calculators/profit",
            get(handlers::calculators::profit_projection),
        )
        .route(
            "/calculators/insurance",
            get(handlers::calculators::insurance_estimate),
        );

    Router::new()
        .merge(auth)
        .merge(herd)
        .merge(production)
        .merge(breeding)
        .merge(health)
        .merge(feed)
        .merge(finance)
        .merge(analytics)
        .merge(advisor)
        .merge(reference)
        .merge(calculators)
}

/// Full application router including the unversioned service endpoints.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/openapi.json", get(openapi::openapi_json))
        .nest("/api/v1", api_v1_routes())
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod response_tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn success_response_carries_data_and_timestamp() {
        let response = ApiResponse::success("ok");
        assert!(response.success);
        assert_eq!(response.data, Some("ok"));
        DateTime::parse_from_rfc3339(&response.timestamp).expect("timestamp should parse");
    }

    #[test]
    fn error_response_carries_message() {
        let response = ApiResponse::<()>::error("oops".into());
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("oops"));
    }
}
