use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use chrono::{Duration, NaiveDate, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::rules::alerts::{self, Alert};
use crate::services::analytics::{
    BreedComparison, BuffaloPerformance, DailyProduction, DashboardSummary, MonthlyTrend,
};
use crate::{ApiResponse, ApiResult, AppState, DateRangeQuery};

const DEFAULT_WINDOW_DAYS: u32 = 30;
const DEFAULT_TREND_MONTHS: u32 = 6;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct WindowQuery {
    /// Trailing window in days, default 30.
    pub window_days: Option<u32>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct TrendQuery {
    /// Trailing window in months, default 6.
    pub months: Option<u32>,
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub async fn daily_series(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Query(range): Query<DateRangeQuery>,
) -> ApiResult<Vec<DailyProduction>> {
    let end = range.end_date.unwrap_or_else(today);
    let start = range
        .start_date
        .unwrap_or_else(|| end - Duration::days(i64::from(DEFAULT_WINDOW_DAYS)));
    let series = state
        .services
        .analytics
        .daily_production_series(user_id, start, end)
        .await?;
    Ok(Json(ApiResponse::success(series)))
}

pub async fn buffalo_performance(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Query(query): Query<WindowQuery>,
) -> ApiResult<Vec<BuffaloPerformance>> {
    let window = query.window_days.unwrap_or(DEFAULT_WINDOW_DAYS);
    let performance = state
        .services
        .analytics
        .buffalo_performance(user_id, today(), window)
        .await?;
    Ok(Json(ApiResponse::success(performance)))
}

pub async fn breed_comparison(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Query(query): Query<WindowQuery>,
) -> ApiResult<Vec<BreedComparison>> {
    let window = query.window_days.unwrap_or(DEFAULT_WINDOW_DAYS);
    let comparison = state
        .services
        .analytics
        .breed_comparison(user_id, today(), window)
        .await?;
    Ok(Json(ApiResponse::success(comparison)))
}

pub async fn monthly_trends(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Query(query): Query<TrendQuery>,
) -> ApiResult<Vec<MonthlyTrend>> {
    let months = query.months.unwrap_or(DEFAULT_TREND_MONTHS);
    let trends = state
        .services
        .analytics
        .monthly_trends(user_id, today(), months)
        .await?;
    Ok(Json(ApiResponse::success(trends)))
}

pub async fn dashboard(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> ApiResult<DashboardSummary> {
    let summary = state
        .services
        .analytics
        .dashboard(user_id, today())
        .await?;
    Ok(Json(ApiResponse::success(summary)))
}

pub async fn alerts(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> ApiResult<Vec<Alert>> {
    let alerts = alerts::generate_alerts(&state.db, user_id, today()).await?;
    Ok(Json(ApiResponse::success(alerts)))
}
