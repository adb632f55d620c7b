use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};

use crate::entities::{financial_record, labor_record, milk_buyer};
use crate::errors::ServiceError;
use crate::services::finance::{
    AddBuyerInput, AddLaborInput, AddTransactionInput, FinancialSummary,
};
use crate::{ApiResponse, ApiResult, AppState, DateRangeQuery};

pub async fn add_transaction(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<AddTransactionInput>,
) -> Result<(StatusCode, Json<ApiResponse<financial_record::Model>>), ServiceError> {
    let created = state
        .services
        .finance
        .add_transaction(user_id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

pub async fn list_transactions(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Query(range): Query<DateRangeQuery>,
) -> ApiResult<Vec<financial_record::Model>> {
    let records = state
        .services
        .finance
        .list_transactions(user_id, range.start_date, range.end_date)
        .await?;
    Ok(Json(ApiResponse::success(records)))
}

pub async fn summary(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Query(range): Query<DateRangeQuery>,
) -> ApiResult<FinancialSummary> {
    let summary = state
        .services
        .finance
        .summary(user_id, range.start_date, range.end_date)
        .await?;
    Ok(Json(ApiResponse::success(summary)))
}

pub async fn add_buyer(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<AddBuyerInput>,
) -> Result<(StatusCode, Json<ApiResponse<milk_buyer::Model>>), ServiceError> {
    let created = state.services.finance.add_buyer(user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

pub async fn list_buyers(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> ApiResult<Vec<milk_buyer::Model>> {
    let buyers = state.services.finance.list_buyers(user_id).await?;
    Ok(Json(ApiResponse::success(buyers)))
}

pub async fn add_labor(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<AddLaborInput>,
) -> Result<(StatusCode, Json<ApiResponse<labor_record::Model>>), ServiceError> {
    let created = state.services.finance.add_labor(user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

pub async fn list_labor(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> ApiResult<Vec<labor_record::Model>> {
    let workers = state.services.finance.list_labor(user_id).await?;
    Ok(Json(ApiResponse::success(workers)))
}
