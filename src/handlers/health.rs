use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};

use crate::entities::{health_record, vaccination_record};
use crate::errors::ServiceError;
use crate::services::health::{AddHealthRecordInput, RecordVaccinationInput};
use crate::{ApiResponse, ApiResult, AppState};

pub async fn add_record(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<AddHealthRecordInput>,
) -> Result<(StatusCode, Json<ApiResponse<health_record::Model>>), ServiceError> {
    let created = state.services.health.add_record(user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> ApiResult<Vec<health_record::Model>> {
    let records = state.services.health.list(user_id).await?;
    Ok(Json(ApiResponse::success(records)))
}

pub async fn export_csv(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Response, ServiceError> {
    let csv = state.services.health.export_csv(user_id).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"health_records.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}

pub async fn record_vaccination(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<RecordVaccinationInput>,
) -> Result<(StatusCode, Json<ApiResponse<vaccination_record::Model>>), ServiceError> {
    let created = state
        .services
        .health
        .record_vaccination(user_id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

pub async fn list_vaccinations(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> ApiResult<Vec<vaccination_record::Model>> {
    let records = state.services.health.list_vaccinations(user_id).await?;
    Ok(Json(ApiResponse::success(records)))
}
