use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::entities::{breeding_record, heat_event};
use crate::errors::ServiceError;
use crate::services::breeding::{RecordBreedingInput, RecordHeatInput};
use crate::{ApiResponse, ApiResult, AppState};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct BreedingListQuery {
    /// Optional status filter: "Bred", "Pregnant", "Calved", or "Failed".
    pub status: Option<String>,
}

pub async fn record(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<RecordBreedingInput>,
) -> Result<(StatusCode, Json<ApiResponse<breeding_record::Model>>), ServiceError> {
    let created = state.services.breeding.record(user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Query(query): Query<BreedingListQuery>,
) -> ApiResult<Vec<breeding_record::Model>> {
    let records = state.services.breeding.list(user_id, query.status).await?;
    Ok(Json(ApiResponse::success(records)))
}

pub async fn record_heat(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<RecordHeatInput>,
) -> Result<(StatusCode, Json<ApiResponse<heat_event::Model>>), ServiceError> {
    let created = state.services.breeding.record_heat(user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

pub async fn list_heat(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> ApiResult<Vec<heat_event::Model>> {
    let events = state.services.breeding.list_heat_events(user_id).await?;
    Ok(Json(ApiResponse::success(events)))
}
