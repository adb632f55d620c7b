use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::entities::{buffalo, calf_record};
use crate::errors::ServiceError;
use crate::services::herd::{AddBuffaloInput, AddCalfInput};
use crate::{ApiResponse, ApiResult, AppState};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct HerdListQuery {
    /// Optional status filter: "Active", "Sold", or "Dead".
    pub status: Option<String>,
}

pub async fn add_buffalo(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<AddBuffaloInput>,
) -> Result<(StatusCode, Json<ApiResponse<buffalo::Model>>), ServiceError> {
    let created = state.services.herd.add_buffalo(user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

pub async fn list_buffaloes(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Query(query): Query<HerdListQuery>,
) -> ApiResult<Vec<buffalo::Model>> {
    let animals = state
        .services
        .herd
        .list_buffaloes(user_id, query.status)
        .await?;
    Ok(Json(ApiResponse::success(animals)))
}

pub async fn get_buffalo(
    State(state): State<AppState>,
    Path((user_id, buffalo_id)): Path<(i32, i32)>,
) -> ApiResult<buffalo::Model> {
    let animal = state.services.herd.get_buffalo(user_id, buffalo_id).await?;
    Ok(Json(ApiResponse::success(animal)))
}

pub async fn add_calf(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<AddCalfInput>,
) -> Result<(StatusCode, Json<ApiResponse<calf_record::Model>>), ServiceError> {
    let created = state.services.herd.add_calf(user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

pub async fn list_calves(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> ApiResult<Vec<calf_record::Model>> {
    let calves = state.services.herd.list_calves(user_id).await?;
    Ok(Json(ApiResponse::success(calves)))
}
