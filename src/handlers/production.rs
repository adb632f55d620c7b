use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};

use crate::entities::milk_production;
use crate::errors::ServiceError;
use crate::services::production::{DateRange, RecordProductionInput};
use crate::{ApiResponse, ApiResult, AppState};

pub async fn record(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<RecordProductionInput>,
) -> Result<(StatusCode, Json<ApiResponse<milk_production::Model>>), ServiceError> {
    let created = state.services.production.record(user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Query(range): Query<DateRange>,
) -> ApiResult<Vec<milk_production::Model>> {
    let records = state.services.production.list(user_id, range).await?;
    Ok(Json(ApiResponse::success(records)))
}

pub async fn export_csv(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Query(range): Query<DateRange>,
) -> Result<Response, ServiceError> {
    let csv = state.services.production.export_csv(user_id, range).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"milk_production.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}
