use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::entities::feed_stock;
use crate::services::feed::UpsertFeedStockInput;
use crate::{ApiResponse, ApiResult, AppState};

pub async fn upsert_stock(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpsertFeedStockInput>,
) -> ApiResult<feed_stock::Model> {
    let saved = state.services.feed.upsert_stock(user_id, payload).await?;
    Ok(Json(ApiResponse::success(saved)))
}

pub async fn list_stock(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> ApiResult<Vec<feed_stock::Model>> {
    let stock = state.services.feed.list_stock(user_id).await?;
    Ok(Json(ApiResponse::success(stock)))
}
