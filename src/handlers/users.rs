use axum::{extract::State, http::StatusCode, response::Json};

use crate::entities::user;
use crate::services::users::{LoginInput, RegisterInput};
use crate::{ApiResponse, ApiResult, AppState};

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterInput>,
) -> Result<(StatusCode, Json<ApiResponse<user::Model>>), crate::errors::ServiceError> {
    let created = state.services.users.register(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginInput>,
) -> ApiResult<user::Model> {
    let authenticated = state.services.users.authenticate(payload).await?;
    Ok(Json(ApiResponse::success(authenticated)))
}
