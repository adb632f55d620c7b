use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::services::advisor::{AdvisorReply, AskAdvisorInput};
use crate::{ApiResponse, ApiResult, AppState};

pub async fn ask(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(mut payload): Json<AskAdvisorInput>,
) -> ApiResult<AdvisorReply> {
    // Fill in the farmer's location from their profile when not given. An
    // unknown user id surfaces as NotFound.
    let user = state.services.users.get(user_id).await?;
    payload.village = payload.village.or(Some(user.village));
    payload.district = payload.district.or(Some(user.district));
    let reply = state.services.advisor.ask(payload).await?;
    Ok(Json(ApiResponse::success(reply)))
}
