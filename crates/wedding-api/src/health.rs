use axum::{Json, extract::State};

use wedding_types::api::HealthResponse;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let invitations = state
        .db
        .count_invitations()
        .map_err(ApiError::store("Store unavailable"))?;

    Ok(Json(HealthResponse {
        status: "ok".into(),
        invitations,
    }))
}
