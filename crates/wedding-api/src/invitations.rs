use axum::{
    Json,
    extract::{Path, State},
};

use wedding_types::models::Invitation;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Shared first step of every `/api/invitations/{username}/...` handler.
pub(crate) fn find_invitation(
    state: &AppState,
    username: &str,
    context: &'static str,
) -> ApiResult<Invitation> {
    state
        .db
        .get_invitation_by_username(username)
        .map_err(ApiError::store(context))?
        .ok_or(ApiError::NotFound("Invitation"))
}

/// GET /api/invitations/{username}
pub async fn get_invitation(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<Invitation>> {
    let invitation = find_invitation(&state, &username, "Failed to fetch invitation")?;
    Ok(Json(invitation))
}
