use axum::{
    Json,
    extract::{Path, State},
};

use wedding_types::models::Guest;

use crate::error::{ApiError, ApiResult};
use crate::invitations::find_invitation;
use crate::state::AppState;

/// GET /api/invitations/{username}/guests
pub async fn list_guests(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<Vec<Guest>>> {
    const CONTEXT: &str = "Failed to fetch guests";

    let invitation = find_invitation(&state, &username, CONTEXT)?;
    let guests = state
        .db
        .get_guests_by_invitation(invitation.id)
        .map_err(ApiError::store(CONTEXT))?;

    Ok(Json(guests))
}

/// GET /api/invitations/{username}/guests/{first_name} — the name match is
/// case-insensitive.
pub async fn get_guest(
    State(state): State<AppState>,
    Path((username, first_name)): Path<(String, String)>,
) -> ApiResult<Json<Guest>> {
    const CONTEXT: &str = "Failed to fetch guest";

    let invitation = find_invitation(&state, &username, CONTEXT)?;
    let guest = state
        .db
        .get_guest_by_name(invitation.id, &first_name)
        .map_err(ApiError::store(CONTEXT))?
        .ok_or(ApiError::NotFound("Guest"))?;

    Ok(Json(guest))
}
