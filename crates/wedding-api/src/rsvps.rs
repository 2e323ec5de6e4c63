use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;
use tracing::info;

use wedding_types::api::{FieldError, validate_rsvp};
use wedding_types::models::{NewRsvp, Rsvp};

use crate::error::{ApiError, ApiResult};
use crate::invitations::find_invitation;
use crate::state::AppState;

/// POST /api/rsvps
///
/// The body is read raw so malformed JSON is reported the same way as a
/// schema failure, with a `message` and per-field `errors`.
pub async fn create_rsvp(State(state): State<AppState>, body: Bytes) -> ApiResult<impl IntoResponse> {
    const CONTEXT: &str = "Failed to create RSVP";

    let value: Value = serde_json::from_slice(&body).map_err(|e| {
        ApiError::invalid_rsvp(vec![FieldError::new("body", format!("Invalid JSON: {e}"))])
    })?;
    let new = validate_rsvp(&value).map_err(ApiError::invalid_rsvp)?;

    check_references(&state, &new, CONTEXT)?;

    let rsvp = state.db.create_rsvp(new).map_err(ApiError::store(CONTEXT))?;
    info!(
        "RSVP {} for invitation {} (attending: {}, guests: {})",
        rsvp.id, rsvp.invitation_id, rsvp.attending, rsvp.guest_count
    );

    Ok((StatusCode::CREATED, Json(rsvp)))
}

/// An RSVP must name an existing invitation, and its guest, if any, must
/// belong to that invitation.
fn check_references(state: &AppState, new: &NewRsvp, context: &'static str) -> ApiResult<()> {
    let mut errors = Vec::new();

    let invitation = state
        .db
        .get_invitation(new.invitation_id)
        .map_err(ApiError::store(context))?;
    if invitation.is_none() {
        errors.push(FieldError::new("invitationId", "Unknown invitation"));
    }

    if let Some(guest_id) = new.guest_id {
        let guest = state.db.get_guest(guest_id).map_err(ApiError::store(context))?;
        match guest {
            Some(g) if g.invitation_id == new.invitation_id => {}
            Some(_) => errors.push(FieldError::new("guestId", "Guest belongs to another invitation")),
            None => errors.push(FieldError::new("guestId", "Unknown guest")),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::invalid_rsvp(errors))
    }
}

/// GET /api/invitations/{username}/rsvps
pub async fn list_rsvps(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<Vec<Rsvp>>> {
    const CONTEXT: &str = "Failed to fetch RSVPs";

    let invitation = find_invitation(&state, &username, CONTEXT)?;
    let rsvps = state
        .db
        .get_rsvps_by_invitation(invitation.id)
        .map_err(ApiError::store(CONTEXT))?;

    Ok(Json(rsvps))
}
