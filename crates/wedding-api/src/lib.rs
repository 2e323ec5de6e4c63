pub mod error;
pub mod guests;
pub mod health;
pub mod invitations;
pub mod rsvps;
pub mod state;

use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use wedding_types::api::ErrorResponse;

use crate::state::AppState;

/// JSON routes of the service. Unknown paths get a JSON 404. Layers and
/// static assets are added by the binary.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/invitations/{username}", get(invitations::get_invitation))
        .route("/api/invitations/{username}/guests", get(guests::list_guests))
        .route(
            "/api/invitations/{username}/guests/{first_name}",
            get(guests::get_guest),
        )
        .route("/api/invitations/{username}/rsvps", get(rsvps::list_rsvps))
        .route("/api/rsvps", post(rsvps::create_rsvp))
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not found")))
}
