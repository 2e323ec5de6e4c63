use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error, warn};

use wedding_db::StoreError;
use wedding_types::api::{ErrorResponse, FieldError};

pub type ApiResult<T> = Result<T, ApiError>;

/// Every failure a handler can return. The response body always carries a
/// `message`; internal causes are logged and never sent to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{message}")]
    Validation {
        message: &'static str,
        errors: Vec<FieldError>,
    },

    #[error("{0}")]
    Conflict(String),

    /// `context` is the user-facing message, e.g. "Failed to fetch guests".
    #[error("{context}: {source}")]
    Internal {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    pub fn invalid_rsvp(errors: Vec<FieldError>) -> Self {
        Self::Validation {
            message: "Invalid RSVP data",
            errors,
        }
    }

    /// Wrap a store error, keeping uniqueness failures distinct from 500s.
    pub fn store(context: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |err| match err {
            StoreError::UsernameTaken(_) | StoreError::DuplicateGuest { .. } => {
                Self::Conflict(err.to_string())
            }
            StoreError::LockPoisoned(_) => Self::Internal {
                context,
                source: err,
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            Self::NotFound(entity) => {
                debug!("{} not found", entity);
                ErrorResponse::new(format!("{entity} not found"))
            }
            Self::Validation { message, errors } => {
                warn!("{}: {} invalid field(s)", message, errors.len());
                ErrorResponse {
                    message: message.to_string(),
                    errors,
                }
            }
            Self::Conflict(msg) => {
                warn!("Conflict: {}", msg);
                ErrorResponse::new(msg)
            }
            Self::Internal { context, source } => {
                error!("{}: {}", context, source);
                ErrorResponse::new(context)
            }
        };

        (status, Json(body)).into_response()
    }
}
