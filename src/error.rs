use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Error kinds produced by the domain layer. Handlers return these and the
/// `IntoResponse` impl below is the only place they are turned into HTTP.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("User already exists")]
    DuplicateUser,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Validation(String),

    /// Catch-all for store, hashing and signing failures. The cause is logged
    /// but never echoed to the caller.
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        ApiError::Internal(e)
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::DuplicateUser | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials | ApiError::InvalidToken => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(e) => {
                error!(error = %e, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            success: false,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_user_maps_to_400() {
        let res = ApiError::DuplicateUser.into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_credentials_and_token_map_to_401() {
        assert_eq!(
            ApiError::InvalidCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::InvalidToken.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn internal_maps_to_500_with_generic_message() {
        let err = ApiError::Internal(anyhow::anyhow!("connection refused to db at 10.0.0.1"));
        let msg = err.to_string();
        assert_eq!(msg, "Internal server error");
        assert!(!msg.contains("10.0.0.1"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::NotFound("Blog post");
        assert_eq!(err.to_string(), "Blog post not found");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
