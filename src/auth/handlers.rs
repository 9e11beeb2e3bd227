use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, RegisterRequest},
        jwt::JwtKeys,
        services::{self, is_valid_email},
    },
    db::AppState,
    dto::MessageResponse,
    error::ApiError,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::Validation("Invalid email".into()));
    }
    if payload.password.is_empty() {
        return Err(ApiError::Validation("Password is required".into()));
    }

    services::register(
        state.users.as_ref(),
        payload.name.trim(),
        &payload.email,
        &payload.password,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::ok("User registered successfully")),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    let keys = JwtKeys::from_ref(&state);
    let token = services::login(
        state.users.as_ref(),
        &keys,
        &payload.email,
        &payload.password,
    )
    .await?;

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful",
        token,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_serialization() {
        let response = LoginResponse {
            success: true,
            message: "Login successful",
            token: "abc.def.ghi".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("abc.def.ghi"));
    }

    #[test]
    fn register_request_deserializes() {
        let body = r#"{"name":"Alice","email":"a@x.com","password":"secret1"}"#;
        let req: RegisterRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.name, "Alice");
        assert_eq!(req.email, "a@x.com");
    }
}
