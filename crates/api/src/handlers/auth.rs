//! Handlers for the `/auth` resource (login, logout).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ers_core::models::Principal;
use serde::Deserialize;

use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, LoginResponse};
use crate::state::AppState;

/// Request body for `POST /auth`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /api/v1/auth
///
/// Authenticate with username + password. Returns the principal and a
/// bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<LoginResponse>>> {
    let user = state
        .users
        .authenticate_user(&input.username, &input.password)
        .await?;
    let principal = Principal::from(&user);

    let access_token = generate_access_token(&principal, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = principal.id, role = %principal.role, "User logged in");

    Ok(Json(DataResponse::new(LoginResponse {
        principal,
        access_token,
        expires_in: state.config.jwt.expires_in_secs(),
    })))
}

/// DELETE /api/v1/auth
///
/// Sessions are stateless tokens; logging out is acknowledged and the client
/// drops its token.
pub async fn logout(auth_user: AuthUser) -> StatusCode {
    tracing::info!(user_id = auth_user.user_id(), "User logged out");
    StatusCode::NO_CONTENT
}
