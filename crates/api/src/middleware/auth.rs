//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use ers_core::error::CoreError;
use ers_core::models::Principal;
use ers_core::roles;
use ers_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Session principal extracted from a JWT Bearer token in the `Authorization`
/// header. Rejects with 401 when the header is missing or the token invalid.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Principal);

impl AuthUser {
    pub fn user_id(&self) -> DbId {
        self.0.id
    }

    pub fn username(&self) -> &str {
        &self.0.username
    }

    pub fn role(&self) -> &str {
        &self.0.role
    }

    pub fn is_manager(&self) -> bool {
        roles::can_manage(&self.0.role)
    }

    /// Either the principal is the subject of the request or a manager.
    pub fn is_self_or_manager(&self, user_id: DbId) -> bool {
        self.0.id == user_id || self.is_manager()
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Authentication(
                    "No session found! Please login.".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Authentication(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Authentication(
                "Invalid or expired session".into(),
            ))
        })?;

        Ok(AuthUser(claims.into()))
    }
}
