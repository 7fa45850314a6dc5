//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does not
//! meet the minimum requirement: 401 without a session, 403 with the wrong
//! role.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use ers_core::error::CoreError;
use ers_core::roles::{self, ROLE_ADMIN};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires `manager` or `admin` role.
///
/// ```ignore
/// async fn review(RequireManager(user): RequireManager) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireManager(pub AuthUser);

impl FromRequestParts<AppState> for RequireManager {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !roles::can_manage(user.role()) {
            return Err(AppError::Core(CoreError::Authorization(
                "You are not authorized to access this resource".into(),
            )));
        }
        Ok(RequireManager(user))
    }
}

/// Requires the `admin` role.
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role() != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Authorization(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}
