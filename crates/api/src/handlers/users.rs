//! Handlers for the `/users` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ers_core::error::CoreError;
use ers_core::models::{Reimbursement, User};
use ers_core::validator::IdCandidate;

use super::reconcile_id;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAdmin, RequireManager};
use crate::query::{to_key_query, LookupParams};
use crate::response::{DataResponse, UserResponse};
use crate::state::AppState;

/// Employees may only read their own profile and reimbursements.
fn ensure_self_or_manager(auth: &AuthUser, id: &str) -> AppResult<()> {
    let allowed = match id.to_db_id() {
        Some(user_id) => auth.is_self_or_manager(user_id),
        // Malformed ids are left to the service to reject for managers.
        None => auth.is_manager(),
    };
    if !allowed {
        return Err(AppError::Core(CoreError::Authorization(
            "You may only access your own account".into(),
        )));
    }
    Ok(())
}

/// GET /api/v1/users
///
/// Without query parameters, list every user. With a single `?field=value`
/// pair, look up one user by that field.
pub async fn list_users(
    RequireManager(_manager): RequireManager,
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> AppResult<Response> {
    if params.is_empty() {
        let users: Vec<UserResponse> = state
            .users
            .get_all_users()
            .await?
            .into_iter()
            .map(UserResponse::from)
            .collect();
        return Ok(Json(DataResponse::new(users)).into_response());
    }

    let user = state
        .users
        .get_user_by_unique_key(&to_key_query(params))
        .await?;
    Ok(Json(DataResponse::new(UserResponse::from(user))).into_response())
}

/// POST /api/v1/users
pub async fn create_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> AppResult<(StatusCode, Json<DataResponse<UserResponse>>)> {
    let created = state.users.add_new_user(user).await?;
    tracing::info!(user_id = created.id, admin_id = admin.user_id(), "User created");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(UserResponse::from(created))),
    ))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    ensure_self_or_manager(&auth, &id)?;
    let user = state.users.get_user_by_id(id.as_str()).await?;
    Ok(Json(DataResponse::new(UserResponse::from(user))))
}

/// PUT /api/v1/users/{id}
///
/// Full replace. An empty or missing password keeps the current one.
pub async fn update_user(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut user): Json<User>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    user.id = reconcile_id(&id, user.id)?;
    let updated = state.users.update_user(user).await?;
    Ok(Json(DataResponse::new(UserResponse::from(updated))))
}

/// DELETE /api/v1/users/{id}
pub async fn delete_user(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.users.delete_by_id(id.as_str()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/users/{id}/reimbursements
pub async fn list_user_reimbursements(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Vec<Reimbursement>>>> {
    ensure_self_or_manager(&auth, &id)?;
    let reimbs = state
        .reimbursements
        .get_reimbs_by_author_id(id.as_str())
        .await?;
    Ok(Json(DataResponse::new(reimbs)))
}
