//! Handlers for the `/reimbursements` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ers_core::error::CoreError;
use ers_core::models::{ReimbFilter, Reimbursement};

use super::reconcile_id;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireManager;
use crate::query::{to_key_query, LookupParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/reimbursements
///
/// Without query parameters, list every reimbursement. With a single
/// `?field=value` pair, look up one reimbursement by that field.
pub async fn list_reimbursements(
    RequireManager(_manager): RequireManager,
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> AppResult<Response> {
    if params.is_empty() {
        let reimbs = state.reimbursements.get_all_reimbs().await?;
        return Ok(Json(DataResponse::new(reimbs)).into_response());
    }

    let reimb = state
        .reimbursements
        .get_reimb_by_unique_key(&to_key_query(params))
        .await?;
    Ok(Json(DataResponse::new(reimb)).into_response())
}

/// POST /api/v1/reimbursements
///
/// The author is always the caller.
pub async fn submit_reimbursement(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut reimb): Json<Reimbursement>,
) -> AppResult<(StatusCode, Json<DataResponse<Reimbursement>>)> {
    reimb.author = auth.username().to_string();
    let created = state.reimbursements.add_new_reimb(reimb).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(created))))
}

/// GET /api/v1/reimbursements/filter?status=&type=
pub async fn filter_reimbursements(
    RequireManager(_manager): RequireManager,
    State(state): State<AppState>,
    Query(filter): Query<ReimbFilter>,
) -> AppResult<Json<DataResponse<Vec<Reimbursement>>>> {
    let reimbs = state.reimbursements.filter_reimbs(&filter).await?;
    Ok(Json(DataResponse::new(reimbs)))
}

/// GET /api/v1/reimbursements/{id}
///
/// Visible to its author and to managers.
pub async fn get_reimbursement(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Reimbursement>>> {
    let reimb = state.reimbursements.get_reimb_by_id(id.as_str()).await?;
    if !auth.is_manager() && reimb.author != auth.username() {
        return Err(AppError::Core(CoreError::Authorization(
            "You may only view your own reimbursements".into(),
        )));
    }
    Ok(Json(DataResponse::new(reimb)))
}

/// PUT /api/v1/reimbursements/{id}
///
/// Full replace; moving out of `pending` resolves the reimbursement with the
/// caller as resolver.
pub async fn update_reimbursement(
    RequireManager(manager): RequireManager,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut reimb): Json<Reimbursement>,
) -> AppResult<Json<DataResponse<Reimbursement>>> {
    reimb.id = reconcile_id(&id, reimb.id)?;
    reimb.resolver = Some(manager.username().to_string());
    let updated = state.reimbursements.update_reimb(reimb).await?;
    Ok(Json(DataResponse::new(updated)))
}

/// DELETE /api/v1/reimbursements/{id}
pub async fn delete_reimbursement(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.reimbursements.delete_by_id(id.as_str()).await?;
    Ok(StatusCode::NO_CONTENT)
}
