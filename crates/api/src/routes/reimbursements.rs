//! Route definitions for the `/reimbursements` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::reimbursements;
use crate::state::AppState;

/// Routes mounted at `/reimbursements`.
///
/// ```text
/// GET    /          -> list_reimbursements
/// POST   /          -> submit_reimbursement
/// GET    /filter    -> filter_reimbursements
/// GET    /{id}      -> get_reimbursement
/// PUT    /{id}      -> update_reimbursement
/// DELETE /{id}      -> delete_reimbursement
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(reimbursements::list_reimbursements).post(reimbursements::submit_reimbursement),
        )
        .route("/filter", get(reimbursements::filter_reimbursements))
        .route(
            "/{id}",
            get(reimbursements::get_reimbursement)
                .put(reimbursements::update_reimbursement)
                .delete(reimbursements::delete_reimbursement),
        )
}
