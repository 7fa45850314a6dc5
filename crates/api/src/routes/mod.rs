pub mod auth;
pub mod health;
pub mod reimbursements;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth                              login (public), logout (auth)
///
/// /users                             list / lookup (manager), create (admin)
/// /users/{id}                        get (self, manager), update, delete (admin)
/// /users/{id}/reimbursements         reimbursements by author (self, manager)
///
/// /reimbursements                    list / lookup (manager), submit (auth)
/// /reimbursements/filter             filter by status and type (manager)
/// /reimbursements/{id}               get (author, manager), update (manager), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/reimbursements", reimbursements::router())
}
