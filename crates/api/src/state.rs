use std::sync::Arc;

use ers_core::services::{ReimbursementService, UserService};
use ers_db::{PgReimbursementRepository, PgUserRepository};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; services are built once and shared behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: ers_db::DbPool,
    pub config: Arc<ServerConfig>,
    pub users: Arc<UserService>,
    pub reimbursements: Arc<ReimbursementService>,
}

impl AppState {
    /// Wire the PostgreSQL repositories into the domain services.
    pub fn new(pool: ers_db::DbPool, config: ServerConfig) -> Self {
        let users = UserService::new(Arc::new(PgUserRepository::new(pool.clone())));
        let reimbursements =
            ReimbursementService::new(Arc::new(PgReimbursementRepository::new(pool.clone())));

        Self {
            pool,
            config: Arc::new(config),
            users: Arc::new(users),
            reimbursements: Arc::new(reimbursements),
        }
    }
}
