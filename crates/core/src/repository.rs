//! Persistence ports implemented by `ers-db`.
//!
//! Lookups return `Ok(None)` when nothing matches. Data-access faults surface
//! as [`CoreError::Internal`](crate::error::CoreError::Internal); unique
//! constraint violations as `ResourcePersistence`.

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::models::{Reimbursement, User};
use crate::status::ReimbStatus;
use crate::types::DbId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_all(&self) -> CoreResult<Vec<User>>;

    async fn get_by_id(&self, id: DbId) -> CoreResult<Option<User>>;

    /// Look up a user by a single column, e.g. `("username", "jdoe")`.
    async fn get_by_unique_key(&self, key: &str, value: &str) -> CoreResult<Option<User>>;

    /// Insert a user whose password is already hashed. Returns the stored row.
    async fn save(&self, user: &User) -> CoreResult<User>;

    /// Replace every column of the user with the given id.
    ///
    /// An empty `password` keeps the stored hash. Returns `false` when no row
    /// was updated.
    async fn update(&self, user: &User) -> CoreResult<bool>;

    async fn delete_by_id(&self, id: DbId) -> CoreResult<bool>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReimbursementRepository: Send + Sync {
    async fn get_all(&self) -> CoreResult<Vec<Reimbursement>>;

    async fn get_by_id(&self, id: DbId) -> CoreResult<Option<Reimbursement>>;

    async fn get_by_unique_key(&self, key: &str, value: &str)
        -> CoreResult<Option<Reimbursement>>;

    /// All reimbursements authored by the user with the given id.
    async fn get_by_author_id(&self, user_id: DbId) -> CoreResult<Vec<Reimbursement>>;

    /// Reimbursements matching every supplied constraint.
    async fn filter(
        &self,
        status: Option<ReimbStatus>,
        reimb_type: Option<String>,
    ) -> CoreResult<Vec<Reimbursement>>;

    async fn save(&self, reimb: &Reimbursement) -> CoreResult<Reimbursement>;

    async fn update(&self, reimb: &Reimbursement) -> CoreResult<bool>;

    async fn delete_by_id(&self, id: DbId) -> CoreResult<bool>;
}
