//! Row type for the `users` table joined with `roles`.

use ers_core::types::DbId;
use sqlx::FromRow;

/// A user row with its role resolved to a name.
///
/// Contains the password hash; convert through [`crate::mapper`] and let the
/// service scrub it before anything leaves the domain layer.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role_name: String,
}
