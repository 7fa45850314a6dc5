//! Repository for the `roles` table.

use ers_core::types::DbId;
use sqlx::PgPool;

use crate::models::role::Role;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Role lookups used when persisting users.
pub struct RoleRepo;

impl RoleRepo {
    /// Find a role by name (case-sensitive).
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE name = $1");
        sqlx::query_as::<_, Role>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a role name to its ID.
    pub async fn resolve_id(pool: &PgPool, name: &str) -> Result<Option<DbId>, sqlx::Error> {
        Ok(Self::find_by_name(pool, name).await?.map(|r| r.id))
    }
}
