//! Repository for the `users` table.

use async_trait::async_trait;
use ers_core::error::{CoreError, CoreResult};
use ers_core::models::User;
use ers_core::repository::UserRepository;
use ers_core::types::DbId;
use sqlx::PgPool;

use crate::error::db_err;
use crate::mapper::map_user_row;
use crate::models::user::UserRow;
use crate::repositories::RoleRepo;

/// Users joined with their role name.
const BASE_QUERY: &str = "SELECT u.id, u.username, u.password_hash, u.first_name, u.last_name, \
                          u.email, r.name AS role_name \
                          FROM users u JOIN roles r ON r.id = u.role_id";

/// Column backing each lookup key. Keys outside this list are rejected
/// rather than interpolated into SQL.
fn lookup_column(key: &str) -> Option<&'static str> {
    match key {
        "username" => Some("u.username"),
        "email" => Some("u.email"),
        "first_name" => Some("u.first_name"),
        "last_name" => Some("u.last_name"),
        "role" => Some("r.name"),
        _ => None,
    }
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn role_id(&self, role: &str) -> CoreResult<DbId> {
        RoleRepo::resolve_id(&self.pool, role)
            .await
            .map_err(db_err("roles.resolve_id"))?
            .ok_or_else(|| CoreError::bad_request(format!("Unknown role '{role}'")))
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn get_all(&self) -> CoreResult<Vec<User>> {
        let query = format!("{BASE_QUERY} ORDER BY u.id ASC");
        let rows = sqlx::query_as::<_, UserRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("users.get_all"))?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get_by_id(&self, id: DbId) -> CoreResult<Option<User>> {
        let query = format!("{BASE_QUERY} WHERE u.id = $1");
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("users.get_by_id"))?;
        Ok(map_user_row(row))
    }

    async fn get_by_unique_key(&self, key: &str, value: &str) -> CoreResult<Option<User>> {
        let column = lookup_column(key)
            .ok_or_else(|| CoreError::bad_request(format!("Cannot look up users by '{key}'")))?;

        let query = format!("{BASE_QUERY} WHERE {column} = $1 ORDER BY u.id ASC LIMIT 1");
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("users.get_by_unique_key"))?;
        Ok(map_user_row(row))
    }

    async fn save(&self, user: &User) -> CoreResult<User> {
        let role_id = self.role_id(&user.role).await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO users (username, password_hash, first_name, last_name, email, role_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(role_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("users.save"))?;

        Ok(User { id, ..user.clone() })
    }

    async fn update(&self, user: &User) -> CoreResult<bool> {
        let role_id = self.role_id(&user.role).await?;

        let result = sqlx::query(
            "UPDATE users SET
                username = $2,
                password_hash = COALESCE(NULLIF($3, ''), password_hash),
                first_name = $4,
                last_name = $5,
                email = $6,
                role_id = $7,
                updated_at = now()
             WHERE id = $1",
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(role_id)
        .execute(&self.pool)
        .await
        .map_err(db_err("users.update"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: DbId) -> CoreResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err("users.delete_by_id"))?;
        Ok(result.rows_affected() > 0)
    }
}
