//! Repository for the `reimbursements` table.

use async_trait::async_trait;
use chrono::Utc;
use ers_core::error::{CoreError, CoreResult};
use ers_core::models::Reimbursement;
use ers_core::repository::ReimbursementRepository;
use ers_core::status::ReimbStatus;
use ers_core::types::{DbId, StatusId};
use sqlx::PgPool;

use crate::error::db_err;
use crate::mapper::map_reimbursement_row;
use crate::models::reimbursement::ReimbursementRow;

/// Reimbursements joined with their status name.
const BASE_QUERY: &str = "SELECT re.id, re.amount, re.submitted, re.resolved, re.description, \
                          re.receipt, re.author, re.resolver, rs.name AS status_name, re.reimb_type \
                          FROM reimbursements re \
                          JOIN reimbursement_statuses rs ON rs.id = re.status_id";

fn lookup_column(key: &str) -> Option<&'static str> {
    match key {
        "description" => Some("re.description"),
        "receipt" => Some("re.receipt"),
        "author" => Some("re.author"),
        "resolver" => Some("re.resolver"),
        "status" => Some("rs.name"),
        "reimb_type" => Some("re.reimb_type"),
        _ => None,
    }
}

fn status_id(reimb: &Reimbursement) -> CoreResult<StatusId> {
    reimb
        .status
        .parse::<ReimbStatus>()
        .map(ReimbStatus::id)
        .map_err(CoreError::BadRequest)
}

pub struct PgReimbursementRepository {
    pool: PgPool,
}

impl PgReimbursementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_many(
        &self,
        operation: &'static str,
        query: &str,
    ) -> CoreResult<Vec<Reimbursement>> {
        let rows = sqlx::query_as::<_, ReimbursementRow>(query)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err(operation))?;
        Ok(rows.into_iter().map(Reimbursement::from).collect())
    }
}

#[async_trait]
impl ReimbursementRepository for PgReimbursementRepository {
    async fn get_all(&self) -> CoreResult<Vec<Reimbursement>> {
        let query = format!("{BASE_QUERY} ORDER BY re.id ASC");
        self.fetch_many("reimbursements.get_all", &query).await
    }

    async fn get_by_id(&self, id: DbId) -> CoreResult<Option<Reimbursement>> {
        let query = format!("{BASE_QUERY} WHERE re.id = $1");
        let row = sqlx::query_as::<_, ReimbursementRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("reimbursements.get_by_id"))?;
        Ok(map_reimbursement_row(row))
    }

    async fn get_by_unique_key(
        &self,
        key: &str,
        value: &str,
    ) -> CoreResult<Option<Reimbursement>> {
        let column = lookup_column(key).ok_or_else(|| {
            CoreError::bad_request(format!("Cannot look up reimbursements by '{key}'"))
        })?;

        let query = format!("{BASE_QUERY} WHERE {column} = $1 ORDER BY re.id ASC LIMIT 1");
        let row = sqlx::query_as::<_, ReimbursementRow>(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("reimbursements.get_by_unique_key"))?;
        Ok(map_reimbursement_row(row))
    }

    async fn get_by_author_id(&self, user_id: DbId) -> CoreResult<Vec<Reimbursement>> {
        let query = format!(
            "{BASE_QUERY} WHERE re.author = (SELECT username FROM users WHERE id = $1)
             ORDER BY re.submitted DESC"
        );
        let rows = sqlx::query_as::<_, ReimbursementRow>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("reimbursements.get_by_author_id"))?;
        Ok(rows.into_iter().map(Reimbursement::from).collect())
    }

    async fn filter(
        &self,
        status: Option<ReimbStatus>,
        reimb_type: Option<String>,
    ) -> CoreResult<Vec<Reimbursement>> {
        let query = format!(
            "{BASE_QUERY}
             WHERE ($1::SMALLINT IS NULL OR re.status_id = $1)
               AND ($2::TEXT IS NULL OR re.reimb_type = $2)
             ORDER BY re.submitted DESC"
        );
        let rows = sqlx::query_as::<_, ReimbursementRow>(&query)
            .bind(status.map(ReimbStatus::id))
            .bind(reimb_type)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("reimbursements.filter"))?;
        Ok(rows.into_iter().map(Reimbursement::from).collect())
    }

    async fn save(&self, reimb: &Reimbursement) -> CoreResult<Reimbursement> {
        let status_id = status_id(reimb)?;
        let submitted = reimb.submitted.unwrap_or_else(Utc::now);

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO reimbursements
                (amount, submitted, resolved, description, receipt, author, resolver, status_id, reimb_type)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id",
        )
        .bind(reimb.amount)
        .bind(submitted)
        .bind(reimb.resolved)
        .bind(&reimb.description)
        .bind(&reimb.receipt)
        .bind(&reimb.author)
        .bind(&reimb.resolver)
        .bind(status_id)
        .bind(&reimb.reimb_type)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("reimbursements.save"))?;

        Ok(Reimbursement {
            id,
            submitted: Some(submitted),
            ..reimb.clone()
        })
    }

    async fn update(&self, reimb: &Reimbursement) -> CoreResult<bool> {
        let status_id = status_id(reimb)?;

        let result = sqlx::query(
            "UPDATE reimbursements SET
                amount = $2,
                resolved = $3,
                description = $4,
                receipt = $5,
                resolver = $6,
                status_id = $7,
                reimb_type = $8,
                updated_at = now()
             WHERE id = $1",
        )
        .bind(reimb.id)
        .bind(reimb.amount)
        .bind(reimb.resolved)
        .bind(&reimb.description)
        .bind(&reimb.receipt)
        .bind(&reimb.resolver)
        .bind(status_id)
        .bind(&reimb.reimb_type)
        .execute(&self.pool)
        .await
        .map_err(db_err("reimbursements.update"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: DbId) -> CoreResult<bool> {
        let result = sqlx::query("DELETE FROM reimbursements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err("reimbursements.delete_by_id"))?;
        Ok(result.rows_affected() > 0)
    }
}
