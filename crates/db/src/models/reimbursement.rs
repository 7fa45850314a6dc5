//! Row type for the `reimbursements` table joined with its status name.

use ers_core::types::{DbId, Timestamp};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ReimbursementRow {
    pub id: DbId,
    pub amount: f64,
    pub submitted: Timestamp,
    pub resolved: Option<Timestamp>,
    pub description: String,
    pub receipt: Option<String>,
    pub author: String,
    pub resolver: Option<String>,
    pub status_name: String,
    pub reimb_type: String,
}
