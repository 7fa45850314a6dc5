//! Reimbursement entity and filter parameters.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};
use crate::validator::Fields;

/// An expense reimbursement request.
///
/// `author` and `resolver` are usernames, not foreign keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reimbursement {
    pub id: DbId,
    pub amount: f64,
    pub submitted: Option<Timestamp>,
    pub resolved: Option<Timestamp>,
    pub description: String,
    /// Reference to an uploaded receipt.
    pub receipt: Option<String>,
    pub author: String,
    pub resolver: Option<String>,
    pub status: String,
    #[serde(alias = "type")]
    pub reimb_type: String,
}

impl Fields for Reimbursement {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "amount",
        "submitted",
        "resolved",
        "description",
        "receipt",
        "author",
        "resolver",
        "status",
        "reimb_type",
    ];
}

/// Optional status and type constraints for listing reimbursements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReimbFilter {
    pub status: Option<String>,
    #[serde(rename = "type", alias = "reimb_type")]
    pub reimb_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_alias_accepted() {
        let reimb: Reimbursement =
            serde_json::from_str(r#"{"amount": 12.5, "type": "travel"}"#).unwrap();
        assert_eq!(reimb.reimb_type, "travel");
        assert_eq!(reimb.amount, 12.5);
        assert!(reimb.submitted.is_none());
    }

    #[test]
    fn test_filter_deserializes_type_key() {
        let filter: ReimbFilter =
            serde_json::from_str(r#"{"status": "pending", "type": "lodging"}"#).unwrap();
        assert_eq!(filter.status.as_deref(), Some("pending"));
        assert_eq!(filter.reimb_type.as_deref(), Some("lodging"));
    }
}
