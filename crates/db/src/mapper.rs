//! Conversion from persistence rows to domain entities.
//!
//! Mapping is total: an absent row maps to an absent entity.

use ers_core::models::{Reimbursement, User};

use crate::models::reimbursement::ReimbursementRow;
use crate::models::user::UserRow;

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            password: row.password_hash,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            role: row.role_name,
        }
    }
}

impl From<ReimbursementRow> for Reimbursement {
    fn from(row: ReimbursementRow) -> Self {
        Self {
            id: row.id,
            amount: row.amount,
            submitted: Some(row.submitted),
            resolved: row.resolved,
            description: row.description,
            receipt: row.receipt,
            author: row.author,
            resolver: row.resolver,
            status: row.status_name,
            reimb_type: row.reimb_type,
        }
    }
}

pub fn map_user_row(row: Option<UserRow>) -> Option<User> {
    row.map(User::from)
}

pub fn map_reimbursement_row(row: Option<ReimbursementRow>) -> Option<Reimbursement> {
    row.map(Reimbursement::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use ers_core::validator::is_empty_object;

    fn user_row() -> UserRow {
        UserRow {
            id: 1,
            username: "aanderson".into(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$salt$hash".into(),
            first_name: "Alice".into(),
            last_name: "Anderson".into(),
            email: "aanderson@revature.com".into(),
            role_name: "admin".into(),
        }
    }

    fn reimbursement_row() -> ReimbursementRow {
        ReimbursementRow {
            id: 7,
            amount: 315.25,
            submitted: Utc.with_ymd_and_hms(2026, 3, 2, 9, 30, 0).unwrap(),
            resolved: Some(Utc.with_ymd_and_hms(2026, 3, 4, 16, 0, 0).unwrap()),
            description: "Conference hotel".into(),
            receipt: Some("receipts/7.png".into()),
            author: "aanderson".into(),
            resolver: Some("bbailey".into()),
            status_name: "approved".into(),
            reimb_type: "lodging".into(),
        }
    }

    #[test]
    fn test_user_row_maps_every_field() {
        let row = user_row();
        let user = map_user_row(Some(row.clone())).unwrap();

        assert_eq!(user.id, row.id);
        assert_eq!(user.username, row.username);
        assert_eq!(user.password, row.password_hash);
        assert_eq!(user.first_name, row.first_name);
        assert_eq!(user.last_name, row.last_name);
        assert_eq!(user.email, row.email);
        assert_eq!(user.role, row.role_name);
    }

    #[test]
    fn test_reimbursement_row_maps_every_field() {
        let row = reimbursement_row();
        let reimb = map_reimbursement_row(Some(row.clone())).unwrap();

        assert_eq!(reimb.id, row.id);
        assert_eq!(reimb.amount, row.amount);
        assert_eq!(reimb.submitted, Some(row.submitted));
        assert_eq!(reimb.resolved, row.resolved);
        assert_eq!(reimb.description, row.description);
        assert_eq!(reimb.receipt, row.receipt);
        assert_eq!(reimb.author, row.author);
        assert_eq!(reimb.resolver, row.resolver);
        assert_eq!(reimb.status, row.status_name);
        assert_eq!(reimb.reimb_type, row.reimb_type);
    }

    #[test]
    fn test_absent_rows_map_to_empty() {
        let user = map_user_row(None);
        let reimb = map_reimbursement_row(None);

        assert!(user.is_none());
        assert!(is_empty_object(&user));
        assert!(is_empty_object(&reimb));
    }
}
