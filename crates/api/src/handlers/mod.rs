pub mod auth;
pub mod reimbursements;
pub mod users;

use ers_core::types::DbId;
use ers_core::validator::IdCandidate;

use crate::error::{AppError, AppResult};

/// Reconcile the id in a request path with the id in a full-replace body.
///
/// A body without an id takes the path's; a body with a different id is
/// rejected. An invalid path id passes through as `0` for the service to
/// reject.
fn reconcile_id(path_id: &str, body_id: DbId) -> AppResult<DbId> {
    let path_id = path_id.to_db_id().unwrap_or(0);
    match body_id {
        0 => Ok(path_id),
        id if id == path_id => Ok(id),
        _ => Err(AppError::BadRequest(
            "Path id does not match body id".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_reconcile_id() {
        assert_eq!(reconcile_id("4", 0).unwrap(), 4);
        assert_eq!(reconcile_id("4", 4).unwrap(), 4);
        assert_eq!(reconcile_id("abc", 0).unwrap(), 0);
        assert_matches!(reconcile_id("4", 5), Err(AppError::BadRequest(_)));
    }
}
