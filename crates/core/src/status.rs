//! Reimbursement status vocabulary and lifecycle transitions.
//!
//! Discriminants match the seed order (1-based) of the
//! `reimbursement_statuses` lookup table.

use std::fmt;
use std::str::FromStr;

use crate::types::StatusId;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_DENIED: &str = "denied";

/// Accepted on input and normalized to their canonical form.
const LEGACY_APPROVE: &str = "approve";
const LEGACY_DENY: &str = "deny";

pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_APPROVED, STATUS_DENIED];

#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReimbStatus {
    Pending = 1,
    Approved = 2,
    Denied = 3,
}

impl ReimbStatus {
    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReimbStatus::Pending => STATUS_PENDING,
            ReimbStatus::Approved => STATUS_APPROVED,
            ReimbStatus::Denied => STATUS_DENIED,
        }
    }

    /// A resolved reimbursement carries a resolver and a resolution time.
    pub fn is_resolved(self) -> bool {
        !matches!(self, ReimbStatus::Pending)
    }

    /// Pending reimbursements may be edited or resolved; resolved ones are final.
    pub fn can_transition_to(self, next: ReimbStatus) -> bool {
        matches!(self, ReimbStatus::Pending)
            && matches!(
                next,
                ReimbStatus::Pending | ReimbStatus::Approved | ReimbStatus::Denied
            )
    }
}

impl From<ReimbStatus> for StatusId {
    fn from(value: ReimbStatus) -> Self {
        value as StatusId
    }
}

impl fmt::Display for ReimbStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReimbStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_PENDING => Ok(ReimbStatus::Pending),
            STATUS_APPROVED | LEGACY_APPROVE => Ok(ReimbStatus::Approved),
            STATUS_DENIED | LEGACY_DENY => Ok(ReimbStatus::Denied),
            other => Err(format!(
                "Invalid status '{other}'. Must be one of: {}",
                VALID_STATUSES.join(", ")
            )),
        }
    }
}
