//! Well-known role name constants.
//!
//! These must match the seed data in `20261001000001_create_roles_table.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MANAGER: &str = "manager";
pub const ROLE_EMPLOYEE: &str = "employee";

pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_MANAGER, ROLE_EMPLOYEE];

pub fn is_known_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

/// Managers and admins may review, resolve and list reimbursements.
pub fn can_manage(role: &str) -> bool {
    role == ROLE_MANAGER || role == ROLE_ADMIN
}
