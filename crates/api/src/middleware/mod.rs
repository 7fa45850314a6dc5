//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the session principal from a JWT Bearer token.
//! - [`rbac::RequireManager`] -- Requires `manager` or `admin` role.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.

pub mod auth;
pub mod rbac;
