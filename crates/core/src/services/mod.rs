//! Business services over the repository ports.
//!
//! Services are built once at startup and shared behind `Arc`; they hold no
//! mutable state of their own.

pub mod reimbursement_service;
pub mod user_service;

pub use reimbursement_service::ReimbursementService;
pub use user_service::UserService;

use serde_json::{Map, Value};

use crate::error::{CoreError, CoreResult};

/// A single-field lookup such as `{"username": "jdoe"}`.
pub type KeyQuery = Map<String, Value>;

/// Extract the only entry of a single-key query.
fn single_entry(query: &KeyQuery) -> CoreResult<(&str, &Value)> {
    let mut entries = query.iter();
    match (entries.next(), entries.next()) {
        (Some((key, value)), None) => Ok((key.as_str(), value)),
        _ => Err(CoreError::bad_request(
            "Lookup requires exactly one key/value pair",
        )),
    }
}

/// The value of a non-id lookup, which must be a non-empty string.
fn lookup_value(value: &Value) -> CoreResult<&str> {
    value
        .as_str()
        .filter(|v| crate::validator::is_valid_strings(&[v]))
        .ok_or_else(|| CoreError::bad_request("Lookup value must be a non-empty string"))
}
