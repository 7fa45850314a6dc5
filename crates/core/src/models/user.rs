//! User entity.

use serde::{Deserialize, Serialize};

use crate::types::DbId;
use crate::validator::Fields;

/// A registered user of the system.
///
/// `password` holds plaintext on the way in and the Argon2id hash once
/// persisted; services scrub it before returning a user to a caller. Use the
/// API's response type for external output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Role name (e.g. `"manager"`), resolved to a role id on persistence.
    pub role: String,
}

impl User {
    /// Clear the password so it never leaves the service layer.
    pub fn scrubbed(mut self) -> Self {
        self.password.clear();
        self
    }
}

impl Fields for User {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "username",
        "password",
        "first_name",
        "last_name",
        "email",
        "role",
    ];
}

/// The authenticated identity carried by a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: DbId,
    pub username: String,
    pub role: String,
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role.clone(),
        }
    }
}
