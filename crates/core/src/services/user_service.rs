//! User lookups, registration, updates and credential checks.

use std::sync::Arc;

use serde_json::Value;
use validator::ValidateEmail;

use crate::error::{CoreError, CoreResult};
use crate::models::User;
use crate::password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LENGTH,
};
use crate::repository::UserRepository;
use crate::roles;
use crate::services::{lookup_value, single_entry, KeyQuery};
use crate::validator::{
    is_property_of, is_valid_id, is_valid_object, is_valid_strings, IdCandidate,
};

/// Deliberately vague so a failed login does not reveal which part was wrong.
const BAD_CREDENTIALS: &str = "Invalid username or password";

pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_users(&self) -> CoreResult<Vec<User>> {
        let users = self.repo.get_all().await?;
        if users.is_empty() {
            return Err(CoreError::not_found("No users found"));
        }
        Ok(users.into_iter().map(User::scrubbed).collect())
    }

    pub async fn get_user_by_id<I>(&self, id: &I) -> CoreResult<User>
    where
        I: IdCandidate + ?Sized + Sync,
    {
        let id = id
            .to_db_id()
            .ok_or_else(|| CoreError::bad_request("Invalid user id"))?;

        self.repo
            .get_by_id(id)
            .await?
            .map(User::scrubbed)
            .ok_or_else(|| CoreError::not_found(format!("No user found with id {id}")))
    }

    pub async fn get_user_by_unique_key(&self, query: &KeyQuery) -> CoreResult<User> {
        let (key, value) = single_entry(query)?;

        if !is_property_of::<User>(key) || key == "password" {
            return Err(CoreError::bad_request(format!(
                "'{key}' is not a searchable user field"
            )));
        }
        if key == "id" {
            return self.get_user_by_id(value).await;
        }

        let value = lookup_value(value)?;
        self.repo
            .get_by_unique_key(key, value)
            .await?
            .map(User::scrubbed)
            .ok_or_else(|| CoreError::not_found(format!("No user found with {key} {value}")))
    }

    /// Verify credentials and return the matching (scrubbed) user.
    pub async fn authenticate_user(&self, username: &str, password: &str) -> CoreResult<User> {
        if !is_valid_strings(&[username, password]) {
            return Err(CoreError::bad_request("Username and password are required"));
        }

        let Some(user) = self.repo.get_by_unique_key("username", username).await? else {
            tracing::debug!(username, "Login attempt for unknown user");
            return Err(CoreError::Authentication(BAD_CREDENTIALS.into()));
        };

        let verified = verify_password(password, &user.password).map_err(|e| {
            tracing::error!(user_id = user.id, error = %e, "Stored password hash is unreadable");
            CoreError::Internal("Failed to verify credentials".into())
        })?;

        if !verified {
            tracing::debug!(user_id = user.id, "Login attempt with wrong password");
            return Err(CoreError::Authentication(BAD_CREDENTIALS.into()));
        }

        Ok(user.scrubbed())
    }

    pub async fn add_new_user(&self, mut user: User) -> CoreResult<User> {
        if !is_valid_object(&user, &["id"]) {
            return Err(CoreError::bad_request("User is missing required fields"));
        }
        validate_profile(&user)?;
        validate_password_strength(&user.password, MIN_PASSWORD_LENGTH)
            .map_err(CoreError::BadRequest)?;

        if !self.is_username_available(&user.username).await {
            return Err(CoreError::ResourcePersistence(
                "Username is already taken".into(),
            ));
        }
        if !self.is_email_available(&user.email).await {
            return Err(CoreError::ResourcePersistence(
                "Email is already registered".into(),
            ));
        }

        user.password = hash_password(&user.password)
            .map_err(|e| CoreError::Internal(format!("Password hashing failed: {e}")))?;

        let saved = self.repo.save(&user).await?;
        tracing::info!(user_id = saved.id, username = %saved.username, "User registered");
        Ok(saved.scrubbed())
    }

    /// Replace a user's profile. An empty password keeps the current one.
    pub async fn update_user(&self, mut user: User) -> CoreResult<User> {
        if !is_valid_id(&user.id) {
            return Err(CoreError::bad_request("Invalid user id"));
        }
        if !is_valid_object(&user, &["password"]) {
            return Err(CoreError::bad_request("User is missing required fields"));
        }
        validate_profile(&user)?;

        if !user.password.is_empty() {
            validate_password_strength(&user.password, MIN_PASSWORD_LENGTH)
                .map_err(CoreError::BadRequest)?;
            user.password = hash_password(&user.password)
                .map_err(|e| CoreError::Internal(format!("Password hashing failed: {e}")))?;
        }

        if !self.repo.update(&user).await? {
            return Err(CoreError::not_found(format!(
                "No user found with id {}",
                user.id
            )));
        }
        tracing::info!(user_id = user.id, "User updated");
        Ok(user.scrubbed())
    }

    pub async fn delete_by_id<I>(&self, _id: &I) -> CoreResult<bool>
    where
        I: IdCandidate + ?Sized + Sync,
    {
        Err(CoreError::NotImplemented(
            "Deleting users is not supported".into(),
        ))
    }

    /// Lookup failures count as available; the unique constraint still guards
    /// the insert.
    async fn is_username_available(&self, username: &str) -> bool {
        self.is_available("username", username).await
    }

    async fn is_email_available(&self, email: &str) -> bool {
        self.is_available("email", email).await
    }

    async fn is_available(&self, key: &str, value: &str) -> bool {
        let mut query = KeyQuery::new();
        query.insert(key.to_string(), Value::String(value.to_string()));
        match self.get_user_by_unique_key(&query).await {
            Ok(_) => false,
            Err(e) => {
                tracing::debug!(key, error = %e, "Treating lookup failure as available");
                true
            }
        }
    }
}

fn validate_profile(user: &User) -> CoreResult<()> {
    if !user.email.validate_email() {
        return Err(CoreError::bad_request(format!(
            "'{}' is not a valid email address",
            user.email
        )));
    }
    if !roles::is_known_role(&user.role) {
        return Err(CoreError::bad_request(format!(
            "Unknown role '{}'. Must be one of: {}",
            user.role,
            roles::VALID_ROLES.join(", ")
        )));
    }
    Ok(())
}
