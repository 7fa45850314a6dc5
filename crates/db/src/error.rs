//! Translation of sqlx failures into domain errors.

use ers_core::error::CoreError;

/// Classify a sqlx error raised while performing `operation`.
///
/// Unique constraint violations on a `uq_` constraint become
/// [`CoreError::ResourcePersistence`]; everything else is logged with its
/// cause and surfaces as a sanitized [`CoreError::Internal`].
pub fn classify(operation: &'static str, err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        // PostgreSQL unique constraint violation: error code 23505
        if db_err.code().as_deref() == Some("23505") {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if constraint.starts_with("uq_") {
                tracing::debug!(operation, constraint, "Unique constraint violated");
                return CoreError::ResourcePersistence(format!(
                    "Duplicate value violates unique constraint: {constraint}"
                ));
            }
        }
    }

    tracing::error!(operation, error = %err, "Database error");
    CoreError::Internal(format!("Database operation failed: {operation}"))
}

/// Adapter for `map_err`: `.map_err(db_err("users.save"))`.
pub fn db_err(operation: &'static str) -> impl Fn(sqlx::Error) -> CoreError {
    move |err| classify(operation, err)
}
