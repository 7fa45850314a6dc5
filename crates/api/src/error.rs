use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ers_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `ers_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    fn into_core(self) -> CoreError {
        match self {
            AppError::Core(core) => core,
            AppError::BadRequest(msg) => CoreError::BadRequest(msg),
            AppError::InternalError(msg) => CoreError::Internal(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let core = self.into_core();
        let status = StatusCode::from_u16(core.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = match &core {
            // Internal details stay in the logs.
            CoreError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                "An internal error occurred".to_string()
            }
            CoreError::BadRequest(msg)
            | CoreError::Authentication(msg)
            | CoreError::Authorization(msg)
            | CoreError::ResourceNotFound(msg)
            | CoreError::ResourcePersistence(msg)
            | CoreError::NotImplemented(msg) => msg.clone(),
        };

        let body = json!({
            "error": message,
            "code": core.code(),
        });

        (status, axum::Json(body)).into_response()
    }
}
