/// Domain error taxonomy shared by services, repositories and the HTTP layer.
///
/// Every variant carries a numeric status code and a stable machine-readable
/// code; the HTTP layer uses both directly when building error responses.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Authorization denied: {0}")]
    Authorization(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Resource persistence failed: {0}")]
    ResourcePersistence(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Numeric HTTP status associated with this error kind.
    pub fn status_code(&self) -> u16 {
        match self {
            CoreError::BadRequest(_) => 400,
            CoreError::Authentication(_) => 401,
            CoreError::Authorization(_) => 403,
            CoreError::ResourceNotFound(_) => 404,
            CoreError::ResourcePersistence(_) => 409,
            CoreError::Internal(_) => 500,
            CoreError::NotImplemented(_) => 501,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            CoreError::BadRequest(_) => "BAD_REQUEST",
            CoreError::Authentication(_) => "AUTHENTICATION_ERROR",
            CoreError::Authorization(_) => "AUTHORIZATION_ERROR",
            CoreError::ResourceNotFound(_) => "RESOURCE_NOT_FOUND",
            CoreError::ResourcePersistence(_) => "RESOURCE_PERSISTENCE",
            CoreError::Internal(_) => "INTERNAL_ERROR",
            CoreError::NotImplemented(_) => "NOT_IMPLEMENTED",
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        CoreError::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        CoreError::ResourceNotFound(msg.into())
    }
}
