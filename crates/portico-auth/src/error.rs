use portico_core::AppError;
use thiserror::Error;

/// Why an `Authorization` header did not yield a user identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing authorization header")]
    MissingHeader,
    #[error("malformed authorization header")]
    MalformedHeader,
    #[error("invalid or expired token")]
    InvalidToken,
    #[error("token subject is not a user id")]
    InvalidSubject,
    #[error("failed to create token: {0}")]
    Encoding(String),
}

impl AuthError {
    /// Maps to `401` for rejected credentials and `500` for signing failures.
    ///
    /// `AppError`'s blanket `From` would turn every variant into a `500`.
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::Encoding(_) => AppError::internal(self),
            other => AppError::unauthorized(other.to_string()),
        }
    }
}
