//! Error types for the store
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Store Error Enum ==
/// Unified error type for store operations and command dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Key holds the other kind of value (string vs. list)
    #[error("WRONGTYPE Operation against a key holding the wrong kind of value")]
    TypeMismatch,

    /// Command name is not part of the supported set
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// Wrong number or type of arguments for a command
    #[error("wrong number or type of arguments for '{0}' command")]
    ArityError(String),

    /// Malformed request at the HTTP boundary
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl StoreError {
    /// HTTP status used when this error reaches a client.
    pub fn status_code(&self) -> StatusCode {
        match self {
            StoreError::TypeMismatch => StatusCode::CONFLICT,
            StoreError::UnknownCommand(_)
            | StoreError::ArityError(_)
            | StoreError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the store.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(StoreError::TypeMismatch.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            StoreError::UnknownCommand("FLUSHALL".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            StoreError::ArityError("SET".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::UnknownCommand("HSET".into()).to_string(),
            "unknown command 'HSET'"
        );
        assert!(StoreError::TypeMismatch.to_string().starts_with("WRONGTYPE"));
        assert!(StoreError::ArityError("GET".into())
            .to_string()
            .contains("'GET'"));
    }
}
