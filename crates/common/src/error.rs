//! Common error types shared across crates.

use thiserror::Error;

/// Top-level service error type.
///
/// Variants map to HTTP status codes returned to callers:
/// - [`ServiceError::BadRequest`] → 400
/// - [`ServiceError::InvalidValue`] → 422
/// - [`ServiceError::EncryptionFailure`] → 500
/// - [`ServiceError::Internal`] → 500
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request was malformed.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// An encrypted value could not be used.
    ///
    /// Deliberately carries no detail: tampered, corrupted, and expired
    /// values all look the same to the caller.
    #[error("value is invalid or expired")]
    InvalidValue,

    /// Encryption failed due to a crypto-layer error.
    #[error("encryption failure: {0}")]
    EncryptionFailure(String),

    /// An unexpected internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::BadRequest(_) => 400,
            ServiceError::InvalidValue => 422,
            ServiceError::EncryptionFailure(_) => 500,
            ServiceError::Internal(_) => 500,
        }
    }

    /// Short machine-readable code used in [`ErrorResponse`](crate::protocol::ErrorResponse).
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::BadRequest(_) => "bad_request",
            ServiceError::InvalidValue => "invalid_value",
            ServiceError::EncryptionFailure(_) => "encryption_failure",
            ServiceError::Internal(_) => "internal_error",
        }
    }
}
