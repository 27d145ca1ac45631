//! Domain-specific error types and error handling.

use qp_shared::types::response::ApiResponse;
use thiserror::Error;

/// Authentication failures surfaced to the caller
///
/// Every variant converts to a structured failure result at the operation
/// boundary; none of them is raised as an uncaught fault.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid phone format: {phone}")]
    InvalidPhoneFormat { phone: String },

    /// Covers both "no code on file" and "wrong code" so a caller cannot
    /// probe whether a code was ever issued for a phone number.
    #[error("Invalid verification code")]
    CodeMismatch,
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The TTL store could not serve the request; propagated, never retried
    #[error("Store unavailable: {message}")]
    Store { message: String },

    /// The user repository could not serve the request; propagated
    #[error("Repository error: {message}")]
    Repository { message: String },

    #[error("Duplicate resource: {resource}")]
    Duplicate { resource: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Convert into the boundary response shape, discarding any payload type
    pub fn into_response<T>(self) -> ApiResponse<T> {
        ApiResponse::fail(self.to_string())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
