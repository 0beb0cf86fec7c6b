//! Domain-specific error types and error handling.

mod types;

// Re-export all error types and utilities
pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Storage or I/O failure. Safe to retry: `issue` creates a fresh token
    /// with no relation to the failed attempt, and `validate_and_consume`
    /// still succeeds at most once.
    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Whether the caller may safely retry the failed operation.
    pub fn is_transient(&self) -> bool {
        matches!(self, DomainError::Storage { .. })
    }
}
