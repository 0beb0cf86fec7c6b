//! Domain-specific error types for authentication and token operations
//!
//! This module provides error type definitions for authentication and token
//! management. The actual error messages are rendered externally in the
//! presentation layer.

use hs_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Authentication-related errors
///
/// These are the errors the orchestration layer exposes to its caller.
/// Internal ledger failures are collapsed into `InvalidRefreshToken` before
/// they cross this boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Registration conflict. Deliberately generic: it does not say which
    /// field collided.
    #[error("Email already registered")]
    EmailAlreadyRegistered,

    /// Covers both "no such account" and "wrong password" so callers cannot
    /// enumerate accounts.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Only reachable after the credential check succeeded.
    #[error("Account is deactivated")]
    AccountDeactivated,

    /// Collapses not-found, expired, and revoked refresh tokens.
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("User not found")]
    UserNotFound,

    /// Self-service registration is switched off.
    #[error("Registration is currently disabled")]
    RegistrationDisabled,
}

/// Token-related errors
///
/// These describe the specific failure inside the codec or the ledger. They
/// feed logging at the orchestration boundary and never reach external
/// callers directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Token not found")]
    TokenNotFound,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl IntoErrorResponse for AuthError {
    fn to_error_response(&self) -> ErrorResponse {
        let code = match self {
            AuthError::EmailAlreadyRegistered => error_codes::EMAIL_ALREADY_REGISTERED,
            AuthError::InvalidCredentials => error_codes::INVALID_CREDENTIALS,
            AuthError::AccountDeactivated => error_codes::ACCOUNT_DEACTIVATED,
            AuthError::InvalidRefreshToken => error_codes::INVALID_REFRESH_TOKEN,
            AuthError::UserNotFound => error_codes::NOT_FOUND,
            AuthError::RegistrationDisabled => error_codes::FORBIDDEN,
        };
        ErrorResponse::new(code, self.to_string())
    }
}

impl IntoErrorResponse for TokenError {
    fn to_error_response(&self) -> ErrorResponse {
        let code = match self {
            TokenError::TokenExpired => error_codes::TOKEN_EXPIRED,
            TokenError::TokenRevoked
            | TokenError::TokenNotFound
            | TokenError::InvalidSignature
            | TokenError::MalformedToken => error_codes::TOKEN_INVALID,
            TokenError::TokenGenerationFailed => error_codes::INTERNAL_ERROR,
        };
        ErrorResponse::new(code, self.to_string())
    }
}
