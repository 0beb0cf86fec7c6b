//! Business services containing domain logic and use cases.

pub mod auth;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, RegisterRequest};
pub use password::PasswordVerifier;
pub use token::{
    RefreshTokenLedger, TokenCleanupConfig, TokenCleanupService, TokenCodec, TokenServiceConfig,
};
