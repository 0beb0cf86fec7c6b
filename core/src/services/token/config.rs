//! Configuration for the token services

use hs_shared::config::AuthConfig;

use crate::domain::entities::token::{ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS};

/// Configuration shared by the token codec and the refresh token ledger
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Symmetric JWT signing secret, loaded once at startup
    pub jwt_secret: String,
    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
    /// Refresh token expiry in days
    pub refresh_token_expiry_days: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            access_token_expiry_minutes: ACCESS_TOKEN_EXPIRY_MINUTES,
            refresh_token_expiry_days: REFRESH_TOKEN_EXPIRY_DAYS,
        }
    }
}

impl TokenServiceConfig {
    /// Builds the service configuration from the application auth config
    pub fn from_auth_config(config: &AuthConfig) -> Self {
        Self {
            jwt_secret: config.jwt_secret().to_string(),
            access_token_expiry_minutes: config.access_token_expiry_seconds() / 60,
            refresh_token_expiry_days: config.refresh_token_expiry_seconds() / 86400,
        }
    }
}
