//! Configuration for the authentication service

use crate::services::password::DEFAULT_BCRYPT_COST;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Whether to allow registration of new users
    pub allow_registration: bool,
    /// Bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            allow_registration: true,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}
