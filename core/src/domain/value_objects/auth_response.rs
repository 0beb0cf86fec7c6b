//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::{User, UserRole};

/// User profile as exposed to clients
///
/// Carries everything the user entity holds except the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User identifier
    pub id: Uuid,

    /// Email address
    pub email: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Role of the user
    pub role: UserRole,

    /// Whether the account is active
    pub is_active: bool,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role,
            is_active: user.is_active,
        }
    }
}

/// Authentication response containing tokens and the sanitized user profile
///
/// Returned after successful registration or login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Sanitized user profile
    pub user: UserProfile,

    /// JWT access token for API authentication
    pub access_token: String,

    /// Opaque refresh token for obtaining new access tokens
    pub refresh_token: String,

    /// Access token expiration time in seconds
    pub expires_in: i64,
}

impl AuthResponse {
    /// Creates an authentication response from a token pair and user
    pub fn from_token_pair(token_pair: TokenPair, user: &User) -> Self {
        Self {
            user: UserProfile::from(user),
            access_token: token_pair.access_token,
            refresh_token: token_pair.refresh_token,
            expires_in: token_pair.access_expires_in,
        }
    }
}
