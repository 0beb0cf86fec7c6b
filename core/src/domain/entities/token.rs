//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access token expiration time (15 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// JWT issuer
pub const JWT_ISSUER: &str = "homeshare";

/// JWT audience
pub const JWT_AUDIENCE: &str = "homeshare-api";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Role of the subject ("guest", "host", "admin")
    pub role: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,
}

impl Claims {
    /// Creates claims with an explicit time-to-live
    pub fn with_ttl(user_id: Uuid, role: &str, ttl: Duration) -> Self {
        let now = Utc::now();
        let expiry = now + ttl;

        Self {
            sub: user_id.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
        }
    }

    /// Creates new claims for an access token (15 minute lifetime)
    pub fn new_access_token(user_id: Uuid, role: &str) -> Self {
        Self::with_ttl(user_id, role, Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES))
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// Checks if the claims are valid (not expired and at or after nbf)
    pub fn is_valid(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.nbf && now < self.exp
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Refresh token record tracked by the ledger
///
/// The opaque value handed to the client is never stored; only its SHA-256
/// hash is. `is_revoked` transitions false to true exactly once and never
/// reverts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Unique identifier for the refresh token record
    pub id: Uuid,

    /// User ID this token belongs to
    pub user_id: Uuid,

    /// Hashed token value for security
    pub token_hash: String,

    /// Timestamp when the token was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Whether the token has been revoked
    pub is_revoked: bool,
}

impl RefreshToken {
    /// Creates a new refresh token record expiring in seven days
    pub fn new(user_id: Uuid, token_hash: String) -> Self {
        Self::with_validity_days(user_id, token_hash, REFRESH_TOKEN_EXPIRY_DAYS)
    }

    /// Creates a new refresh token record with an explicit validity window
    pub fn with_validity_days(user_id: Uuid, token_hash: String, days: i64) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            created_at: now,
            expires_at: now + Duration::days(days),
            is_revoked: false,
        }
    }

    /// Checks if the refresh token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Checks if the refresh token is valid
    ///
    /// A token is valid if it hasn't expired and hasn't been revoked
    pub fn is_valid(&self) -> bool {
        !self.is_expired() && !self.is_revoked
    }

    /// Revokes the refresh token
    pub fn revoke(&mut self) {
        self.is_revoked = true;
    }

    /// Gets the time remaining until expiration, or zero if expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// Opaque refresh token value
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair with the standard expiry times
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in: ACCESS_TOKEN_EXPIRY_MINUTES * 60,
            refresh_expires_in: REFRESH_TOKEN_EXPIRY_DAYS * 24 * 60 * 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new_access_token(user_id, "host");

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.role, "host");
        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.aud, JWT_AUDIENCE);
        assert!(claims.is_valid());
        assert!(!claims.is_expired());
        assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_EXPIRY_MINUTES * 60);
    }

    #[test]
    fn test_claims_user_id_parsing() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new_access_token(user_id, "guest");

        assert_eq!(claims.user_id().unwrap(), user_id);
    }

    #[test]
    fn test_claims_expiration() {
        let mut claims = Claims::new_access_token(Uuid::new_v4(), "guest");
        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
        assert!(!claims.is_valid());
    }

    #[test]
    fn test_claims_not_before() {
        let mut claims = Claims::new_access_token(Uuid::new_v4(), "guest");
        claims.nbf = Utc::now().timestamp() + 3600;

        assert!(!claims.is_valid());
    }

    #[test]
    fn test_refresh_token_creation() {
        let user_id = Uuid::new_v4();
        let token = RefreshToken::new(user_id, "hashed_token_value".to_string());

        assert_eq!(token.user_id, user_id);
        assert_eq!(token.token_hash, "hashed_token_value");
        assert!(!token.is_revoked);
        assert!(!token.is_expired());
        assert!(token.is_valid());
    }

    #[test]
    fn test_refresh_token_revocation() {
        let mut token = RefreshToken::new(Uuid::new_v4(), "hash".to_string());

        assert!(token.is_valid());
        token.revoke();
        assert!(token.is_revoked);
        assert!(!token.is_valid());
    }

    #[test]
    fn test_refresh_token_expiration() {
        let mut token = RefreshToken::new(Uuid::new_v4(), "hash".to_string());
        token.expires_at = Utc::now() - Duration::days(1);

        assert!(token.is_expired());
        assert!(!token.is_valid());
        assert_eq!(token.time_until_expiration(), Duration::zero());
    }

    #[test]
    fn test_refresh_token_time_until_expiration() {
        let token = RefreshToken::new(Uuid::new_v4(), "hash".to_string());

        let time_remaining = token.time_until_expiration();
        assert!(time_remaining <= Duration::days(REFRESH_TOKEN_EXPIRY_DAYS));
        assert!(time_remaining > Duration::days(REFRESH_TOKEN_EXPIRY_DAYS - 1));
    }

    #[test]
    fn test_token_pair_expiry_seconds() {
        let pair = TokenPair::new("access".to_string(), "refresh".to_string());

        assert_eq!(pair.access_expires_in, 15 * 60);
        assert_eq!(pair.refresh_expires_in, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_claims_serialization() {
        let claims = Claims::new_access_token(Uuid::new_v4(), "admin");

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }
}
