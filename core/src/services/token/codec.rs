//! Stateless JWT signing and verification.

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, JWT_AUDIENCE, JWT_ISSUER};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Signs and verifies bearer tokens
///
/// Pure computation: no storage access, no side effects. The symmetric
/// secret comes from [`TokenServiceConfig`], loaded once at startup;
/// rotating the secret invalidates every outstanding token.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl: Duration,
}

impl TokenCodec {
    /// Creates a new codec from the token service configuration
    pub fn new(config: &TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            encoding_key,
            decoding_key,
            validation,
            access_ttl: Duration::minutes(config.access_token_expiry_minutes),
        }
    }

    /// Signs a claim set into a compact JWT
    pub fn sign(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Signs a short-lived access token carrying the user's id and role
    pub fn sign_access_token(&self, user_id: Uuid, role: &str) -> Result<String, DomainError> {
        let claims = Claims::with_ttl(user_id, role, self.access_ttl);
        self.sign(&claims)
    }

    /// Verifies a token's signature and temporal claims, returning the claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError)` - Signature invalid, token expired, or malformed
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        DomainError::Token(TokenError::TokenExpired)
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        DomainError::Token(TokenError::InvalidSignature)
                    }
                    _ => DomainError::Token(TokenError::MalformedToken),
                }
            })?;

        Ok(token_data.claims)
    }
}
