//! The refresh token ledger: the authoritative record of every issued
//! refresh token and its revocation state.

use std::sync::Arc;

use rand::Rng;
use sha2::{Digest, Sha256};
use tracing::warn;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::{DomainError, TokenError};
use crate::repositories::TokenRepository;

use super::config::TokenServiceConfig;

/// Length of the opaque refresh token value handed to clients.
/// 32 characters over a 62-symbol alphabet is ~190 bits of entropy.
const TOKEN_VALUE_LEN: usize = 32;

/// Attempts before giving up when the store reports a duplicate value
const MAX_ISSUE_ATTEMPTS: usize = 3;

/// Ledger of issued refresh tokens
///
/// Enforces the rotation protocol: every token satisfies
/// [`validate_and_consume`](Self::validate_and_consume) at most once,
/// regardless of how many callers race on it. Validity is decided by the
/// ledger alone, never by a signature.
pub struct RefreshTokenLedger<R: TokenRepository> {
    repository: Arc<R>,
    validity_days: i64,
}

impl<R: TokenRepository> RefreshTokenLedger<R> {
    /// Creates a ledger backed by the given repository
    pub fn new(repository: Arc<R>, config: &TokenServiceConfig) -> Self {
        Self {
            repository,
            validity_days: config.refresh_token_expiry_days,
        }
    }

    /// Issues a new refresh token for a user
    ///
    /// Generates a cryptographically random opaque value, persists its
    /// hashed record, and returns the raw value together with the stored
    /// record. A store-level duplicate is retried with a fresh value; the
    /// odds of hitting one are negligible at this entropy, so repeated
    /// collisions indicate something is wrong and fail the operation.
    pub async fn issue(&self, user_id: Uuid) -> Result<(String, RefreshToken), DomainError> {
        for attempt in 0..MAX_ISSUE_ATTEMPTS {
            let value = generate_token_value();
            let record =
                RefreshToken::with_validity_days(user_id, hash_token(&value), self.validity_days);

            match self.repository.save_refresh_token(record).await {
                Ok(saved) => return Ok((value, saved)),
                Err(DomainError::Validation { .. }) => {
                    warn!(attempt, "refresh token value collision, regenerating");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        Err(DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Validates a presented refresh token and consumes it
    ///
    /// The single-use gate. The repository's compare-and-set marks the
    /// record revoked and hands back its previous state; exactly one of any
    /// number of concurrent callers sees `is_revoked == false`, every other
    /// one fails with `TokenRevoked`. Expiry is checked on the returned
    /// record; the CAS may have revoked an expired record, which is harmless
    /// since it was unusable and the sweeper deletes it on either condition.
    ///
    /// # Returns
    ///
    /// * `Ok(RefreshToken)` - The pre-revocation record (caller reads
    ///   `user_id` from it)
    /// * `Err(TokenError::TokenNotFound)` - No such token
    /// * `Err(TokenError::TokenRevoked)` - Already consumed or revoked
    /// * `Err(TokenError::TokenExpired)` - Past its expiry
    pub async fn validate_and_consume(&self, token: &str) -> Result<RefreshToken, DomainError> {
        let token_hash = hash_token(token);

        let previous = self
            .repository
            .consume_refresh_token(&token_hash)
            .await?
            .ok_or(DomainError::Token(TokenError::TokenNotFound))?;

        if previous.is_revoked {
            return Err(DomainError::Token(TokenError::TokenRevoked));
        }

        if previous.is_expired() {
            return Err(DomainError::Token(TokenError::TokenExpired));
        }

        Ok(previous)
    }

    /// Revokes a refresh token
    ///
    /// Idempotent: revoking an unknown or already-revoked token is a no-op,
    /// never an error. Logout must not fail because the token is gone.
    pub async fn revoke(&self, token: &str) -> Result<(), DomainError> {
        let token_hash = hash_token(token);
        let _ = self.repository.revoke_token(&token_hash).await?;
        Ok(())
    }

    /// Revokes every outstanding token for a user
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of tokens newly revoked
    pub async fn revoke_all_for_user(&self, user_id: Uuid) -> Result<usize, DomainError> {
        self.repository.revoke_all_user_tokens(user_id).await
    }

    /// Deletes every record that is revoked or expired
    ///
    /// Never removes a record that is both unexpired and unrevoked.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of records removed
    pub async fn purge_expired_or_revoked(&self) -> Result<usize, DomainError> {
        self.repository.purge_expired_or_revoked().await
    }
}

/// Hashes a token value for storage lookup
///
/// The ledger is keyed by SHA-256 of the opaque value, so a leaked ledger
/// dump contains no usable bearer values.
pub(crate) fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Generates a random alphanumeric token value
fn generate_token_value() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut rng = rand::thread_rng();

    (0..TOKEN_VALUE_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
