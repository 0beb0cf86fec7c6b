//! Token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for RefreshToken ledger persistence operations
///
/// This trait defines the contract for the authoritative store of issued
/// refresh tokens. Implementations must enforce uniqueness of `token_hash`
/// and provide an atomic consume operation.
///
/// # Security Considerations
/// - Tokens are hashed before storage; the raw value never reaches the store
/// - `consume_refresh_token` is the single-use gate and must be atomic
/// - Expired and revoked records are periodically purged
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Save a new refresh token record
    ///
    /// # Arguments
    /// * `token` - The RefreshToken record to persist
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The saved record
    /// * `Err(DomainError::Validation)` - A record with the same hash exists
    /// * `Err(DomainError::Storage)` - Store unavailable (retryable)
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find a refresh token record by its hashed value
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Record found
    /// * `Ok(None)` - No record with the given hash
    async fn find_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError>;

    /// Atomically mark a record revoked and return its previous state
    ///
    /// Compare-and-set on `is_revoked`: the flag is set only if the record
    /// exists and is not yet revoked, and the record as it was before the
    /// update is returned. Concurrent callers presenting the same hash are
    /// serialized by the store; exactly one of them observes
    /// `is_revoked == false` in the returned record. Callers with different
    /// hashes never contend with each other.
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - The record before the update (check its
    ///   `is_revoked` and `expires_at` to decide validity)
    /// * `Ok(None)` - No record with the given hash
    async fn consume_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError>;

    /// Revoke a specific refresh token
    ///
    /// # Returns
    /// * `Ok(true)` - Record was revoked (or was already revoked)
    /// * `Ok(false)` - Record not found
    async fn revoke_token(&self, token_hash: &str) -> Result<bool, DomainError>;

    /// Revoke all refresh tokens for a user
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records newly revoked
    async fn revoke_all_user_tokens(&self, user_id: Uuid) -> Result<usize, DomainError>;

    /// Find all valid refresh tokens for a user
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<RefreshToken>, DomainError>;

    /// Delete every record that is revoked or already expired
    ///
    /// Called periodically by the cleanup task. Must never delete a record
    /// that is both unexpired and unrevoked.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records deleted
    async fn purge_expired_or_revoked(&self) -> Result<usize, DomainError>;

    /// Check if a token exists and is valid
    ///
    /// # Returns
    /// * `Ok(true)` - Record exists and is valid (not expired, not revoked)
    /// * `Ok(false)` - Record doesn't exist or is invalid
    async fn is_token_valid(&self, token_hash: &str) -> Result<bool, DomainError> {
        match self.find_refresh_token(token_hash).await? {
            Some(token) => Ok(token.is_valid()),
            None => Ok(false),
        }
    }

    /// Count active tokens for a user
    async fn count_user_tokens(&self, user_id: Uuid) -> Result<usize, DomainError> {
        let tokens = self.find_by_user_id(user_id).await?;
        Ok(tokens.len())
    }
}
