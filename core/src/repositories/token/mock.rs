//! Mock implementation of TokenRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

use super::r#trait::TokenRepository;

/// Mock token repository for testing
///
/// The map's write lock makes `consume_refresh_token` a true compare-and-set:
/// only one caller at a time can observe and flip `is_revoked`.
pub struct MockTokenRepository {
    tokens: Arc<RwLock<HashMap<String, RefreshToken>>>,
    /// When set, every operation fails with a storage error
    fail_storage: Arc<RwLock<bool>>,
}

impl MockTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
            fail_storage: Arc::new(RwLock::new(false)),
        }
    }

    /// Make subsequent operations fail with `DomainError::Storage`
    pub async fn set_fail_storage(&self, fail: bool) {
        *self.fail_storage.write().await = fail;
    }

    /// Number of records currently held, regardless of state
    pub async fn record_count(&self) -> usize {
        self.tokens.read().await.len()
    }

    async fn check_storage(&self) -> Result<(), DomainError> {
        if *self.fail_storage.read().await {
            return Err(DomainError::Storage {
                message: "simulated storage outage".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        self.check_storage().await?;
        let mut tokens = self.tokens.write().await;

        if tokens.contains_key(&token.token_hash) {
            return Err(DomainError::Validation {
                message: "Token already exists".to_string(),
            });
        }

        tokens.insert(token.token_hash.clone(), token.clone());
        Ok(token)
    }

    async fn find_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError> {
        self.check_storage().await?;
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token_hash).cloned())
    }

    async fn consume_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError> {
        self.check_storage().await?;
        let mut tokens = self.tokens.write().await;

        match tokens.get_mut(token_hash) {
            Some(token) => {
                let previous = token.clone();
                token.revoke();
                Ok(Some(previous))
            }
            None => Ok(None),
        }
    }

    async fn revoke_token(&self, token_hash: &str) -> Result<bool, DomainError> {
        self.check_storage().await?;
        let mut tokens = self.tokens.write().await;

        if let Some(token) = tokens.get_mut(token_hash) {
            token.revoke();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn revoke_all_user_tokens(&self, user_id: Uuid) -> Result<usize, DomainError> {
        self.check_storage().await?;
        let mut tokens = self.tokens.write().await;
        let mut count = 0;

        for token in tokens.values_mut() {
            if token.user_id == user_id && !token.is_revoked {
                token.revoke();
                count += 1;
            }
        }

        Ok(count)
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<RefreshToken>, DomainError> {
        self.check_storage().await?;
        let tokens = self.tokens.read().await;
        Ok(tokens
            .values()
            .filter(|t| t.user_id == user_id && t.is_valid())
            .cloned()
            .collect())
    }

    async fn purge_expired_or_revoked(&self) -> Result<usize, DomainError> {
        self.check_storage().await?;
        let mut tokens = self.tokens.write().await;
        let initial_count = tokens.len();

        tokens.retain(|_, token| !token.is_revoked && !token.is_expired());

        Ok(initial_count - tokens.len())
    }
}
