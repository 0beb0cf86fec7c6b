//! User repository trait defining the interface for user data persistence.
//!
//! This module defines the repository pattern interface for User entities.
//! The auth core treats the user store as an external collaborator: it reads
//! accounts and creates them on registration, but never mutates them.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database operations while maintaining
/// the abstraction boundary between domain and infrastructure layers.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their normalized (lowercase, trimmed) email
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given email
    /// * `Err(DomainError::Storage)` - Store unavailable (retryable)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Persist a newly registered user
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Validation)` - Email already taken (store-level
    ///   uniqueness constraint)
    async fn create(&self, user: User) -> Result<User, DomainError>;
}
