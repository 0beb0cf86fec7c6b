//! Main authentication service implementation

use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::{normalize_email, User, UserRole};
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::password::PasswordVerifier;
use crate::services::token::{RefreshTokenLedger, TokenCodec};

use super::config::AuthServiceConfig;

/// Registration request fields
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    /// Defaults to guest when absent
    pub role: Option<UserRole>,
}

/// Authentication service for managing the complete credential flow
///
/// The only component with cross-cutting knowledge of the user store, the
/// password verifier, the token codec, and the refresh token ledger. Per
/// credential session the states are: unauthenticated, authenticated with a
/// token pair (looping through refresh), and revoked by logout or expiry.
/// There is no way back from revoked except a fresh login.
pub struct AuthService<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    /// User repository for account lookups and registration
    user_repository: Arc<U>,
    /// Ledger of issued refresh tokens
    ledger: Arc<RefreshTokenLedger<T>>,
    /// Stateless JWT signer/verifier
    codec: Arc<TokenCodec>,
    /// Password hashing and verification
    password: PasswordVerifier,
    /// Hash verified when the email is unknown, so both invalid-credential
    /// paths cost roughly one bcrypt verification
    dummy_hash: String,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, T> AuthService<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `ledger` - Refresh token ledger
    /// * `codec` - JWT codec for access tokens
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        ledger: Arc<RefreshTokenLedger<T>>,
        codec: Arc<TokenCodec>,
        config: AuthServiceConfig,
    ) -> DomainResult<Self> {
        let password = PasswordVerifier::with_cost(config.bcrypt_cost);
        let dummy_hash = password.hash("dummy-password-for-timing")?;

        Ok(Self {
            user_repository,
            ledger,
            codec,
            password,
            dummy_hash,
            config,
        })
    }

    /// Register a new user account
    ///
    /// Fails with a single generic conflict error when the email is already
    /// taken; the caller learns nothing about which field collided.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Sanitized profile plus an initial token pair
    /// * `Err(AuthError::EmailAlreadyRegistered)` - Conflict
    pub async fn register(&self, request: RegisterRequest) -> DomainResult<AuthResponse> {
        if !self.config.allow_registration {
            return Err(DomainError::Auth(AuthError::RegistrationDisabled));
        }

        let email = normalize_email(&request.email);

        if self.user_repository.find_by_email(&email).await?.is_some() {
            return Err(DomainError::Auth(AuthError::EmailAlreadyRegistered));
        }

        let password_hash = self.password.hash(&request.password)?;
        let user = User::new(
            email,
            password_hash,
            request.first_name,
            request.last_name,
            request.role,
        );

        let user = match self.user_repository.create(user).await {
            Ok(user) => user,
            // Lost a race against a concurrent registration for the same
            // email; surface the same generic conflict.
            Err(DomainError::Validation { .. }) => {
                return Err(DomainError::Auth(AuthError::EmailAlreadyRegistered));
            }
            Err(e) => return Err(e),
        };

        info!(user_id = %user.id, "user registered");

        let token_pair = self.issue_token_pair(&user).await?;
        Ok(AuthResponse::from_token_pair(token_pair, &user))
    }

    /// Authenticate a user by email and password
    ///
    /// An unknown email and a wrong password produce the same
    /// `InvalidCredentials` error so accounts cannot be enumerated. A
    /// deactivated account is reported as such only after the credential
    /// check succeeds: a caller who knows the correct password has already
    /// confirmed the account exists.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let email = normalize_email(email);

        let user = match self.user_repository.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                // Burn a comparable amount of time before rejecting.
                let _ = self.password.verify(password, &self.dummy_hash);
                return Err(DomainError::Auth(AuthError::InvalidCredentials));
            }
        };

        if !self.password.verify(password, &user.password_hash)? {
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        if !user.is_active {
            return Err(DomainError::Auth(AuthError::AccountDeactivated));
        }

        info!(user_id = %user.id, "user logged in");

        let token_pair = self.issue_token_pair(&user).await?;
        Ok(AuthResponse::from_token_pair(token_pair, &user))
    }

    /// Exchange a refresh token for a fresh token pair
    ///
    /// The presented token is consumed: it can never be used again, even if
    /// this call fails later (rotation is what invalidates a stolen token
    /// the moment the legitimate client refreshes first). The specific
    /// ledger failure is logged here but callers only ever see the generic
    /// `InvalidRefreshToken`.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        let record = match self.ledger.validate_and_consume(refresh_token).await {
            Ok(record) => record,
            Err(DomainError::Token(cause)) => {
                debug!(%cause, "refresh token rejected");
                return Err(DomainError::Auth(AuthError::InvalidRefreshToken));
            }
            Err(e) => return Err(e),
        };

        let user = match self.user_repository.find_by_id(record.user_id).await? {
            Some(user) if user.is_active => user,
            Some(_) => {
                debug!(user_id = %record.user_id, "refresh rejected: account deactivated");
                return Err(DomainError::Auth(AuthError::InvalidRefreshToken));
            }
            None => {
                debug!(user_id = %record.user_id, "refresh rejected: account gone");
                return Err(DomainError::Auth(AuthError::InvalidRefreshToken));
            }
        };

        self.issue_token_pair(&user).await
    }

    /// Log out a session by revoking its refresh token
    ///
    /// Always succeeds from the caller's perspective: an unknown or
    /// already-revoked token is a no-op.
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<()> {
        self.ledger.revoke(refresh_token).await
    }

    /// Log a user out of every session
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of sessions revoked
    pub async fn logout_all(&self, user_id: Uuid) -> DomainResult<usize> {
        self.ledger.revoke_all_for_user(user_id).await
    }

    /// Issues an access + refresh pair for a user
    ///
    /// Access token: 15-minute JWT carrying `{sub: id, role}`. Refresh
    /// token: 7-day opaque value recorded in the ledger.
    async fn issue_token_pair(&self, user: &User) -> DomainResult<TokenPair> {
        let access_token = self.codec.sign_access_token(user.id, user.role.as_str())?;
        let (refresh_value, _record) = self.ledger.issue(user.id).await?;

        Ok(TokenPair::new(access_token, refresh_value))
    }
}
