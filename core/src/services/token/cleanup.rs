//! Periodic cleanup of retired refresh token records.
//!
//! The ledger only ever needs records that are still usable; everything
//! revoked or expired is dead weight. This task deletes them on a fixed
//! schedule so ledger growth stays bounded.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::errors::DomainError;
use crate::repositories::TokenRepository;

/// Configuration for the token cleanup task
#[derive(Debug, Clone)]
pub struct TokenCleanupConfig {
    /// How often to run cleanup (in seconds)
    pub interval_seconds: u64,
    /// Whether to enable the scheduled cleanup
    pub enabled: bool,
}

impl Default for TokenCleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 86_400, // Run daily
            enabled: true,
        }
    }
}

/// Background sweeper for expired and revoked refresh tokens
pub struct TokenCleanupService<R: TokenRepository + 'static> {
    repository: Arc<R>,
    config: TokenCleanupConfig,
}

impl<R: TokenRepository> TokenCleanupService<R> {
    /// Create a new token cleanup service
    pub fn new(repository: Arc<R>, config: TokenCleanupConfig) -> Self {
        Self { repository, config }
    }

    /// Run a single cleanup cycle
    ///
    /// Deletes every ledger record that is revoked or past its expiry.
    /// Also callable directly for on-demand administrative cleanup.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records deleted
    /// * `Err(DomainError)` - Storage failure; the scheduled loop logs this
    ///   and retries on the next tick
    pub async fn run_cleanup(&self) -> Result<usize, DomainError> {
        info!("Starting refresh token cleanup");

        let purged = self.repository.purge_expired_or_revoked().await?;

        info!(purged, "Refresh token cleanup completed");
        Ok(purged)
    }

    /// Start the cleanup service as a background task
    ///
    /// Spawns a tokio task that runs cleanup at the configured interval. A
    /// failed cycle never takes down the host process; the error is logged
    /// and the next tick tries again.
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("Token cleanup service is disabled");
            return;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        tokio::spawn(async move {
            info!(
                interval_seconds = self.config.interval_seconds,
                "Token cleanup service started"
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.run_cleanup().await {
                    error!(error = %e, "Refresh token cleanup failed, deferring to next run");
                }
            }
        });
    }
}
