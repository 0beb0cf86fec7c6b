//! Token service module for credential issuance
//!
//! This module handles all token-related operations including:
//! - JWT access token signing and verification
//! - The refresh token ledger (issue, single-use consume, revoke)
//! - Background cleanup of expired and revoked ledger entries

mod cleanup;
mod codec;
mod config;
mod ledger;

#[cfg(test)]
mod tests;

pub use cleanup::{TokenCleanupConfig, TokenCleanupService};
pub use codec::TokenCodec;
pub use config::TokenServiceConfig;
pub use ledger::RefreshTokenLedger;
