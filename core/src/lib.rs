//! # HomeShare Core
//!
//! Core business logic and domain layer for the HomeShare backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.
//!
//! The centerpiece is the credential-issuance subsystem: JWT access tokens,
//! single-use refresh tokens with rotation-on-refresh, and the background
//! cleanup of retired ledger entries.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
