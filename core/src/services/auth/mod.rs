//! Authentication service module
//!
//! This module provides the credential-issuance orchestration:
//! - User registration and login
//! - Refresh token rotation
//! - Logout (single session and all sessions)

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::{AuthService, RegisterRequest};
