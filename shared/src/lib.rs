//! Shared utilities and common types for HomeShare server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error types and response structures
//! - Environment detection

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{AuthConfig, Environment, JwtConfig};
pub use errors::{error_codes, ApiResult, ErrorResponse, IntoErrorResponse};
