//! Configuration module with business-specific sub-modules
//!
//! - `auth` - JWT signing and token lifetime configuration
//! - `environment` - Environment detection

pub mod auth;
pub mod environment;

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig};
pub use environment::Environment;
