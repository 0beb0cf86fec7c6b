//! User entity representing a registered user in the HomeShare system.
//!
//! The user store itself lives behind [`crate::repositories::UserRepository`];
//! the auth core only reads the fields it needs for credential checks and
//! claim building.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the role of a user in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A guest booking stays
    Guest,
    /// A host listing properties
    Host,
    /// Platform administrator
    Admin,
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Guest
    }
}

impl UserRole {
    /// Stable string form used in JWT claims
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Guest => "guest",
            UserRole::Host => "host",
            UserRole::Admin => "admin",
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guest" => Ok(UserRole::Guest),
            "host" => Ok(UserRole::Host),
            "admin" => Ok(UserRole::Admin),
            other => Err(format!("Invalid user role: {}", other)),
        }
    }
}

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, unique and stored lowercase
    pub email: String,

    /// Bcrypt hash of the user's password
    pub password_hash: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Role of the user
    pub role: UserRole,

    /// Whether the account is active; deactivated accounts cannot log in
    pub is_active: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance with a normalized email
    pub fn new(
        email: impl Into<String>,
        password_hash: String,
        first_name: String,
        last_name: String,
        role: Option<UserRole>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: normalize_email(&email.into()),
            password_hash,
            first_name,
            last_name,
            role: role.unwrap_or_default(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Deactivates the account
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Reactivates the account
    pub fn activate(&mut self) {
        self.is_active = true;
        self.updated_at = Utc::now();
    }

    /// Checks if the user is an administrator
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Normalizes an email for storage and lookup (trimmed, lowercase)
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new(
            "Alice@Example.COM ",
            "$2b$12$hash".to_string(),
            "Alice".to_string(),
            "Smith".to_string(),
            None,
        );

        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.role, UserRole::Guest);
        assert!(user.is_active);
    }

    #[test]
    fn test_explicit_role() {
        let user = User::new(
            "host@example.com",
            "hash".to_string(),
            "Bob".to_string(),
            "Jones".to_string(),
            Some(UserRole::Host),
        );

        assert_eq!(user.role, UserRole::Host);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_deactivate() {
        let mut user = User::new(
            "a@b.com",
            "hash".to_string(),
            "A".to_string(),
            "B".to_string(),
            None,
        );

        user.deactivate();
        assert!(!user.is_active);

        user.activate();
        assert!(user.is_active);
    }

    #[test]
    fn test_role_round_trip() {
        for role in [UserRole::Guest, UserRole::Host, UserRole::Admin] {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
        assert!("tenant".parse::<UserRole>().is_err());
    }
}
