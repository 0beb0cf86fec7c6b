//! Repository interfaces for the external persistence collaborators.
//!
//! Concrete implementations live in the infrastructure layer; the core only
//! depends on these traits.

pub mod token;
pub mod user;

pub use token::TokenRepository;
pub use user::UserRepository;

#[cfg(test)]
pub use token::MockTokenRepository;
#[cfg(test)]
pub use user::MockUserRepository;
