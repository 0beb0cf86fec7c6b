//! Unit tests for the JWT codec

use chrono::Duration;
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenCodec, TokenServiceConfig};

fn test_codec() -> TokenCodec {
    TokenCodec::new(&TokenServiceConfig {
        jwt_secret: "test-secret-for-codec-tests".to_string(),
        ..TokenServiceConfig::default()
    })
}

#[test]
fn test_sign_and_verify_roundtrip() {
    let codec = test_codec();
    let user_id = Uuid::new_v4();

    let token = codec.sign_access_token(user_id, "host").unwrap();
    let claims = codec.verify(&token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.role, "host");
    assert!(claims.is_valid());
}

#[test]
fn test_verify_rejects_expired_token() {
    let codec = test_codec();

    // Signed five minutes in the past, safely beyond the default leeway.
    let claims = Claims::with_ttl(Uuid::new_v4(), "guest", Duration::minutes(-5));
    let token = codec.sign(&claims).unwrap();

    let err = codec.verify(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
}

#[test]
fn test_verify_rejects_wrong_secret() {
    let codec = test_codec();
    let other = TokenCodec::new(&TokenServiceConfig {
        jwt_secret: "a-completely-different-secret".to_string(),
        ..TokenServiceConfig::default()
    });

    let token = codec.sign_access_token(Uuid::new_v4(), "guest").unwrap();

    let err = other.verify(&token).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidSignature)
    ));
}

#[test]
fn test_verify_rejects_garbage() {
    let codec = test_codec();

    let err = codec.verify("not.a.jwt").unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::MalformedToken)));

    let err = codec.verify("").unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::MalformedToken)));
}

#[test]
fn test_verify_rejects_wrong_issuer() {
    let codec = test_codec();

    let mut claims = Claims::new_access_token(Uuid::new_v4(), "guest");
    claims.iss = "someone-else".to_string();
    let token = codec.sign(&claims).unwrap();

    let err = codec.verify(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::MalformedToken)));
}
