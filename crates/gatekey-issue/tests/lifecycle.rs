//! End-to-end issue/validate/authorize cycle across both crates

use chrono::{Duration, Utc};
use gatekey_issue::{Principal, TokenIssuer};
use gatekey_verify::{AuthError, Claims, TokenValidator, authorize, codec};
use jsonwebtoken::EncodingKey;

const SECRET: &str = "lifecycle-test-secret";

#[test]
fn issued_token_authenticates_and_gates_by_role() {
    let issuer = TokenIssuer::new(SECRET, Duration::hours(1));
    let validator = TokenValidator::new(SECRET);

    let alice = Principal::new("alice", vec!["USER".to_string()]);
    let token = issuer.issue(&alice).unwrap();

    let claims = validator.validate(&token).unwrap();
    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.roles, vec!["USER"]);

    assert!(authorize(&claims, Some("USER")).allowed);
    assert!(!authorize(&claims, Some("ADMIN")).allowed);
    assert!(authorize(&claims, None).allowed);
}

#[test]
fn token_from_another_key_is_rejected() {
    let issuer = TokenIssuer::new("some-other-secret", Duration::hours(1));
    let validator = TokenValidator::new(SECRET);

    let token = issuer
        .issue(&Principal::new("mallory", vec!["ADMIN".to_string()]))
        .unwrap();

    assert_eq!(
        validator.validate(&token).unwrap_err(),
        AuthError::InvalidSignature
    );
}

#[test]
fn token_past_its_ttl_is_expired() {
    let validator = TokenValidator::new(SECRET);

    // An already-elapsed lifetime, as if the TTL passed between
    // issuance and validation.
    let mut claims = Claims::new("alice", vec!["USER".to_string()], Utc::now(), Duration::hours(1));
    claims.iat -= 7200;
    claims.exp -= 7200;

    let token = codec::encode(&claims, &EncodingKey::from_secret(SECRET.as_bytes())).unwrap();

    assert_eq!(validator.validate(&token).unwrap_err(), AuthError::Expired);
}
