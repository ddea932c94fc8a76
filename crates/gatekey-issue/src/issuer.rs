//! Token issuance

use chrono::{Duration, Utc};
use gatekey_verify::{Claims, codec};
use jsonwebtoken::EncodingKey;
use tracing::debug;

use crate::error::IssueError;
use crate::principal::Principal;

/// Stateless token issuer.
///
/// Holds the encoding key and the configured time-to-live, both fixed
/// at construction. Issuance embeds the principal's roles verbatim; it
/// consults no authorization policy and trusts that the caller already
/// verified credentials.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer signing with the given shared secret and
    /// time-to-live.
    ///
    /// # Panics
    ///
    /// Panics if `ttl` is not strictly positive: every issued token
    /// must expire after it is issued.
    pub fn new(secret: &str, ttl: Duration) -> Self {
        assert!(ttl > Duration::zero(), "token TTL must be positive");

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Configured token lifetime
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a signed token for the principal, valid from now until
    /// now + TTL.
    pub fn issue(&self, principal: &Principal) -> Result<String, IssueError> {
        if principal.username.trim().is_empty() {
            return Err(IssueError::EmptySubject);
        }

        let claims = Claims::new(
            &principal.username,
            principal.roles.clone(),
            Utc::now(),
            self.ttl,
        );

        debug!(sub = %claims.sub, "Issuing token");

        Ok(codec::encode(&claims, &self.encoding_key)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatekey_verify::TokenValidator;

    #[test]
    fn test_issued_token_carries_identity_and_roles() {
        let issuer = TokenIssuer::new("issue-secret", Duration::hours(1));
        let principal = Principal::new("alice", vec!["USER".to_string()]);

        let token = issuer.issue(&principal).unwrap();
        let claims = TokenValidator::new("issue-secret").validate(&token).unwrap();

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.roles, vec!["USER"]);
        assert_eq!(claims.exp - claims.iat, Duration::hours(1).num_seconds());
    }

    #[test]
    fn test_issued_claims_expire_after_issuance() {
        let issuer = TokenIssuer::new("issue-secret", Duration::minutes(1));
        let token = issuer
            .issue(&Principal::new("alice", vec![]))
            .unwrap();
        let claims = TokenValidator::new("issue-secret").validate(&token).unwrap();

        assert!(claims.exp > claims.iat);
    }

    #[test]
    #[should_panic(expected = "token TTL must be positive")]
    fn test_non_positive_ttl_is_rejected_at_construction() {
        TokenIssuer::new("issue-secret", Duration::minutes(0));
    }

    #[test]
    fn test_empty_username_is_rejected() {
        let issuer = TokenIssuer::new("issue-secret", Duration::hours(1));

        for username in ["", "   "] {
            let err = issuer.issue(&Principal::new(username, vec![])).unwrap_err();
            assert!(matches!(err, IssueError::EmptySubject));
        }
    }
}
