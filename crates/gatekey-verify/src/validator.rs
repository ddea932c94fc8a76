//! Token validation

use jsonwebtoken::DecodingKey;
use tracing::debug;

use crate::claims::Claims;
use crate::codec;
use crate::error::AuthError;

/// Stateless token validator.
///
/// Holds only the decoding key, loaded once at startup. Validation
/// reads nothing but the token and the clock, so a single validator can
/// be shared across any number of concurrent requests.
#[derive(Clone)]
pub struct TokenValidator {
    decoding_key: DecodingKey,
}

impl TokenValidator {
    /// Create a validator for tokens signed with the given shared secret
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Validate a token string and return its claims.
    ///
    /// An empty or blank input is `MissingToken`, distinct from
    /// `Malformed`: the remediation differs (log in vs re-authenticate
    /// after corruption or tampering).
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        if token.trim().is_empty() {
            return Err(AuthError::MissingToken);
        }

        let claims = codec::decode(token, &self.decoding_key)?;

        debug!(sub = %claims.sub, "Validated token");

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::EncodingKey;

    #[test]
    fn test_empty_input_is_missing_token() {
        let validator = TokenValidator::new("test-secret");

        assert_eq!(validator.validate("").unwrap_err(), AuthError::MissingToken);
        assert_eq!(
            validator.validate("   ").unwrap_err(),
            AuthError::MissingToken
        );
    }

    #[test]
    fn test_broken_input_is_malformed_not_missing() {
        let validator = TokenValidator::new("test-secret");

        assert_eq!(
            validator.validate("not-a-token").unwrap_err(),
            AuthError::Malformed
        );
    }

    #[test]
    fn test_valid_token_round_trips() {
        let secret = "test-secret";
        let validator = TokenValidator::new(secret);
        let claims = Claims::new(
            "alice",
            vec!["USER".to_string()],
            Utc::now(),
            Duration::hours(1),
        );
        let token =
            codec::encode(&claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap();

        assert_eq!(validator.validate(&token).unwrap(), claims);
    }
}
