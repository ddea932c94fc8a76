//! Signed claims encoding and decoding
//!
//! The codec is the only module that touches the underlying JWT
//! primitives. Every parsing or cryptographic failure is re-classified
//! into the [`AuthError`] taxonomy here; raw `jsonwebtoken` errors
//! never cross this boundary in either direction.

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use crate::claims::Claims;
use crate::error::AuthError;

/// Serialize and sign claims into a compact token string.
pub fn encode(claims: &Claims, key: &EncodingKey) -> Result<String, AuthError> {
    jsonwebtoken::encode(&Header::default(), claims, key)
        .map_err(|e| AuthError::Encoding(e.to_string()))
}

/// Verify and deserialize a token into claims.
///
/// Checks run in a fixed order: structural well-formedness, then
/// signature, then expiry. No claim is read for a decision before the
/// signature is confirmed. Expiry is checked against a single clock
/// read taken inside this call.
pub fn decode(token: &str, key: &DecodingKey) -> Result<Claims, AuthError> {
    // Expiry is checked explicitly below so the whole decode uses one
    // clock read and no leeway window.
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let token_data =
        jsonwebtoken::decode::<Claims>(token, key, &validation).map_err(classify)?;

    let now = Utc::now().timestamp();
    if token_data.claims.exp <= now {
        debug!(sub = %token_data.claims.sub, "Rejected expired token");
        return Err(AuthError::Expired);
    }

    Ok(token_data.claims)
}

/// Map a `jsonwebtoken` failure onto the auth error taxonomy.
fn classify(err: jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        ErrorKind::ExpiredSignature => AuthError::Expired,
        // Everything else is a structural defect: wrong segment count,
        // bad base64, claims that fail to deserialize, a header naming
        // an algorithm this codec does not accept.
        _ => AuthError::Malformed,
    }
}
