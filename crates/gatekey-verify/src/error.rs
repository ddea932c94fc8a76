//! Authentication failure taxonomy and response shaping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Every way a request can fail authentication or authorization.
///
/// All variants are expected, caller-recoverable outcomes. Validation
/// and gating resolve to one of these; nothing here is fatal to the
/// process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No token was supplied at all
    #[error("Missing token")]
    MissingToken,

    /// The token is structurally broken and cannot be decoded
    #[error("Malformed token")]
    Malformed,

    /// The signature does not verify against the configured key
    #[error("Invalid token signature")]
    InvalidSignature,

    /// The token was valid once but its expiry has passed
    #[error("Token expired")]
    Expired,

    /// The caller is authenticated but lacks the required role
    #[error("Insufficient role")]
    RoleMismatch,

    /// Claims could not be serialized and signed. Issuance-side only;
    /// never produced by validation, and not a caller error.
    #[error("Token encoding failed: {0}")]
    Encoding(String),
}

impl AuthError {
    /// Stable machine-readable code carried in the response body.
    /// Callers branch on this, never on the display text.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "MISSING_TOKEN",
            AuthError::Malformed => "MALFORMED",
            AuthError::InvalidSignature => "INVALID_SIGNATURE",
            AuthError::Expired => "EXPIRED",
            AuthError::RoleMismatch => "ROLE_MISMATCH",
            AuthError::Encoding(_) => "ENCODING_FAILED",
        }
    }

    /// HTTP status for the failure. Role mismatch is the only forbidden
    /// case; the caller's identity there is known and valid, just
    /// insufficient. An encoding failure is the server's own fault.
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::RoleMismatch => StatusCode::FORBIDDEN,
            AuthError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

/// The single place authentication failures become responses. Handlers
/// and extractors return `AuthError` and let it shape itself.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = axum::Json(json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        }));

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_token_failures_are_unauthorized() {
        for err in [
            AuthError::MissingToken,
            AuthError::Malformed,
            AuthError::InvalidSignature,
            AuthError::Expired,
        ] {
            let code = err.code();
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body["error"]["code"], code);
        }
    }

    #[tokio::test]
    async fn test_role_mismatch_is_forbidden() {
        let response = AuthError::RoleMismatch.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "ROLE_MISMATCH");
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes = [
            AuthError::MissingToken.code(),
            AuthError::Malformed.code(),
            AuthError::InvalidSignature.code(),
            AuthError::Expired.code(),
            AuthError::RoleMismatch.code(),
            AuthError::Encoding(String::new()).code(),
        ];
        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
    }

    #[test]
    fn test_encoding_failure_is_internal() {
        let err = AuthError::Encoding("boom".to_string());

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "ENCODING_FAILED");
    }
}
