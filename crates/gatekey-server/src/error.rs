//! API error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gatekey_verify::AuthError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("User already exists")]
    UserExists,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    /// Token and role failures keep their own uniform response shape
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Issuance error: {0}")]
    Issue(#[from] gatekey_issue::IssueError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // Authentication failures are shaped in exactly one place.
            ApiError::Auth(err) => return err.clone().into_response(),
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                self.to_string(),
            ),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", self.to_string()),
            ApiError::UserExists => (StatusCode::CONFLICT, "USER_EXISTS", self.to_string()),
            ApiError::PasswordHash(_) | ApiError::Issue(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Internal error".to_string(),
            ),
        };

        let body = axum::Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
