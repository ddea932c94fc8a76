//! Identity types on the issuance path

use serde::Deserialize;
use std::fmt;

/// Raw login credentials, alive only for the duration of one
/// authentication request. Never persisted here; the password never
/// reaches a token.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

// Manual Debug so a stray debug log can never leak the password.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// An authenticated identity with its granted roles, as produced by the
/// credential-verification collaborator after its own password check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    pub roles: Vec<String>,
}

impl Principal {
    pub fn new(username: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            username: username.into(),
            roles,
        }
    }
}
