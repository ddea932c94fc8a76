//! Token claims

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Identity and role claims embedded in a token.
///
/// Roles are kept as an ordered sequence so a decoded token reproduces
/// the issued claims exactly. Timestamps are Unix seconds.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Role names granted to the subject
    pub roles: Vec<String>,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims for a subject with issuance time `now` and the given
    /// time-to-live. Issuers supply a positive TTL so the expiry lands
    /// strictly after `iat`.
    pub fn new(subject: &str, roles: Vec<String>, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: subject.to_string(),
            roles,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Exact, case-sensitive role membership check
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
