//! In-memory credential store
//!
//! The credential-verification collaborator: it checks passwords and
//! hands out a Principal. The token core never sees a password and
//! never reads this store again after issuance.

use gatekey_issue::Principal;
use gatekey_verify::Role;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::info;

use crate::error::ApiError;
use crate::password::{hash_password, verify_password};

/// Role required by the admin-only endpoint
pub const ROLE_ADMIN: &str = "ADMIN";
/// Role granted to every registered account
pub const ROLE_USER: &str = "USER";

/// Marker for the extractor guarding admin-only routes
pub struct AdminRole;

impl Role for AdminRole {
    const NAME: &'static str = ROLE_ADMIN;
}

/// Marker for the extractor guarding user routes
pub struct UserRole;

impl Role for UserRole {
    const NAME: &'static str = ROLE_USER;
}

/// A stored Argon2 hash that verifies against nothing, used to keep
/// unknown-username lookups on the same code path as real ones.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$dGltaW5nX2F0dGFja19wcmV2ZW50aW9u$K8rI5T7VdQ8xkO0GqK5K2w";

struct UserRecord {
    password_hash: String,
    roles: Vec<String>,
}

/// Username-keyed user registry behind a read-write lock
#[derive(Default)]
pub struct UserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the built-in accounts if the store is empty
    pub fn seed_defaults(&self) -> Result<(), ApiError> {
        if !self.users.read().is_empty() {
            return Ok(());
        }

        self.insert("admin", "admin", vec![ROLE_ADMIN.to_string(), ROLE_USER.to_string()])?;
        self.insert("user", "user", vec![ROLE_USER.to_string()])?;
        info!("Seeded default accounts (admin, user)");

        Ok(())
    }

    /// Register a new account
    pub fn insert(
        &self,
        username: &str,
        password: &str,
        roles: Vec<String>,
    ) -> Result<(), ApiError> {
        let password_hash = hash_password(password)?;

        let mut users = self.users.write();
        if users.contains_key(username) {
            return Err(ApiError::UserExists);
        }

        users.insert(
            username.to_string(),
            UserRecord {
                password_hash,
                roles,
            },
        );

        Ok(())
    }

    /// Check a username/password pair and produce the authenticated
    /// principal.
    ///
    /// Password verification runs even when the username is unknown, so
    /// both outcomes take comparable time.
    pub fn verify_credentials(&self, username: &str, password: &str) -> Result<Principal, ApiError> {
        let (hash, roles) = {
            let users = self.users.read();
            match users.get(username) {
                Some(record) => (record.password_hash.clone(), Some(record.roles.clone())),
                None => (DUMMY_HASH.to_string(), None),
            }
        };

        let password_valid = verify_password(password, &hash)?;

        match (roles, password_valid) {
            (Some(roles), true) => Ok(Principal::new(username, roles)),
            _ => Err(ApiError::InvalidCredentials),
        }
    }
}
