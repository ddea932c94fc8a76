//! Gatekey Token Validation and Authorization
//!
//! This crate is the validation-only half of Gatekey: everything a
//! downstream service needs to accept tokens and enforce role-based
//! access, with no dependency on token issuance or credential storage.
//! Services that only validate link against this crate alone.

pub mod claims;
pub mod codec;
pub mod error;
pub mod extract;
pub mod gate;
pub mod validator;

pub use claims::Claims;
pub use error::AuthError;
pub use extract::{RequireAuth, RequireRole, Role, bearer_token};
pub use gate::{AuthzDecision, AuthzReason, authorize};
pub use validator::TokenValidator;
