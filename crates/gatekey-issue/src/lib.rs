//! Gatekey Token Issuance
//!
//! The issuing half of Gatekey: turns an already-verified identity into
//! a signed token. Only the service that checks credentials needs this
//! crate; validating services depend on `gatekey-verify` alone.

pub mod error;
pub mod issuer;
pub mod principal;

pub use error::IssueError;
pub use issuer::TokenIssuer;
pub use principal::{Credentials, Principal};
