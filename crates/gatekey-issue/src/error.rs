//! Issuance error types

use gatekey_verify::AuthError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IssueError {
    /// A principal with an empty username cannot be the subject of a token
    #[error("Principal has an empty username")]
    EmptySubject,

    /// Signing failure surfaced by the codec, already classified into
    /// the auth taxonomy
    #[error(transparent)]
    Encoding(#[from] AuthError),
}
