//! Request-side extraction for protected routes
//!
//! Claims travel as explicit values: the extractor validates the token
//! and hands the decoded claims to the handler as an argument. Nothing
//! is stashed in ambient per-thread state.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use std::marker::PhantomData;

use crate::claims::Claims;
use crate::error::AuthError;
use crate::gate;
use crate::validator::TokenValidator;

/// Pull the bearer token out of the `Authorization` header.
///
/// An absent header is `MissingToken`; a header with the wrong scheme
/// or undecodable bytes is `Malformed`.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::Malformed)?;

    header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::Malformed)
}

/// Extractor for routes that require a valid token.
///
/// Works with any router state that can hand out the shared
/// [`TokenValidator`] via `FromRef`. Rejections go through the uniform
/// failure response, so a protected handler never formats its own
/// authentication errors.
pub struct RequireAuth(pub Claims);

impl<S> FromRequestParts<S> for RequireAuth
where
    TokenValidator: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let validator = TokenValidator::from_ref(state);
        let token = bearer_token(&parts.headers)?;
        let claims = validator.validate(token)?;

        Ok(RequireAuth(claims))
    }
}

/// Marker naming a role that [`RequireRole`] can demand.
///
/// Each protected operation names its required role as data; deploying
/// services define one marker per role they recognize.
pub trait Role {
    /// Exact role name matched against claims
    const NAME: &'static str;
}

/// Extractor for routes that require a valid token carrying a role.
///
/// Authentication and gating in one step: the token is validated, then
/// the claims are gated against `R::NAME`. A caller whose token is
/// valid but lacks the role gets the forbidden response, same as
/// calling the gate by hand.
pub struct RequireRole<R: Role> {
    pub claims: Claims,
    _role: PhantomData<fn() -> R>,
}

impl<R: Role> std::fmt::Debug for RequireRole<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequireRole")
            .field("claims", &self.claims)
            .finish()
    }
}

impl<S, R> FromRequestParts<S> for RequireRole<R>
where
    TokenValidator: FromRef<S>,
    S: Send + Sync,
    R: Role,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let RequireAuth(claims) = RequireAuth::from_request_parts(parts, state).await?;
        gate::authorize(&claims, Some(R::NAME)).into_result()?;

        Ok(RequireRole {
            claims,
            _role: PhantomData,
        })
    }
}
