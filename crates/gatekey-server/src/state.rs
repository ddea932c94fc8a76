//! Application state

use axum::extract::FromRef;
use gatekey_issue::TokenIssuer;
use gatekey_verify::TokenValidator;
use std::sync::Arc;

use crate::store::UserStore;

/// Application state shared across handlers
#[derive(Clone, FromRef)]
pub struct AppState {
    pub store: Arc<UserStore>,
    pub issuer: TokenIssuer,
    pub validator: TokenValidator,
}

impl AppState {
    pub fn new(store: Arc<UserStore>, issuer: TokenIssuer, validator: TokenValidator) -> Self {
        Self {
            store,
            issuer,
            validator,
        }
    }
}
