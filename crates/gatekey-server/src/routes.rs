//! Authentication and demo routes

use axum::routing::{get, post};
use axum::{Json, Router, extract::State};
use gatekey_issue::Credentials;
use gatekey_verify::RequireRole;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::{AdminRole, ROLE_USER, UserRole};

/// Maximum allowed username length
const MAX_USERNAME_LENGTH: usize = 64;
/// Maximum allowed password length
const MAX_PASSWORD_LENGTH: usize = 256;

#[derive(Serialize)]
struct LoginResponse {
    token: String,
    expires_in: i64,
}

#[derive(Deserialize)]
struct RegisterRequest {
    username: String,
    password: String,
}

#[derive(Serialize)]
struct RegisteredUser {
    username: String,
    roles: Vec<String>,
}

#[derive(Serialize)]
struct ProtectedResponse {
    message: &'static str,
    user: String,
}

fn validate_username(username: &str) -> Result<(), ApiError> {
    if username.is_empty() {
        return Err(ApiError::BadRequest("Username cannot be empty".to_string()));
    }
    if username.len() > MAX_USERNAME_LENGTH {
        return Err(ApiError::BadRequest(format!(
            "Username exceeds maximum length of {} characters",
            MAX_USERNAME_LENGTH
        )));
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return Err(ApiError::BadRequest(
            "Username can only contain alphanumeric characters, underscores, and hyphens"
                .to_string(),
        ));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), ApiError> {
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(ApiError::BadRequest(format!(
            "Password exceeds maximum length of {} characters",
            MAX_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

/// POST /authenticate
async fn authenticate(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<LoginResponse>, ApiError> {
    validate_username(&credentials.username)?;
    validate_password(&credentials.password)?;

    debug!("Login attempt for user: {}", credentials.username);

    let principal = state
        .store
        .verify_credentials(&credentials.username, &credentials.password)?;

    let token = state.issuer.issue(&principal)?;

    info!("User {} logged in successfully", principal.username);

    Ok(Json(LoginResponse {
        token,
        expires_in: state.issuer.ttl().num_seconds(),
    }))
}

/// POST /register
async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisteredUser>, ApiError> {
    validate_username(&request.username)?;
    validate_password(&request.password)?;

    let roles = vec![ROLE_USER.to_string()];
    state
        .store
        .insert(&request.username, &request.password, roles.clone())?;

    info!("Registered new user: {}", request.username);

    Ok(Json(RegisteredUser {
        username: request.username,
        roles,
    }))
}

/// GET /for-admin — requires the ADMIN role
async fn for_admin(auth: RequireRole<AdminRole>) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        message: "This endpoint is only accessible to admins",
        user: auth.claims.sub,
    })
}

/// GET /for-user — requires the USER role
async fn for_user(auth: RequireRole<UserRole>) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        message: "This endpoint is only accessible to users",
        user: auth.claims.sub,
    })
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/authenticate", post(authenticate))
        .route("/register", post(register))
        .route("/for-admin", get(for_admin))
        .route("/for-user", get(for_user))
        .with_state(state)
}
