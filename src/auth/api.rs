//! Authentication API
//! Mission: Expose the token endpoint and current-user routes over the auth core

use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    Form, Json,
};
use chrono::{Duration, Utc};
use tracing::{info, warn};

use crate::auth::error::AuthError;
use crate::auth::jwt::JwtHandler;
use crate::auth::middleware::CurrentUser;
use crate::auth::models::{AccessTokenForm, OwnedItem, TokenResponse, User};
use crate::auth::password::verify_password;
use crate::auth::user_store::UserRepository;

/// Shared state for every authentication route and layer
#[derive(Clone)]
pub struct AuthState {
    pub user_store: Arc<dyn UserRepository>,
    pub jwt_handler: Arc<JwtHandler>,
    /// Lifetime stamped on tokens minted at login
    pub token_ttl: Duration,
}

impl AuthState {
    pub fn new(
        user_store: Arc<dyn UserRepository>,
        jwt_handler: Arc<JwtHandler>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            user_store,
            jwt_handler,
            token_ttl,
        }
    }
}

/// POST /token - exchange a username/password form for a bearer token
pub async fn login(
    State(state): State<AuthState>,
    Form(form): Form<AccessTokenForm>,
) -> Result<Json<TokenResponse>, AuthError> {
    let record = state
        .user_store
        .find_by_username(&form.username)
        .await
        .map_err(|e| {
            warn!("User lookup failed during login: {:#}", e);
            AuthError::Internal
        })?;

    let Some(record) = record else {
        warn!("Failed login attempt for unknown user '{}'", form.username);
        return Err(AuthError::InvalidCredentials);
    };

    let password_ok = verify_password(&form.password, &record.hashed_password).map_err(|e| {
        warn!("Password verification errored: {:#}", e);
        AuthError::Internal
    })?;

    if !password_ok {
        warn!("Failed login attempt for '{}'", form.username);
        return Err(AuthError::InvalidCredentials);
    }

    // A disabled account may still log in; the gate on protected routes
    // is what locks it out.
    let token = state
        .jwt_handler
        .issue(&record.user.username, Some(state.token_ttl), Utc::now())
        .map_err(|e| {
            warn!("Token issuance failed: {:#}", e);
            AuthError::Internal
        })?;

    info!("Issued access token for '{}'", record.user.username);
    Ok(Json(TokenResponse::bearer(token)))
}

/// GET /users/me - profile of the authenticated user
pub async fn read_current_user(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Json<User> {
    Json(user)
}

/// GET /users/me/items - demo listing owned by the authenticated user
pub async fn read_own_items(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Json<Vec<OwnedItem>> {
    Json(vec![OwnedItem {
        item_id: "Foo".to_string(),
        owner: user.username,
    }])
}
