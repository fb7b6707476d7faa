//! Request Authorization Gate
//! Mission: Resolve bearer tokens to active users before protected handlers run

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use tracing::{debug, warn};

use crate::auth::api::AuthState;
use crate::auth::error::AuthError;
use crate::auth::models::User;

/// Authenticated identity inserted into request extensions by the gate
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Turn a bearer token into the user it belongs to.
///
/// Every failure here collapses to `Unauthenticated`, so responses never
/// reveal whether the token or the account was the problem.
pub async fn resolve_current_user(state: &AuthState, token: &str) -> Result<User, AuthError> {
    let claims = state
        .jwt_handler
        .verify_token(token)
        .map_err(|_| AuthError::Unauthenticated)?;

    let record = state
        .user_store
        .find_by_username(&claims.sub)
        .await
        .map_err(|e| {
            warn!("User lookup failed during token resolution: {:#}", e);
            AuthError::Internal
        })?;

    match record {
        Some(record) => Ok(record.user),
        None => {
            debug!("Token subject '{}' has no matching user", claims.sub);
            Err(AuthError::Unauthenticated)
        }
    }
}

/// Middleware guarding protected routes: valid token, known user, not disabled.
///
/// A missing or malformed Authorization header surfaces as `None` and is
/// rejected the same way as a bad token.
pub async fn require_active_user(
    State(state): State<AuthState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let Some(TypedHeader(Authorization(bearer))) = bearer else {
        return Err(AuthError::Unauthenticated);
    };

    let user = resolve_current_user(&state, bearer.token()).await?;

    if user.is_disabled() {
        debug!("Rejected disabled account '{}'", user.username);
        return Err(AuthError::InactiveAccount);
    }

    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}
