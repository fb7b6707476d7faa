//! Authentication Errors
//! Mission: Map every authentication failure to one uniform HTTP rejection

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication failure taxonomy.
///
/// Token verification failures are collapsed into `Unauthenticated` before
/// they reach a response, so a caller cannot tell which check rejected them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Bad username or password at login
    InvalidCredentials,
    /// Missing, malformed, expired, or otherwise unverifiable token
    Unauthenticated,
    /// Valid token, but the account is flagged as disabled
    InactiveAccount,
    /// Hashing/signing library or store backend failure
    Internal,
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AuthError::InactiveAccount => StatusCode::UNAUTHORIZED,
            AuthError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn detail(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "Incorrect username or password",
            AuthError::Unauthenticated => "Could not validate credentials",
            AuthError::InactiveAccount => "Inactive user",
            AuthError::Internal => "Internal server error",
        }
    }

    /// Challenge header value, present on the failures where the caller
    /// should retry with a (different) bearer credential.
    fn challenge(&self) -> Option<&'static str> {
        match self {
            AuthError::InvalidCredentials | AuthError::Unauthenticated => Some("Bearer"),
            AuthError::InactiveAccount | AuthError::Internal => None,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = json!({ "detail": self.detail() });
        let mut response = (self.status(), Json(body)).into_response();

        if let Some(challenge) = self.challenge() {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static(challenge));
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::Unauthenticated.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::InactiveAccount.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::Internal.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_challenge_header_on_credential_failures() {
        let response = AuthError::Unauthenticated.into_response();
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );

        let response = AuthError::InvalidCredentials.into_response();
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_no_challenge_for_inactive_account() {
        let response = AuthError::InactiveAccount.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[test]
    fn test_detail_strings() {
        assert_eq!(
            AuthError::InvalidCredentials.detail(),
            "Incorrect username or password"
        );
        assert_eq!(
            AuthError::Unauthenticated.detail(),
            "Could not validate credentials"
        );
        assert_eq!(AuthError::InactiveAccount.detail(), "Inactive user");
    }
}
