//! Authentication Models
//! Mission: Define the user, credential, and token data structures

use serde::{Deserialize, Serialize};

/// Public user profile as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub disabled: Option<bool>,
}

impl User {
    /// True when the account carries the disabled flag
    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }
}

/// A user record as held by the credential store.
///
/// Deliberately not `Serialize`: the hash must never reach a client.
#[derive(Debug, Clone)]
pub struct StoredCredential {
    pub user: User,
    pub hashed_password: String,
}

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // subject (username)
    pub exp: usize,  // expiration timestamp, seconds since epoch
}

/// Form body accepted by the token endpoint (application/x-www-form-urlencoded)
#[derive(Debug, Deserialize)]
pub struct AccessTokenForm {
    pub username: String,
    pub password: String,
}

/// Token endpoint response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Entry in the demo listing owned by the current user
#[derive(Debug, Serialize)]
pub struct OwnedItem {
    pub item_id: String,
    pub owner: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_is_bearer() {
        let resp = TokenResponse::bearer("abc.def.ghi".to_string());
        assert_eq!(resp.access_token, "abc.def.ghi");
        assert_eq!(resp.token_type, "bearer");
    }

    #[test]
    fn test_disabled_defaults_to_false() {
        let user = User {
            username: "johndoe".to_string(),
            email: None,
            full_name: None,
            disabled: None,
        };
        assert!(!user.is_disabled());

        let disabled = User {
            disabled: Some(true),
            ..user
        };
        assert!(disabled.is_disabled());
    }

    #[test]
    fn test_user_serialization_shape() {
        let user = User {
            username: "johndoe".to_string(),
            email: Some("johndoe@example.com".to_string()),
            full_name: Some("John Doe".to_string()),
            disabled: Some(false),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["username"], "johndoe");
        assert_eq!(json["email"], "johndoe@example.com");
        assert_eq!(json["full_name"], "John Doe");
        assert_eq!(json["disabled"], false);
    }

    #[test]
    fn test_claims_roundtrip() {
        let claims = Claims {
            sub: "johndoe".to_string(),
            exp: 1_700_000_000,
        };
        let json = serde_json::to_string(&claims).unwrap();
        let back: Claims = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sub, "johndoe");
        assert_eq!(back.exp, 1_700_000_000);
    }
}
