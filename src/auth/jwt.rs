//! JWT Issuance and Verification
//! Mission: Mint and validate the HS256 bearer tokens behind every session

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use tracing::debug;

use crate::auth::models::Claims;

/// Lifetime applied when the caller does not pick one
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 15;

/// Signs and verifies access tokens with a single shared secret
pub struct JwtHandler {
    secret: String,
}

impl JwtHandler {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    /// Issue a signed token for `subject` expiring `ttl` after `now`.
    ///
    /// `now` is passed in rather than read from the clock so expiry
    /// behavior stays testable without sleeping.
    pub fn issue(
        &self,
        subject: &str,
        ttl: Option<Duration>,
        now: DateTime<Utc>,
    ) -> Result<String> {
        let ttl = ttl.unwrap_or_else(|| Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES));
        let expiration = now
            .checked_add_signed(ttl)
            .context("Token expiry overflows the calendar")?
            .timestamp() as usize;

        let claims = Claims {
            sub: subject.to_string(),
            exp: expiration,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .context("Failed to sign access token")
    }

    /// Decode and validate a token, returning its claims.
    ///
    /// Expiry is checked with zero leeway, so a token is dead the second
    /// after its `exp`. The concrete failure cause is only logged at DEBUG;
    /// callers get a single opaque error.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        match decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        ) {
            Ok(token_data) => Ok(token_data.claims),
            Err(e) => {
                match e.kind() {
                    ErrorKind::ExpiredSignature => debug!("Token rejected: expired"),
                    ErrorKind::InvalidSignature => debug!("Token rejected: bad signature"),
                    ErrorKind::MissingRequiredClaim(claim) => {
                        debug!("Token rejected: missing claim '{}'", claim)
                    }
                    other => debug!("Token rejected: {:?}", other),
                }
                Err(anyhow!("Invalid token"))
            }
        }
    }
}
