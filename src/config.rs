//! Application Configuration
//! Mission: Collect runtime settings from the environment with safe defaults

use std::env;

use tracing::warn;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;
const DEV_JWT_SECRET: &str = "dev-secret-change-in-production-minimum-32-characters";

/// Runtime settings, resolved once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub jwt_secret: String,
    /// Lifetime of tokens minted at login, in minutes
    pub access_token_ttl_minutes: i64,
}

impl AppConfig {
    /// Read settings from the environment, falling back to dev defaults.
    ///
    /// Unparseable values fall back rather than abort; only the missing
    /// JWT secret is loud about it.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse::<u16>()
            .unwrap_or(DEFAULT_PORT);

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET not set, using development secret");
            DEV_JWT_SECRET.to_string()
        });

        let access_token_ttl_minutes = env::var("ACCESS_TOKEN_TTL_MINUTES")
            .unwrap_or_else(|_| DEFAULT_TOKEN_TTL_MINUTES.to_string())
            .parse::<i64>()
            .unwrap_or(DEFAULT_TOKEN_TTL_MINUTES);

        Self {
            port,
            jwt_secret,
            access_token_ttl_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The only test that mutates these variables, so the process-global
    // env state cannot race another test.
    #[test]
    fn test_invalid_numeric_values_fall_back() {
        env::set_var("PORT", "not-a-port");
        env::set_var("ACCESS_TOKEN_TTL_MINUTES", "NaN");

        let config = AppConfig::from_env();
        assert_eq!(config.port, 8000);
        assert_eq!(config.access_token_ttl_minutes, 30);

        env::remove_var("PORT");
        env::remove_var("ACCESS_TOKEN_TTL_MINUTES");

        let config = AppConfig::from_env();
        assert_eq!(config.port, 8000);
        assert_eq!(config.access_token_ttl_minutes, 30);
    }
}
