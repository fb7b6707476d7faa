//! Authentication Module
//! Mission: Credential checks, token lifecycle, and the bearer gate

pub mod api;
pub mod error;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;
pub mod user_store;

pub use api::{login, read_current_user, read_own_items, AuthState};
pub use error::AuthError;
pub use jwt::{JwtHandler, DEFAULT_TOKEN_TTL_MINUTES};
pub use middleware::{require_active_user, resolve_current_user, CurrentUser};
pub use models::{AccessTokenForm, Claims, OwnedItem, StoredCredential, TokenResponse, User};
pub use user_store::{InMemoryUserStore, UserRepository, DEMO_PASSWORD_HASH};
