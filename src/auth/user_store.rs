//! Credential Store
//! Mission: Hold user records and answer username lookups

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::auth::models::{StoredCredential, User};

/// bcrypt hash of the demo password "secret", cost 12
pub const DEMO_PASSWORD_HASH: &str =
    "$2b$12$EixZaYVK1fsbw1ZfbX3OXePaWxn96p36WQoeG6Lruj3vjPGga31lW";

/// Read-only lookup surface the rest of the crate authenticates against.
///
/// Async so a database-backed store can slot in without touching callers.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<StoredCredential>>;
}

/// In-memory credential store, fixed at construction
pub struct InMemoryUserStore {
    users: HashMap<String, StoredCredential>,
}

impl InMemoryUserStore {
    pub fn new(records: impl IntoIterator<Item = StoredCredential>) -> Self {
        let users = records
            .into_iter()
            .map(|record| (record.user.username.clone(), record))
            .collect();
        Self { users }
    }

    /// Store seeded with the demo account (`johndoe` / `secret`)
    pub fn demo() -> Self {
        let store = Self::new([StoredCredential {
            user: User {
                username: "johndoe".to_string(),
                email: Some("johndoe@example.com".to_string()),
                full_name: Some("John Doe".to_string()),
                disabled: Some(false),
            },
            hashed_password: DEMO_PASSWORD_HASH.to_string(),
        }]);
        info!("👤 Seeded in-memory store with {} demo user(s)", store.len());
        store
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<StoredCredential>> {
        Ok(self.users.get(username).cloned())
    }
}
