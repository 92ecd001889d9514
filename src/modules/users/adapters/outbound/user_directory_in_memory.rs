// In memory implementation of the UserDirectory port.
//
// Purpose
// - Back entity resolution without a database, for tests and local development.
//
// Responsibilities
// - Store users in a map keyed by id.
// - Optionally load the initial users from a JSON file.

use crate::modules::users::core::ports::{UserDirectory, UserDirectoryError};
use crate::modules::users::core::user::User;
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<String, User>>,
    is_offline: bool,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();
        Self {
            users: RwLock::new(users),
            is_offline: false,
        }
    }

    /// Directory holding only the `me` user.
    pub fn seeded() -> Self {
        Self::with_users([User::me()])
    }

    /// Loads a JSON array of `{ "id": .., "username": .. }` objects.
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, UserDirectoryError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| UserDirectoryError::Seed(format!("{}: {e}", path.display())))?;
        let users: Vec<User> = serde_json::from_str(&raw)
            .map_err(|e| UserDirectoryError::Seed(format!("{}: {e}", path.display())))?;
        tracing::info!(count = users.len(), path = %path.display(), "loaded users");
        Ok(Self::with_users(users))
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn fetch_user_by_id(&self, id: &str) -> Result<Option<User>, UserDirectoryError> {
        if self.is_offline {
            return Err(UserDirectoryError::Backend("User directory offline".into()));
        }

        Ok(self.users.read().await.get(id).cloned())
    }
}
