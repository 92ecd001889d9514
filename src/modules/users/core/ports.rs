// Ports define what the users module needs from the outside world.
//
// Purpose
// - Describe the user lookup capability that entity resolution depends on.
//
// Boundaries
// - No concrete storage here. Adapters implement these traits.

use crate::modules::users::core::user::User;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserDirectoryError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("seed error: {0}")]
    Seed(String),
}

/// Looks users up by their federation key.
///
/// An unknown id is `Ok(None)`, not an error, so the gateway can null the
/// entity instead of failing the whole query.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn fetch_user_by_id(&self, id: &str) -> Result<Option<User>, UserDirectoryError>;
}
