use crate::modules::users::core::ports::{UserDirectory, UserDirectoryError};
use crate::modules::users::core::user::User;
use crate::modules::users::use_cases::resolve_user_reference::reference::UserReference;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Directory(#[from] UserDirectoryError),
}

pub struct ResolveUserReferenceHandler {
    directory: Arc<dyn UserDirectory>,
}

impl ResolveUserReferenceHandler {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    /// Rebuilds the full user from a reference. Has no side effects; an
    /// unknown or blank id resolves to `None`.
    pub async fn handle(&self, reference: UserReference) -> Result<Option<User>, ApplicationError> {
        if reference.is_blank() {
            tracing::debug!("blank user reference, resolving to null");
            return Ok(None);
        }

        tracing::debug!(user_id = %reference.id, "resolving user reference");
        match self.directory.fetch_user_by_id(&reference.id).await {
            Ok(Some(user)) => Ok(Some(user)),
            Ok(None) => {
                tracing::debug!(user_id = %reference.id, "user not found");
                Ok(None)
            }
            Err(e) => {
                tracing::warn!(user_id = %reference.id, error = %e, "user lookup failed");
                Err(ApplicationError::Directory(e))
            }
        }
    }
}
