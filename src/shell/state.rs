use crate::modules::users::core::ports::UserDirectory;
use crate::modules::users::use_cases::resolve_user_reference::handler::ResolveUserReferenceHandler;
use std::sync::Arc;

/// Schema data handed to every resolver. Holds the injected user lookup.
#[derive(Clone)]
pub struct AppState {
    pub resolve_user_reference: Arc<ResolveUserReferenceHandler>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserDirectory>) -> Self {
        Self {
            resolve_user_reference: Arc::new(ResolveUserReferenceHandler::new(users)),
        }
    }
}
