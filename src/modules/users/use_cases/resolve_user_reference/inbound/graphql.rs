use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::users::adapters::inbound::graphql::GqlUser;
use crate::modules::users::use_cases::resolve_user_reference::reference::UserReference;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UserEntityQuery;

#[Object]
impl UserEntityQuery {
    /// `User.__resolveReference`, reached through `_entities`.
    #[graphql(entity)]
    async fn find_user_by_id(&self, context: &Context<'_>, id: ID) -> GqlResult<Option<GqlUser>> {
        let state = context.data_unchecked::<AppState>();
        let user = state
            .resolve_user_reference
            .handle(UserReference::new(id.0))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(user.map(Into::into))
    }
}
