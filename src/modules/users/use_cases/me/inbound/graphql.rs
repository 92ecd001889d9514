use async_graphql::Object;

use crate::modules::users::adapters::inbound::graphql::GqlUser;
use crate::modules::users::core::user::User;

#[derive(Default)]
pub struct MeQuery;

#[Object]
impl MeQuery {
    /// The current user. Always the same placeholder.
    async fn me(&self) -> Option<GqlUser> {
        Some(User::me().into())
    }
}
