use async_graphql::{ID, SimpleObject};

use crate::modules::users::core::user::User;

/// Wire shape of the `User` entity: `type User @key(fields: "id")`.
/// The key directive comes from the entity resolver keyed on `id`.
#[derive(SimpleObject, Clone, Debug, PartialEq)]
#[graphql(name = "User")]
pub struct GqlUser {
    pub id: ID,
    pub username: Option<String>,
}

impl From<User> for GqlUser {
    fn from(u: User) -> Self {
        Self {
            id: ID(u.id),
            username: u.username,
        }
    }
}
