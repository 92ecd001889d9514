use serde::{Deserialize, Serialize};

pub const ME_USER_ID: &str = "1";
pub const ME_USERNAME: &str = "@ava";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>, username: Option<String>) -> Self {
        Self {
            id: id.into(),
            username,
        }
    }

    /// The user behind `Query.me`. Built fresh on every call.
    pub fn me() -> Self {
        Self::new(ME_USER_ID, Some(ME_USERNAME.to_string()))
    }
}
