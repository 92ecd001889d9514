/// The partial `User` a gateway sends when it needs the full entity.
/// Carries only the `@key` fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserReference {
    pub id: String,
}

impl UserReference {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn is_blank(&self) -> bool {
        self.id.trim().is_empty()
    }
}
